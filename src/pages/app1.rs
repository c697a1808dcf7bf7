//! Dashboard 1: the growth of world GDP and the wealth/health picture in 2007.

use crate::chart::{Binding, ChartSpec};
use crate::dataset::{Dataset, Field};
use crate::error::Result;
use crate::layout::Node;

/// Year shown by the GDP-per-capita scatter.
pub const SCATTER_YEAR: i32 = 2007;

/// GDP per capita against life expectancy, one bubble per country.
pub fn gdp_per_capita_scatter(data: &Dataset) -> Result<ChartSpec> {
    ChartSpec::scatter(data.filter_year(SCATTER_YEAR))
        .x(Field::GdpPercap)
        .y(Field::LifeExp)
        .size(Field::Pop)
        .color(Field::Continent)
        .hover_name(Field::Country)
        .log_x(true)
        .size_max(60.0)
        .title("GDP Per Capita")
        .build()
}

/// Total GDP (population times GDP per capita) per year, stacked by continent.
pub fn world_gdp_bar(data: &Dataset) -> Result<ChartSpec> {
    let gdp = data.product(Field::Pop, Field::GdpPercap)?;
    ChartSpec::bar(data.clone())
        .x(Field::Year)
        .y(Binding::derived("y", gdp))
        .color(Field::Continent)
        .label("y", "gdp")
        .hover_data(Field::Country)
        .title("Evolution of world GDP")
        .build()
}

pub fn layout(data: &Dataset) -> Result<Node> {
    super::compose("app1", vec![world_gdp_bar(data)?, gdp_per_capita_scatter(data)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    fn data() -> Dataset {
        Dataset::bundled().unwrap()
    }

    #[test]
    fn test_scatter_bindings() {
        let chart = gdp_per_capita_scatter(&data()).unwrap();
        assert_eq!(chart.kind(), ChartKind::Scatter);
        assert_eq!(chart.x().field(), Some(Field::GdpPercap));
        assert_eq!(chart.y().field(), Some(Field::LifeExp));
        assert_eq!(chart.size().and_then(Binding::field), Some(Field::Pop));
        assert_eq!(chart.color().and_then(Binding::field), Some(Field::Continent));
        assert_eq!(chart.hover_name().and_then(Binding::field), Some(Field::Country));
        assert!(chart.log_x());
        assert!((chart.size_max() - 60.0).abs() < f64::EPSILON);
        assert!(chart.data().records().iter().all(|r| r.year == SCATTER_YEAR));
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let data = data();
        let first = gdp_per_capita_scatter(&data).unwrap();
        let second = gdp_per_capita_scatter(&data).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_figure(), second.to_figure());
    }

    #[test]
    fn test_bar_plots_total_gdp_over_all_years() {
        let data = data();
        let chart = world_gdp_bar(&data).unwrap();
        assert_eq!(chart.kind(), ChartKind::Bar);
        assert_eq!(chart.x().field(), Some(Field::Year));
        assert_eq!(chart.y().field(), None);
        assert_eq!(chart.label(chart.y().name()), "gdp");
        assert_eq!(chart.data().len(), data.len());
        assert_eq!(chart.title(), "Evolution of world GDP");
    }

    #[test]
    fn test_layout_embeds_bar_then_scatter() {
        let tree = layout(&data()).unwrap();
        let graphs = tree.graphs();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].chart.kind(), ChartKind::Bar);
        assert_eq!(graphs[1].chart.kind(), ChartKind::Scatter);
        assert_eq!(graphs[0].id, "app1-graph-0");
        assert_eq!(graphs[1].id, "app1-graph-1");
    }
}
