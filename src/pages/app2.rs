//! Dashboard 2: how the population splits across continents.

use crate::chart::ChartSpec;
use crate::dataset::{Dataset, Field};
use crate::error::Result;
use crate::layout::Node;

/// Population per continent in the most recent year, one bar segment per country.
pub fn population_bar(data: &Dataset) -> Result<ChartSpec> {
    let year = data.latest_year().unwrap_or(super::app1::SCATTER_YEAR);
    ChartSpec::bar(data.filter_year(year))
        .x(Field::Continent)
        .y(Field::Pop)
        .color(Field::Continent)
        .hover_data(Field::Country)
        .title("Population by continent")
        .build()
}

pub fn layout(data: &Dataset) -> Result<Node> {
    super::compose("app2", vec![population_bar(data)?])
}
