//! Dashboard 3: life expectancy across the whole period.

use crate::chart::ChartSpec;
use crate::dataset::{Dataset, Field};
use crate::error::Result;
use crate::layout::Node;

pub fn life_expectancy_scatter(data: &Dataset) -> Result<ChartSpec> {
    ChartSpec::scatter(data.clone())
        .x(Field::Year)
        .y(Field::LifeExp)
        .color(Field::Continent)
        .hover_name(Field::Country)
        .title("Life expectancy over time")
        .build()
}

pub fn layout(data: &Dataset) -> Result<Node> {
    super::compose("app3", vec![life_expectancy_scatter(data)?])
}
