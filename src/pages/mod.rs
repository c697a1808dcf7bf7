//! Dashboard pages.
//!
//! Each page module owns the chart builders for that page and composes
//! their charts into a layout tree. Charts are built once at startup.
//!
//! - [`app1`]: world GDP over time and GDP per capita against life expectancy
//! - [`app2`]: population by continent
//! - [`app3`]: life expectancy over time

pub mod app1;
pub mod app2;
pub mod app3;

use crate::chart::ChartSpec;
use crate::error::Result;
use crate::layout::{Graph, Node};

/// Text shown for any path that is not a dashboard page.
pub const NOT_FOUND: &str = "404";

/// Placeholder tree for unknown paths.
pub fn not_found() -> Node {
    Node::text_node(NOT_FOUND)
}

/// Embed `charts` in order, with element ids derived from `slug`.
fn compose(slug: &str, charts: Vec<ChartSpec>) -> Result<Node> {
    let graphs = charts
        .into_iter()
        .enumerate()
        .map(|(i, chart)| Graph::new(format!("{slug}-graph-{i}"), chart).map(Node::graph))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::div().children(graphs))
}
