//! Page routing.
//!
//! The route set is a closed enum; [`RouteTable`] holds one precomputed
//! layout tree per route and the not-found placeholder for everything else.
//!
//! # Example
//!
//! ```rust
//! use gapminder_dash::dataset::Dataset;
//! use gapminder_dash::router::{Route, RouteTable};
//!
//! let table = RouteTable::build(&Dataset::bundled().unwrap()).unwrap();
//! assert_eq!(table.resolve("/app2").route(), Some(Route::App2));
//! assert_eq!(table.resolve("/nowhere").route(), None);
//! ```

use crate::dataset::Dataset;
use crate::error::Result;
use crate::layout::Node;
use crate::pages;

/// A navigable dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    App1,
    App2,
    App3,
}

impl Route {
    pub const ALL: [Route; 3] = [Self::App1, Self::App2, Self::App3];

    pub fn path(self) -> &'static str {
        match self {
            Self::App1 => "/app1",
            Self::App2 => "/app2",
            Self::App3 => "/app3",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::App1 => "Dashboard 1",
            Self::App2 => "Dashboard 2",
            Self::App3 => "Dashboard 3",
        }
    }

    /// Exact match only: no trailing slash or case folding.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    fn index(self) -> usize {
        match self {
            Self::App1 => 0,
            Self::App2 => 1,
            Self::App3 => 2,
        }
    }

    fn layout(self, data: &Dataset) -> Result<Node> {
        match self {
            Self::App1 => pages::app1::layout(data),
            Self::App2 => pages::app2::layout(data),
            Self::App3 => pages::app3::layout(data),
        }
    }

    /// `(label, path)` pairs for the navigation list.
    pub fn nav_links() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|r| (r.label(), r.path())).collect()
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Page(Route, &'a Node),
    NotFound(&'a Node),
}

impl<'a> Resolved<'a> {
    pub fn tree(self) -> &'a Node {
        match self {
            Self::Page(_, tree) | Self::NotFound(tree) => tree,
        }
    }

    pub fn route(self) -> Option<Route> {
        match self {
            Self::Page(route, _) => Some(route),
            Self::NotFound(_) => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Page(..))
    }
}

/// Fixed mapping from route to its page tree.
#[derive(Debug, Clone)]
pub struct RouteTable {
    pages: [Node; 3],
    not_found: Node,
}

impl RouteTable {
    /// Run every chart builder and compose every page.
    pub fn build(data: &Dataset) -> Result<Self> {
        let trees = [
            Route::App1.layout(data)?,
            Route::App2.layout(data)?,
            Route::App3.layout(data)?,
        ];
        let table = Self {
            pages: trees,
            not_found: pages::not_found(),
        };
        tracing::info!(
            name: "routes.built",
            routes = Route::ALL.len(),
            graphs = table.pages.iter().map(|p| p.graphs().len()).sum::<usize>(),
            "Route table built"
        );
        Ok(table)
    }

    pub fn page(&self, route: Route) -> &Node {
        &self.pages[route.index()]
    }

    pub fn not_found(&self) -> &Node {
        &self.not_found
    }

    /// Map a URL path to the tree to display.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        match Route::from_path(path) {
            Some(route) => Resolved::Page(route, self.page(route)),
            None => Resolved::NotFound(&self.not_found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    fn table() -> RouteTable {
        RouteTable::build(&Dataset::bundled().unwrap()).unwrap()
    }

    #[test]
    fn test_known_paths_resolve_to_their_pages() {
        let table = table();
        for route in Route::ALL {
            let resolved = table.resolve(route.path());
            assert_eq!(resolved.route(), Some(route));
            assert!(std::ptr::eq(resolved.tree(), table.page(route)));
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = table();
        let first = table.resolve("/app1").tree().clone();
        for _ in 0..3 {
            assert_eq!(table.resolve("/app1").tree(), &first);
        }
    }

    #[test]
    fn test_unknown_paths_resolve_to_placeholder() {
        let table = table();
        for path in ["/", "", "/app4", "/app1/", "/APP1", "app1"] {
            let resolved = table.resolve(path);
            assert!(!resolved.is_found(), "{path} should not match");
            assert!(std::ptr::eq(resolved.tree(), table.not_found()));
            assert_eq!(resolved.tree(), &Node::text_node("404"));
        }
    }

    #[test]
    fn test_page_one_has_bar_then_scatter() {
        let table = table();
        let kinds: Vec<ChartKind> = table
            .page(Route::App1)
            .graphs()
            .iter()
            .map(|g| g.chart.kind())
            .collect();
        assert_eq!(kinds, vec![ChartKind::Bar, ChartKind::Scatter]);
    }

    #[test]
    fn test_nav_links() {
        assert_eq!(
            Route::nav_links(),
            vec![
                ("Dashboard 1", "/app1"),
                ("Dashboard 2", "/app2"),
                ("Dashboard 3", "/app3"),
            ]
        );
    }
}
