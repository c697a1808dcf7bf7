//! Layout trees.
//!
//! A page is an immutable tree of [`Node`]s built with chained builder calls
//! and rendered to HTML once it is served.
//!
//! # Structure
//!
//! - [`Node`] / [`Element`]: the tree itself
//! - [`Graph`]: a chart embed carrying its precomputed figure
//! - [`shell`]: the header, navigation and footer wrapped around every page
//!
//! # Example
//!
//! ```rust
//! use gapminder_dash::layout::Node;
//!
//! let tree = Node::div()
//!     .class("container")
//!     .child(Node::p().text("All Rights Reserved."));
//! assert_eq!(
//!     tree.to_html(),
//!     "<div class=\"container\"><p>All Rights Reserved.</p></div>"
//! );
//! ```

mod render;
pub mod shell;

pub use render::escape_text;

use crate::chart::ChartSpec;
use crate::error::Result;

/// Endpoint serving a resolved page as an HTML fragment.
pub const PAGE_CONTENT_PATH: &str = "/_dash/page-content";

/// Element that receives the resolved page.
pub const PAGE_CONTENT_ID: &str = "page-content";

/// HTML tags the dashboard emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    H2,
    P,
    Small,
    Br,
    Img,
    Ul,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::H2 => "h2",
            Self::P => "p",
            Self::Small => "small",
            Self::Br => "br",
            Self::Img => "img",
            Self::Ul => "ul",
            Self::Li => "li",
        }
    }

    /// Void elements take no children and no closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Br | Self::Img)
    }
}

/// A node of a layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// A client-side navigation link.
    Link { label: String, href: String },
    /// A chart embed.
    Graph(Box<Graph>),
}

/// A container or content element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Vec<(String, String)>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A chart embed with its figure serialized ahead of time.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub id: String,
    pub chart: ChartSpec,
    figure_json: String,
}

impl Graph {
    pub fn new(id: impl Into<String>, chart: ChartSpec) -> Result<Self> {
        let figure_json = chart.to_figure().to_json()?;
        Ok(Self {
            id: id.into(),
            chart,
            figure_json,
        })
    }

    pub fn figure_json(&self) -> &str {
        &self.figure_json
    }
}

impl Node {
    pub fn element(tag: Tag) -> Self {
        Self::Element(Element {
            tag,
            id: None,
            class: None,
            style: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn div() -> Self {
        Self::element(Tag::Div)
    }

    pub fn h2() -> Self {
        Self::element(Tag::H2)
    }

    pub fn p() -> Self {
        Self::element(Tag::P)
    }

    pub fn small() -> Self {
        Self::element(Tag::Small)
    }

    pub fn ul() -> Self {
        Self::element(Tag::Ul)
    }

    pub fn li() -> Self {
        Self::element(Tag::Li)
    }

    pub fn br() -> Self {
        Self::element(Tag::Br)
    }

    pub fn img(src: impl Into<String>) -> Self {
        Self::element(Tag::Img).attr("src", src)
    }

    pub fn text_node(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn graph(graph: Graph) -> Self {
        Self::Graph(Box::new(graph))
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.map_element(|el| el.id = Some(id.into()))
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.map_element(|el| el.class = Some(class.into()))
    }

    #[must_use]
    pub fn style(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_element(|el| el.style.push((property.into(), value.into())))
    }

    #[must_use]
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_element(|el| el.attrs.push((name.into(), value.into())))
    }

    #[must_use]
    pub fn child(self, child: Node) -> Self {
        self.map_element(|el| el.children.push(child))
    }

    #[must_use]
    pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        self.map_element(|el| el.children.extend(children))
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Self::Text(text.into()))
    }

    // Builder calls on non-element nodes are no-ops.
    fn map_element(mut self, f: impl FnOnce(&mut Element)) -> Self {
        if let Self::Element(el) = &mut self {
            f(el);
        }
        self
    }

    /// Chart embeds in document order.
    pub fn graphs(&self) -> Vec<&Graph> {
        let mut out = Vec::new();
        self.collect_graphs(&mut out);
        out
    }

    fn collect_graphs<'a>(&'a self, out: &mut Vec<&'a Graph>) {
        match self {
            Self::Graph(graph) => out.push(graph),
            Self::Element(el) => el.children.iter().for_each(|c| c.collect_graphs(out)),
            Self::Text(_) | Self::Link { .. } => {}
        }
    }

    /// Navigation links in document order.
    pub fn links(&self) -> Vec<(&str, &str)> {
        match self {
            Self::Link { label, href } => vec![(label.as_str(), href.as_str())],
            Self::Element(el) => el.children.iter().flat_map(Node::links).collect(),
            Self::Text(_) | Self::Graph(_) => Vec::new(),
        }
    }

    /// Find an element by its `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let Self::Element(el) = self else {
            return None;
        };
        if el.id.as_deref() == Some(id) {
            return Some(el);
        }
        el.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// Render this tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render::render(self, &mut out);
        out
    }
}
