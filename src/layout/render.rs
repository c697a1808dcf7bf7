//! HTML serialization of layout trees.

use std::fmt::Write;

use serde_json::Value;

use super::{Element, Graph, Node, PAGE_CONTENT_ID, PAGE_CONTENT_PATH};

/// Escape text for use in element content or a quoted attribute value.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub(super) fn render(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(el) => render_element(el, out),
        Node::Link { label, href } => render_link(label, href, out),
        Node::Graph(graph) => render_graph(graph, out),
    }
}

fn render_attr(name: &str, value: &str, out: &mut String) {
    let _ = write!(out, " {name}=\"{}\"", escape_text(value));
}

fn render_element(el: &Element, out: &mut String) {
    let tag = el.tag.name();
    out.push('<');
    out.push_str(tag);
    if let Some(id) = &el.id {
        render_attr("id", id, out);
    }
    if let Some(class) = &el.class {
        render_attr("class", class, out);
    }
    if !el.style.is_empty() {
        let style = el
            .style
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        render_attr("style", &style, out);
    }
    for (name, value) in &el.attrs {
        render_attr(name, value, out);
    }
    out.push('>');

    if el.tag.is_void() {
        return;
    }
    for child in &el.children {
        render(child, out);
    }
    let _ = write!(out, "</{tag}>");
}

// Links swap only the page content and push the new URL; `href` keeps
// full page loads working without scripts.
fn render_link(label: &str, href: &str, out: &mut String) {
    out.push_str("<a");
    render_attr("href", href, out);
    render_attr("hx-get", &format!("{PAGE_CONTENT_PATH}?pathname={href}"), out);
    render_attr("hx-target", &format!("#{PAGE_CONTENT_ID}"), out);
    render_attr("hx-push-url", href, out);
    out.push('>');
    out.push_str(&escape_text(label));
    out.push_str("</a>");
}

fn render_graph(graph: &Graph, out: &mut String) {
    let id = Value::from(graph.id.as_str());
    // Figure JSON sits inside a script element, so `</` must not appear.
    let figure = graph.figure_json().replace("</", "<\\/");
    out.push_str("<div");
    render_attr("id", &graph.id, out);
    render_attr("class", "dash-graph", out);
    out.push_str("></div>");
    let _ = write!(
        out,
        "<script>(function(){{var fig={figure};\
         Plotly.newPlot({id},fig.data,fig.layout,{{\"responsive\":true}});}})();</script>"
    );
}
