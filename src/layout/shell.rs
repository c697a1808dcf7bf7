//! Application shell shared by every page.
//!
//! The shell is the city-branded header, the dashboard navigation list, the
//! `page-content` region the router fills, and the footer.

use super::{Node, PAGE_CONTENT_ID, escape_text};
use crate::config::AssetsConfig;

/// City logo shown in the header.
pub const LOGO_SRC: &str =
    "//www.baltimorecity.gov/sites/all/themes/custom/flight_city/images/uber/logo-big.png";

const BRAND_DARK: &str = "#31363c";
const BRAND_GOLD: &str = "#deb64b";

fn header() -> Node {
    Node::div()
        .class("container-fluid")
        .style("background", BRAND_DARK)
        .child(
            Node::div()
                .class("container pt-4 pb-4")
                .child(Node::img(LOGO_SRC).class("mr-3").style("float", "left"))
                .child(
                    Node::h2()
                        .style("color", "#FFF")
                        .child(Node::small().style("color", BRAND_GOLD).text(" City of "))
                        .child(Node::br())
                        .text(" Baltimore "),
                ),
        )
}

fn navigation(links: &[(&str, &str)]) -> Node {
    let items = links.iter().map(|(label, href)| {
        Node::li()
            .class("list-group-item")
            .child(Node::link(*label, *href))
    });
    Node::div()
        .class("col-md-3")
        .child(Node::div().child(Node::ul().class("list-group").children(items)))
}

fn footer() -> Node {
    Node::div()
        .class("container-fluid")
        .style("background", BRAND_GOLD)
        .child(
            Node::div()
                .class("container pt-3 pb-3")
                .child(
                    Node::p()
                        .class("m-0")
                        .style("line-height", "1em")
                        .text("Copyright © 2018 City of Baltimore"),
                )
                .child(Node::br())
                .child(Node::p().class("m-0").text("All Rights Reserved.")),
        )
}

/// Wrap `content` in the header, navigation and footer.
///
/// `links` are `(label, path)` pairs in display order.
pub fn app_shell(links: &[(&str, &str)], content: Node) -> Node {
    Node::div()
        .child(header())
        .child(
            Node::div().class("container").child(
                Node::div()
                    .class("row mt-5 mb-5")
                    .child(navigation(links))
                    .child(
                        Node::div()
                            .class("col-md-9")
                            .child(Node::div().id(PAGE_CONTENT_ID).child(content)),
                    ),
            ),
        )
        .child(footer())
}

/// Render a complete HTML document around `body`.
pub fn document(title: &str, assets: &AssetsConfig, body: &Node) -> String {
    let title = escape_text(title);
    let stylesheet = escape_text(&assets.stylesheet);
    let plotly_js = escape_text(&assets.plotly_js);
    let htmx_js = escape_text(&assets.htmx_js);
    let body = body.to_html();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
    <script src="{plotly_js}"></script>
    <script src="{htmx_js}"></script>
</head>
<body>
    {body}
</body>
</html>"#
    )
}
