//! Plotly.js figure model.
//!
//! Rows are split into one trace per distinct value of the color channel,
//! in order of first appearance, and each trace gets the next color from
//! [`PALETTE`]. The shapes serialize directly to the `{data, layout}` JSON
//! accepted by `Plotly.newPlot`.

use serde::Serialize;
use serde_json::Value;

use super::{ChartKind, ChartSpec};
use crate::error::Result;

/// Default qualitative color sequence.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One Plotly trace.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub legendgroup: String,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsetgroup: Option<String>,
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<Vec<Value>>>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: Title,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub title: Title,
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureLayout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
}

fn title(text: impl Into<String>) -> Title {
    Title { text: text.into() }
}

/// Row indices per color group, in first-appearance order.
fn groups(chart: &ChartSpec) -> Vec<(String, Vec<usize>)> {
    let rows = chart.data().len();
    let Some(color) = chart.color() else {
        return vec![(String::new(), (0..rows).collect())];
    };

    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for row in 0..rows {
        let key = color.text(chart.data(), row);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    groups
}

fn hovertemplate(chart: &ChartSpec, group: &str) -> String {
    let mut lines = Vec::new();
    if let Some(color) = chart.color() {
        lines.push(format!("{}={group}", chart.label(color.name())));
    }
    lines.push(format!("{}=%{{x}}", chart.label(chart.x().name())));
    lines.push(format!("{}=%{{y}}", chart.label(chart.y().name())));
    if let Some(size) = chart.size() {
        lines.push(format!("{}=%{{marker.size}}", chart.label(size.name())));
    }
    for (i, binding) in chart.hover_data().iter().enumerate() {
        lines.push(format!("{}=%{{customdata[{i}]}}", chart.label(binding.name())));
    }

    let body = lines.join("<br>");
    match chart.hover_name() {
        Some(_) => format!("<b>%{{hovertext}}</b><br><br>{body}<extra></extra>"),
        None => format!("{body}<extra></extra>"),
    }
}

/// Area-mode marker scale so the largest value renders at `size_max` pixels.
fn sizeref(chart: &ChartSpec) -> Option<f64> {
    let size = chart.size()?;
    let max = (0..chart.data().len())
        .map(|row| size.number(chart.data(), row))
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Some(1.0);
    }
    Some(2.0 * max / (chart.size_max() * chart.size_max()))
}

pub(super) fn build(chart: &ChartSpec) -> Figure {
    let data = chart.data();
    let sizeref = sizeref(chart);
    let has_color = chart.color().is_some();

    let traces = groups(chart)
        .into_iter()
        .enumerate()
        .map(|(i, (name, rows))| {
            let marker = Marker {
                color: PALETTE[i % PALETTE.len()],
                size: chart
                    .size()
                    .map(|b| rows.iter().map(|&r| b.number(data, r)).collect()),
                sizemode: sizeref.map(|_| "area"),
                sizeref,
            };
            let customdata = (!chart.hover_data().is_empty()).then(|| {
                rows.iter()
                    .map(|&r| chart.hover_data().iter().map(|b| b.value(data, r)).collect())
                    .collect()
            });

            Trace {
                kind: chart.kind().trace_type(),
                hovertemplate: hovertemplate(chart, &name),
                legendgroup: name.clone(),
                showlegend: has_color,
                mode: (chart.kind() == ChartKind::Scatter).then_some("markers"),
                orientation: (chart.kind() == ChartKind::Bar).then_some("v"),
                offsetgroup: (chart.kind() == ChartKind::Bar).then(|| name.clone()),
                x: rows.iter().map(|&r| chart.x().value(data, r)).collect(),
                y: rows.iter().map(|&r| chart.y().value(data, r)).collect(),
                marker,
                hovertext: chart
                    .hover_name()
                    .map(|b| rows.iter().map(|&r| b.text(data, r)).collect()),
                customdata,
                name,
            }
        })
        .collect();

    let axis = |name: &str, log: bool| Axis {
        title: title(chart.label(name)),
        scale: log.then_some("log"),
    };

    Figure {
        data: traces,
        layout: FigureLayout {
            title: title(chart.title()),
            xaxis: axis(chart.x().name(), chart.log_x()),
            yaxis: axis(chart.y().name(), chart.log_y()),
            legend: chart.color().map(|c| Legend {
                title: title(chart.label(c.name())),
                tracegroupgap: 0,
            }),
            barmode: (chart.kind() == ChartKind::Bar).then_some("relative"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Binding;
    use crate::dataset::{Dataset, Field};

    fn scatter() -> ChartSpec {
        ChartSpec::scatter(Dataset::bundled().unwrap().filter_year(2007))
            .x(Field::GdpPercap)
            .y(Field::LifeExp)
            .size(Field::Pop)
            .color(Field::Continent)
            .hover_name(Field::Country)
            .log_x(true)
            .size_max(60.0)
            .title("GDP Per Capita")
            .build()
            .unwrap()
    }

    #[test]
    fn test_one_trace_per_continent_in_first_seen_order() {
        let figure = scatter().to_figure();
        let names: Vec<&str> = figure.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Asia", "Europe", "Americas", "Africa", "Oceania"]);
        assert_eq!(figure.data[0].marker.color, PALETTE[0]);
        assert_eq!(figure.data[1].marker.color, PALETTE[1]);
    }

    #[test]
    fn test_every_row_lands_in_a_trace() {
        let chart = scatter();
        let figure = chart.to_figure();
        let plotted: usize = figure.data.iter().map(|t| t.x.len()).sum();
        assert_eq!(plotted, chart.data().len());
    }

    #[test]
    fn test_scatter_marker_scaling() {
        let chart = scatter();
        let figure = chart.to_figure();
        let max_pop = chart
            .data()
            .records()
            .iter()
            .map(|r| r.pop)
            .max()
            .unwrap() as f64;
        let marker = &figure.data[0].marker;
        assert_eq!(marker.sizemode, Some("area"));
        let expected = 2.0 * max_pop / (60.0 * 60.0);
        assert!((marker.sizeref.unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_log_axis_and_hover() {
        let figure = scatter().to_figure();
        assert_eq!(figure.layout.xaxis.scale, Some("log"));
        assert_eq!(figure.layout.yaxis.scale, None);
        assert_eq!(figure.layout.title.text, "GDP Per Capita");

        let trace = &figure.data[0];
        assert_eq!(trace.mode, Some("markers"));
        assert!(trace.hovertemplate.starts_with("<b>%{hovertext}</b>"));
        assert!(trace.hovertemplate.contains("continent=Asia"));
        assert!(trace.hovertemplate.contains("pop=%{marker.size}"));
        assert!(trace.hovertext.as_ref().unwrap().contains(&"China".to_string()));
    }

    #[test]
    fn test_bar_figure_uses_labels_and_custom_data() {
        let data = Dataset::bundled().unwrap();
        let gdp = data.product(Field::Pop, Field::GdpPercap).unwrap();
        let figure = ChartSpec::bar(data)
            .x(Field::Year)
            .y(Binding::derived("y", gdp))
            .color(Field::Continent)
            .hover_data(Field::Country)
            .label("y", "gdp")
            .build()
            .unwrap()
            .to_figure();

        assert_eq!(figure.layout.barmode, Some("relative"));
        assert_eq!(figure.layout.yaxis.title.text, "gdp");
        let trace = &figure.data[0];
        assert_eq!(trace.kind, "bar");
        assert_eq!(trace.mode, None);
        assert!(trace.hovertemplate.contains("gdp=%{y}"));
        assert!(trace.hovertemplate.contains("country=%{customdata[0]}"));
        assert_eq!(trace.customdata.as_ref().unwrap().len(), trace.x.len());
    }

    #[test]
    fn test_uncolored_chart_is_a_single_trace() {
        let figure = ChartSpec::scatter(Dataset::bundled().unwrap())
            .x(Field::Year)
            .y(Field::LifeExp)
            .build()
            .unwrap()
            .to_figure();
        assert_eq!(figure.data.len(), 1);
        assert!(!figure.data[0].showlegend);
        assert!(figure.layout.legend.is_none());
    }

    #[test]
    fn test_figure_json_shape() {
        let json: Value = serde_json::from_str(&scatter().to_figure().to_json().unwrap()).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["layout"]["xaxis"]["type"], "log");
        assert!(json["layout"].get("barmode").is_none());
    }
}
