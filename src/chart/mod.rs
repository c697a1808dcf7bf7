//! Declarative chart descriptions.
//!
//! A [`ChartSpec`] names a chart kind, the rows it plots and the column
//! bound to each visual channel. It is built once with [`ChartBuilder`] and
//! converted into a Plotly.js [`Figure`] for embedding in a page.
//!
//! # Example
//!
//! ```rust
//! use gapminder_dash::chart::{ChartKind, ChartSpec};
//! use gapminder_dash::dataset::{Dataset, Field};
//!
//! let data = Dataset::bundled().unwrap().filter_year(2007);
//! let chart = ChartSpec::scatter(data)
//!     .x(Field::GdpPercap)
//!     .y(Field::LifeExp)
//!     .log_x(true)
//!     .title("GDP Per Capita")
//!     .build()
//!     .unwrap();
//! assert_eq!(chart.kind(), ChartKind::Scatter);
//! ```

mod figure;

pub use figure::{Axis, Figure, FigureLayout, Legend, Marker, PALETTE, Title, Trace};

use std::collections::BTreeMap;

use serde_json::Value;

use crate::dataset::{Dataset, Field};
use crate::error::{DashboardError, Result};

/// Marker size cap used when none is given.
pub const DEFAULT_SIZE_MAX: f64 = 20.0;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Bar,
}

impl ChartKind {
    /// Plotly.js trace type.
    #[must_use]
    pub fn trace_type(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Bar => "bar",
        }
    }
}

/// What a visual channel is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A column of the dataset.
    Field(Field),
    /// A computed numeric series, one value per row.
    Derived { name: String, values: Vec<f64> },
}

impl Binding {
    pub fn derived(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::Derived {
            name: name.into(),
            values,
        }
    }

    /// Name used in hover text and as the default axis title.
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.column(),
            Self::Derived { name, .. } => name,
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(*field),
            Self::Derived { .. } => None,
        }
    }

    fn value(&self, data: &Dataset, row: usize) -> Value {
        match self {
            Self::Field(field) => data.records()[row].value(*field).to_json(),
            Self::Derived { values, .. } => Value::from(values[row]),
        }
    }

    fn number(&self, data: &Dataset, row: usize) -> f64 {
        match self {
            Self::Field(field) => data.records()[row]
                .value(*field)
                .as_f64()
                .unwrap_or(f64::NAN),
            Self::Derived { values, .. } => values[row],
        }
    }

    fn text(&self, data: &Dataset, row: usize) -> String {
        match self {
            Self::Field(field) => data.records()[row].value(*field).key(),
            Self::Derived { values, .. } => values[row].to_string(),
        }
    }

    fn check_numeric(&self, channel: &'static str) -> Result<()> {
        match self {
            Self::Field(field) if !field.is_numeric() => Err(DashboardError::NonNumericField {
                channel,
                field: *field,
            }),
            _ => Ok(()),
        }
    }

    fn check_len(&self, channel: &str, rows: usize) -> Result<()> {
        match self {
            Self::Derived { values, .. } if values.len() != rows => {
                Err(DashboardError::ChannelLength {
                    channel: channel.to_string(),
                    expected: rows,
                    actual: values.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<Field> for Binding {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

/// An immutable chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    kind: ChartKind,
    data: Dataset,
    title: String,
    x: Binding,
    y: Binding,
    size: Option<Binding>,
    color: Option<Binding>,
    hover_name: Option<Binding>,
    hover_data: Vec<Binding>,
    log_x: bool,
    log_y: bool,
    size_max: f64,
    labels: BTreeMap<String, String>,
}

impl ChartSpec {
    pub fn scatter(data: Dataset) -> ChartBuilder {
        ChartBuilder::new(ChartKind::Scatter, data)
    }

    pub fn bar(data: Dataset) -> ChartBuilder {
        ChartBuilder::new(ChartKind::Bar, data)
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x(&self) -> &Binding {
        &self.x
    }

    pub fn y(&self) -> &Binding {
        &self.y
    }

    pub fn size(&self) -> Option<&Binding> {
        self.size.as_ref()
    }

    pub fn color(&self) -> Option<&Binding> {
        self.color.as_ref()
    }

    pub fn hover_name(&self) -> Option<&Binding> {
        self.hover_name.as_ref()
    }

    pub fn hover_data(&self) -> &[Binding] {
        &self.hover_data
    }

    pub fn log_x(&self) -> bool {
        self.log_x
    }

    pub fn log_y(&self) -> bool {
        self.log_y
    }

    pub fn size_max(&self) -> f64 {
        self.size_max
    }

    /// Display label for a channel name, honoring label overrides.
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.labels.get(name).map_or(name, String::as_str)
    }

    /// Convert into a Plotly.js figure.
    pub fn to_figure(&self) -> Figure {
        figure::build(self)
    }
}

/// Builder for [`ChartSpec`].
#[derive(Debug)]
pub struct ChartBuilder {
    kind: ChartKind,
    data: Dataset,
    title: String,
    x: Option<Binding>,
    y: Option<Binding>,
    size: Option<Binding>,
    color: Option<Binding>,
    hover_name: Option<Binding>,
    hover_data: Vec<Binding>,
    log_x: bool,
    log_y: bool,
    size_max: f64,
    labels: BTreeMap<String, String>,
}

impl ChartBuilder {
    fn new(kind: ChartKind, data: Dataset) -> Self {
        Self {
            kind,
            data,
            title: String::new(),
            x: None,
            y: None,
            size: None,
            color: None,
            hover_name: None,
            hover_data: Vec::new(),
            log_x: false,
            log_y: false,
            size_max: DEFAULT_SIZE_MAX,
            labels: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn x(mut self, binding: impl Into<Binding>) -> Self {
        self.x = Some(binding.into());
        self
    }

    #[must_use]
    pub fn y(mut self, binding: impl Into<Binding>) -> Self {
        self.y = Some(binding.into());
        self
    }

    #[must_use]
    pub fn size(mut self, binding: impl Into<Binding>) -> Self {
        self.size = Some(binding.into());
        self
    }

    #[must_use]
    pub fn color(mut self, binding: impl Into<Binding>) -> Self {
        self.color = Some(binding.into());
        self
    }

    #[must_use]
    pub fn hover_name(mut self, binding: impl Into<Binding>) -> Self {
        self.hover_name = Some(binding.into());
        self
    }

    #[must_use]
    pub fn hover_data(mut self, binding: impl Into<Binding>) -> Self {
        self.hover_data.push(binding.into());
        self
    }

    #[must_use]
    pub fn log_x(mut self, enabled: bool) -> Self {
        self.log_x = enabled;
        self
    }

    #[must_use]
    pub fn log_y(mut self, enabled: bool) -> Self {
        self.log_y = enabled;
        self
    }

    #[must_use]
    pub fn size_max(mut self, size_max: f64) -> Self {
        self.size_max = size_max;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the display label of a channel name.
    #[must_use]
    pub fn label(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(name.into(), label.into());
        self
    }

    /// Validate the bindings and freeze the description.
    pub fn build(self) -> Result<ChartSpec> {
        let x = self.x.ok_or(DashboardError::MissingChannel("x"))?;
        let y = self.y.ok_or(DashboardError::MissingChannel("y"))?;

        let rows = self.data.len();
        x.check_len("x", rows)?;
        y.check_len("y", rows)?;
        for (channel, binding) in [
            ("size", &self.size),
            ("color", &self.color),
            ("hover_name", &self.hover_name),
        ] {
            if let Some(b) = binding {
                b.check_len(channel, rows)?;
            }
        }
        for binding in &self.hover_data {
            binding.check_len("hover_data", rows)?;
        }

        if let Some(size) = &self.size {
            size.check_numeric("size")?;
        }
        if self.log_x {
            x.check_numeric("x")?;
        }
        if self.log_y {
            y.check_numeric("y")?;
        }

        Ok(ChartSpec {
            kind: self.kind,
            data: self.data,
            title: self.title,
            x,
            y,
            size: self.size,
            color: self.color,
            hover_name: self.hover_name,
            hover_data: self.hover_data,
            log_x: self.log_x,
            log_y: self.log_y,
            size_max: self.size_max,
            labels: self.labels,
        })
    }
}
