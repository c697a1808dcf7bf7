//! The Gapminder country/year dataset.
//!
//! Records are loaded once at startup, either from the copy compiled into
//! the binary or from an operator-supplied JSON file, and are never mutated.
//!
//! # Example
//!
//! ```rust
//! use gapminder_dash::dataset::{Dataset, Field};
//!
//! let data = Dataset::bundled().unwrap();
//! let slice = data.filter_year(2007);
//! assert!(slice.records().iter().all(|r| r.year == 2007));
//! assert_eq!(Field::GdpPercap.column(), "gdpPercap");
//! ```

mod field;

pub use field::{Cell, Field};

use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result};

const BUNDLED: &str = include_str!("../../data/gapminder.json");

/// One country observation for a single year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: i32,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: u64,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
    pub iso_alpha: String,
    pub iso_num: u32,
}

impl Record {
    /// Read the value of a single column.
    // Populations stay below 2^53, so the conversion is exact.
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self, field: Field) -> Cell<'_> {
        match field {
            Field::Country => Cell::Text(&self.country),
            Field::Continent => Cell::Text(&self.continent),
            Field::IsoAlpha => Cell::Text(&self.iso_alpha),
            Field::Year => Cell::Number(f64::from(self.year)),
            Field::LifeExp => Cell::Number(self.life_exp),
            Field::Pop => Cell::Number(self.pop as f64),
            Field::GdpPercap => Cell::Number(self.gdp_percap),
            Field::IsoNum => Cell::Number(f64::from(self.iso_num)),
        }
    }
}

/// Read-only, ordered collection of [`Record`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Load the copy of the dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED)
    }

    /// Load a dataset from a JSON array of records on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a dataset from a JSON array of records.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(text)?;
        if records.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }
        Ok(Self { records })
    }

    /// Load from `path` when given, otherwise fall back to the bundled copy.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let dataset = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::bundled()?,
        };
        tracing::info!(
            name: "dataset.loaded",
            records = dataset.len(),
            source = path.unwrap_or("bundled"),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Keep only the records for which `keep` returns true.
    ///
    /// The result may be empty; charts over an empty slice simply have no
    /// traces.
    #[must_use]
    pub fn filter(&self, keep: impl Fn(&Record) -> bool) -> Self {
        Self {
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Records observed in `year`.
    #[must_use]
    pub fn filter_year(&self, year: i32) -> Self {
        self.filter(|r| r.year == year)
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Most recent year in the dataset.
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// All values of one column, in record order.
    pub fn column(&self, field: Field) -> Vec<Cell<'_>> {
        self.records.iter().map(|r| r.value(field)).collect()
    }

    /// Multiply two numeric columns row by row.
    pub fn product(&self, left: Field, right: Field) -> Result<Vec<f64>> {
        for field in [left, right] {
            if !field.is_numeric() {
                return Err(DashboardError::NonNumericField {
                    channel: "product",
                    field,
                });
            }
        }
        Ok(self
            .records
            .iter()
            .map(|r| {
                let l = r.value(left).as_f64().unwrap_or_default();
                let rr = r.value(right).as_f64().unwrap_or_default();
                l * rr
            })
            .collect())
    }
}
