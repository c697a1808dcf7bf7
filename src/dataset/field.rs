//! Dataset columns and cell values.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::DashboardError;

/// A column of the Gapminder dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Country,
    Continent,
    Year,
    LifeExp,
    Pop,
    GdpPercap,
    IsoAlpha,
    IsoNum,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Self::Country,
        Self::Continent,
        Self::Year,
        Self::LifeExp,
        Self::Pop,
        Self::GdpPercap,
        Self::IsoAlpha,
        Self::IsoNum,
    ];

    /// Column name as it appears in the source data.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Continent => "continent",
            Self::Year => "year",
            Self::LifeExp => "lifeExp",
            Self::Pop => "pop",
            Self::GdpPercap => "gdpPercap",
            Self::IsoAlpha => "iso_alpha",
            Self::IsoNum => "iso_num",
        }
    }

    /// Whether the column holds numbers rather than labels.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Country | Self::Continent | Self::IsoAlpha)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Field {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.column() == s)
            .ok_or_else(|| DashboardError::UnknownField(s.to_string()))
    }
}

/// A single value read out of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

impl Cell<'_> {
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Text(_) => None,
        }
    }

    /// Grouping key used when a column drives trace splitting.
    pub fn key(self) -> String {
        match self {
            Self::Text(s) => s.to_string(),
            Self::Number(n) => n.to_string(),
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            Self::Text(s) => Value::from(s),
            Self::Number(n) => Value::from(n),
        }
    }
}
