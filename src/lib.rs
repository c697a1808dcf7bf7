//! Gapminder Dashboard
//!
//! A small multi-page demo dashboard: chart descriptions over the Gapminder
//! dataset, composed into HTML layouts and served behind a path router with
//! client-side navigation.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server serving full pages and page fragments
//! - **Pages**: one chart builder module per dashboard page
//! - **UI**: immutable layout trees rendered to HTML, Plotly.js figures, HTMX links
//!
//! # Modules
//!
//! - [`dataset`]: Typed records and column access
//! - [`chart`]: Chart descriptions and Plotly figure generation
//! - [`layout`]: Layout trees, HTML rendering and the app shell
//! - [`pages`]: Per-page chart builders
//! - [`router`]: Path to page resolution

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod pages;
pub mod router;
pub mod server;

use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::error::Result;

use router::RouteTable;
use server::RenderedPages;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Precomputed page trees.
    pub routes: Arc<RouteTable>,
    /// HTML for every page, rendered once.
    pub rendered: Arc<RenderedPages>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Load the dataset and build every page.
    pub fn new(config: Arc<AppConfig>) -> Result<Self> {
        let dataset = Dataset::load(config.dashboard.dataset_path.as_deref())?;
        let routes = RouteTable::build(&dataset)?;
        let rendered = Arc::new(RenderedPages::render(&routes, &config));
        Ok(Self {
            routes: Arc::new(routes),
            rendered,
            config,
        })
    }
}
