//! Layered configuration.
//!
//! Priority: CLI flag > CLI env var > `DASH_` environment > config file >
//! defaults. The config file is `--config`/`CONFIG_FILE` when given,
//! otherwise `./config.yaml` if it exists.

use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// JSON dataset to load instead of the bundled one
    #[arg(long, env = "DATASET_PATH")]
    pub dataset: Option<String>,

    /// Run in debug mode (verbose logging)
    #[arg(long)]
    pub debug: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub debug: bool,
    #[serde(default)]
    pub dataset_path: Option<String>,
}

/// Script and stylesheet locations referenced by every document.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub stylesheet: String,
    pub plotly_js: String,
    pub htmx_js: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 8050)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("dashboard.title", "Dash")?
            .set_default("dashboard.debug", true)?
            .set_default(
                "assets.stylesheet",
                "https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css",
            )?
            .set_default("assets.plotly_js", "https://cdn.plot.ly/plotly-2.35.2.min.js")?
            .set_default("assets.htmx_js", "https://unpkg.com/htmx.org@2.0.8")?;

        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path)),
            None if Path::new("config.yaml").exists() => {
                builder = builder.add_source(File::with_name("config.yaml"));
            }
            None => {}
        }

        // E.g. DASH_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("DASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dataset) = cli.dataset {
            builder = builder.set_override("dashboard.dataset_path", dataset)?;
        }
        if let Some(debug) = cli.debug {
            builder = builder.set_override("dashboard.debug", debug)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Default log directive for the configured mode.
    pub fn log_directive(&self) -> &'static str {
        if self.dashboard.debug { "debug" } else { "info" }
    }

    /// `RUST_LOG` when it is set, otherwise [`Self::log_directive`].
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_directive()))
    }
}
