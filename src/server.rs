use axum::{
    Router,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::layout::{Node, PAGE_CONTENT_PATH, shell};
use crate::router::{Resolved, Route, RouteTable};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config))?;
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        debug = config.dashboard.debug,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the HTTP router over an already-constructed state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(PAGE_CONTENT_PATH, get(page_content))
        .fallback(full_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendered Pages
// ─────────────────────────────────────────────────────────────────────────────

/// HTML of one resolved tree, both as a fragment and as a full document.
#[derive(Debug)]
pub struct RenderedPage {
    pub fragment: String,
    pub document: String,
}

impl RenderedPage {
    fn render(tree: &Node, config: &AppConfig) -> Self {
        let body = shell::app_shell(&Route::nav_links(), tree.clone());
        Self {
            fragment: tree.to_html(),
            document: shell::document(&config.dashboard.title, &config.assets, &body),
        }
    }
}

/// Every page and the placeholder, rendered once at startup.
#[derive(Debug)]
pub struct RenderedPages {
    pages: HashMap<Route, RenderedPage>,
    not_found: RenderedPage,
}

impl RenderedPages {
    pub fn render(routes: &RouteTable, config: &AppConfig) -> Self {
        let pages = Route::ALL
            .into_iter()
            .map(|route| (route, RenderedPage::render(routes.page(route), config)))
            .collect();
        Self {
            pages,
            not_found: RenderedPage::render(routes.not_found(), config),
        }
    }

    pub fn get(&self, resolved: Resolved<'_>) -> &RenderedPage {
        resolved
            .route()
            .and_then(|route| self.pages.get(&route))
            .unwrap_or(&self.not_found)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the page-content endpoint.
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// Path the browser navigated to.
    #[serde(default)]
    pathname: String,
}

/// GET /_dash/page-content - Resolved page as an HTML fragment.
///
/// Unknown paths still answer 200 so the placeholder is swapped in.
async fn page_content(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let resolved = state.routes.resolve(&query.pathname);
    debug!(
        name: "page.resolved",
        pathname = %query.pathname,
        route = ?resolved.route(),
        "Page content resolved"
    );
    Html(state.rendered.get(resolved).fragment.clone())
}

/// Any other GET - Full document with the resolved page in place.
async fn full_page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let resolved = state.routes.resolve(uri.path());
    debug!(
        name: "page.resolved",
        pathname = %uri.path(),
        route = ?resolved.route(),
        "Full page resolved"
    );

    let html = state.rendered.get(resolved).document.clone();
    let status = if resolved.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Html(html)).into_response()
}
