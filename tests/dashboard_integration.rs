use axum::http::StatusCode;
use axum_test::TestServer;
use gapminder_dash::AppState;
use gapminder_dash::chart::ChartKind;
use gapminder_dash::config::AppConfig;
use gapminder_dash::dataset::{Dataset, Field};
use gapminder_dash::pages::app1;
use gapminder_dash::router::{Route, RouteTable};
use gapminder_dash::server::build_router;
use std::sync::Arc;

fn test_server() -> TestServer {
    let config = AppConfig::load_from_args(["gapminder-dash"]).expect("default config");
    let state = AppState::new(Arc::new(config)).expect("state");
    TestServer::new(build_router(state)).expect("test server")
}

#[tokio::test]
async fn test_full_page_for_each_route() {
    let server = test_server();
    for route in Route::ALL {
        let response = server.get(route.path()).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let html = response.text();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"page-content\""));
        assert!(html.contains(&format!("id=\"{}-graph-0\"", &route.path()[1..])));
    }
}

#[tokio::test]
async fn test_full_page_lists_every_dashboard_link() {
    let html = test_server().get("/app1").await.text();
    for route in Route::ALL {
        assert!(html.contains(&format!("href=\"{}\"", route.path())));
        assert!(html.contains(route.label()));
    }
    assert!(html.contains("Evolution of world GDP"));
    assert!(html.contains("GDP Per Capita"));
}

#[tokio::test]
async fn test_unknown_path_renders_placeholder_with_404() {
    let server = test_server();
    for path in ["/", "/app4", "/app1/extra"] {
        let response = server.get(path).expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let html = response.text();
        assert!(html.contains("<div id=\"page-content\">404</div>"));
        assert!(!html.contains("dash-graph"));
    }
}

#[tokio::test]
async fn test_page_content_fragment() {
    let server = test_server();
    let response = server
        .get("/_dash/page-content")
        .add_query_param("pathname", "/app2")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.starts_with("<div><div id=\"app2-graph-0\""));
    assert!(html.contains("Population by continent"));
    assert!(!html.contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_fragment_matches_precomputed_tree() {
    let server = test_server();
    let table = RouteTable::build(&Dataset::bundled().unwrap()).unwrap();
    let fragment = server
        .get("/_dash/page-content")
        .add_query_param("pathname", "/app3")
        .await
        .text();
    assert_eq!(fragment, table.page(Route::App3).to_html());
}

#[test]
fn test_scatter_for_2007_end_to_end() {
    let data = Dataset::bundled().unwrap();
    let chart = app1::gdp_per_capita_scatter(&data).unwrap();

    assert_eq!(chart.kind(), ChartKind::Scatter);
    assert_eq!(chart.x().field(), Some(Field::GdpPercap));
    assert_eq!(chart.y().field(), Some(Field::LifeExp));
    assert_eq!(chart.size().and_then(|b| b.field()), Some(Field::Pop));
    assert_eq!(chart.color().and_then(|b| b.field()), Some(Field::Continent));
    assert!(chart.log_x());
    assert_eq!(chart.data(), &data.filter_year(2007));

    let figure = chart.to_figure();
    assert_eq!(figure.layout.xaxis.scale, Some("log"));
    assert_eq!(figure.layout.title.text, "GDP Per Capita");
}
