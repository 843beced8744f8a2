use std::sync::Arc;

use axum_test::TestServer;

use cinematch::catalog::{CatalogStore, MovieRecord};
use cinematch::config::{CatalogConfig, Config, EngineConfig, ListenConfig};
use cinematch::engine::Recommender;
use cinematch::server::{build_router, AppState};

fn record(
    id: &str,
    title: &str,
    tag_text: &str,
    rating: Option<f64>,
    budget: Option<f64>,
    countries: &str,
    language: &str,
) -> MovieRecord {
    MovieRecord {
        id: id.to_string(),
        title: title.to_string(),
        tag_text: tag_text.to_string(),
        rating,
        budget,
        countries: countries.to_string(),
        language: language.to_string(),
    }
}

fn test_catalog() -> CatalogStore {
    CatalogStore::from_records(vec![
        record(
            "1",
            "Alpha",
            "space war",
            Some(7.8),
            Some(9_000_000.0),
            "United States of America",
            "en",
        ),
        record("2", "Beta", "space love", Some(7.3), Some(1_500_000.0), "France", "fr"),
        record("3", "Gamma", "war drama", None, None, "", ""),
        record(
            "4",
            "Alpha",
            "space war drama",
            Some(7.5),
            Some(9_500_000.0),
            "United Kingdom",
            "en",
        ),
    ])
}

fn create_test_server() -> TestServer {
    let config = Config {
        listen: ListenConfig::default(),
        appdir: None,
        catalog: CatalogConfig {
            path: "unused.csv".to_string(),
        },
        engine: EngineConfig::default(),
    };
    let recommender = Recommender::build(test_catalog(), config.engine.max_terms).unwrap();
    let state = AppState::new(config, Arc::new(recommender));
    let app = build_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = create_test_server();
    let response = server.get("/nope").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommend_by_title_known_title() {
    let server = create_test_server();
    let response = server
        .get("/recommend/title")
        .add_query_param("title", "alpha")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    // The closest record shares the queried title and is skipped.
    assert_eq!(titles, vec!["Beta".to_string(), "Gamma".to_string()]);
}

#[tokio::test]
async fn test_recommend_by_title_is_trimmed_and_case_insensitive() {
    let server = create_test_server();
    let response = server
        .get("/recommend/title")
        .add_query_param("title", "  ALPHA  ")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["Beta".to_string(), "Gamma".to_string()]);
}

#[tokio::test]
async fn test_recommend_by_title_unknown_title_suggests() {
    let server = create_test_server();
    let response = server
        .get("/recommend/title")
        .add_query_param("title", "alfa")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert_eq!(titles.len(), 4);
    assert_eq!(titles[0], "Alpha");
    assert!(titles.len() <= 20);
}

#[tokio::test]
async fn test_recommend_by_title_missing_param() {
    let server = create_test_server();
    let response = server.get("/recommend/title").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_recommend_by_rating_with_default_tolerance() {
    let server = create_test_server();
    let response = server
        .get("/recommend/rating")
        .add_query_param("rating", "7.5")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    // Window [7.0, 8.0] catches both Alpha records and Beta; duplicate
    // titles collapse.
    assert_eq!(titles, vec!["Alpha".to_string(), "Beta".to_string()]);
}

#[tokio::test]
async fn test_recommend_by_rating_zero_tolerance() {
    let server = create_test_server();
    let response = server
        .get("/recommend/rating")
        .add_query_param("rating", "7.4")
        .add_query_param("tolerance", "0")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_recommend_by_rating_missing_param_is_empty() {
    let server = create_test_server();
    let response = server.get("/recommend/rating").await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_recommend_by_rating_malformed_param_is_empty() {
    let server = create_test_server();
    let response = server
        .get("/recommend/rating")
        .add_query_param("rating", "high")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_recommend_by_rating_malformed_tolerance_is_empty() {
    let server = create_test_server();
    let response = server
        .get("/recommend/rating")
        .add_query_param("rating", "7.5")
        .add_query_param("tolerance", "wide")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_recommend_by_budget_with_default_tolerance() {
    let server = create_test_server();
    let response = server
        .get("/recommend/budget")
        .add_query_param("budget", "9000000")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    // Window [8M, 10M] catches both Alpha records only.
    assert_eq!(titles, vec!["Alpha".to_string()]);
}

#[tokio::test]
async fn test_recommend_by_budget_malformed_param_is_empty() {
    let server = create_test_server();
    let response = server
        .get("/recommend/budget")
        .add_query_param("budget", "big")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_recommend_by_country_substring_match() {
    let server = create_test_server();
    let response = server
        .get("/recommend/country")
        .add_query_param("country", "united")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["Alpha".to_string()]);

    let response = server
        .get("/recommend/country")
        .add_query_param("country", "FRANCE")
        .await;
    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["Beta".to_string()]);
}

#[tokio::test]
async fn test_recommend_by_country_missing_param() {
    let server = create_test_server();
    let response = server.get("/recommend/country").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("country"));
}

#[tokio::test]
async fn test_recommend_by_language_exact_match() {
    let server = create_test_server();
    let response = server
        .get("/recommend/language")
        .add_query_param("language", "EN")
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["Alpha".to_string()]);
}

#[tokio::test]
async fn test_recommend_by_language_missing_param() {
    let server = create_test_server();
    let response = server.get("/recommend/language").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("language"));
}
