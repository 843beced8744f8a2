use axum::{extract::Request, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::engine::Recommender;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(config: Config, recommender: Arc<Recommender>) -> Self {
        Self {
            config: Arc::new(config),
            recommender,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let recommend_routes = Router::new()
        .route("/recommend/title", get(crate::api::recommend_by_title))
        .route("/recommend/rating", get(crate::api::recommend_by_rating))
        .route("/recommend/budget", get(crate::api::recommend_by_budget))
        .route("/recommend/country", get(crate::api::recommend_by_country))
        .route("/recommend/language", get(crate::api::recommend_by_language));

    let mut router = Router::new()
        .route("/health", get(crate::api::health))
        .route("/robots.txt", get(robots_txt_handler))
        .merge(recommend_routes)
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        // Note: ServeDir will override our fallback for file paths, but OPTIONS will still work
        // because they'll hit our fallback before ServeDir tries to serve
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // Handle OPTIONS requests for CORS preflight
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    // All other unmatched requests get 404
    StatusCode::NOT_FOUND.into_response()
}
