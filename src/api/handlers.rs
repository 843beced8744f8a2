//! Request handlers. Every recommendation endpoint answers with a JSON
//! array of title strings. A missing `title`, `country` or `language`
//! parameter is a 400; a missing or unparseable numeric parameter answers
//! with an empty list instead.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use tracing::error;

use crate::catalog::filter;
use crate::engine::TitleResolution;
use crate::server::AppState;

use super::error::ApiError;

const DEFAULT_RATING_TOLERANCE: f64 = 0.5;
const DEFAULT_BUDGET_TOLERANCE: f64 = 1_000_000.0;

pub async fn health() -> &'static str {
    "OK"
}

/// GET /recommend/title?title=...
///
/// Similar titles for a known title, fuzzy suggestions for an unknown one.
/// Both shapes are a plain array of strings.
pub async fn recommend_by_title(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let title = params.get("title").ok_or(ApiError::MissingParam("title"))?;

    let resolution = state.recommender.resolve_title(title).map_err(|e| {
        error!("Title resolution failed: {}", e);
        ApiError::Internal
    })?;

    let titles = match resolution {
        TitleResolution::Recommendations(titles) => titles,
        TitleResolution::Suggestions(titles) => titles,
    };
    Ok(Json(titles))
}

/// GET /recommend/rating?rating=...&tolerance=...
pub async fn recommend_by_rating(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<String>> {
    let rating = match params.get("rating").and_then(|v| v.parse::<f64>().ok()) {
        Some(rating) => rating,
        None => return Json(Vec::new()),
    };
    let tolerance = match parse_tolerance(&params, DEFAULT_RATING_TOLERANCE) {
        Some(tolerance) => tolerance,
        None => return Json(Vec::new()),
    };
    Json(filter::by_rating(state.recommender.catalog(), rating, tolerance))
}

/// GET /recommend/budget?budget=...&tolerance=...
pub async fn recommend_by_budget(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<String>> {
    let budget = match params.get("budget").and_then(|v| v.parse::<f64>().ok()) {
        Some(budget) => budget,
        None => return Json(Vec::new()),
    };
    let tolerance = match parse_tolerance(&params, DEFAULT_BUDGET_TOLERANCE) {
        Some(tolerance) => tolerance,
        None => return Json(Vec::new()),
    };
    Json(filter::by_budget(state.recommender.catalog(), budget, tolerance))
}

/// GET /recommend/country?country=...
pub async fn recommend_by_country(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let country = params
        .get("country")
        .ok_or(ApiError::MissingParam("country"))?;
    Ok(Json(filter::by_country(state.recommender.catalog(), country)))
}

/// GET /recommend/language?language=...
pub async fn recommend_by_language(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let language = params
        .get("language")
        .ok_or(ApiError::MissingParam("language"))?;
    Ok(Json(filter::by_language(state.recommender.catalog(), language)))
}

/// `None` when a tolerance was sent but does not parse; the caller answers
/// with an empty list in that case.
fn parse_tolerance(params: &HashMap<String, String>, default: f64) -> Option<f64> {
    match params.get("tolerance") {
        Some(raw) => raw.parse().ok(),
        None => Some(default),
    }
}
