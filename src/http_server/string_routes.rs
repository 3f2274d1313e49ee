//! String analysis HTTP routes
//!
//! All handlers work through an injected `AppState` holding the store
//! handle and the compiled query interpreter; there is no ambient global
//! state.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::analysis;
use crate::filter::StringFilters;
use crate::nlq::QueryInterpreter;
use crate::observability::Logger;
use crate::store::{StringRecord, StringStore};

use super::errors::{ApiError, ApiResult};
use super::response::{DeleteResponse, ListResponse, NaturalLanguageResponse, StringResponse};

/// State shared by every string handler.
pub struct AppState {
    pub store: Arc<dyn StringStore>,
    pub interpreter: QueryInterpreter,
}

impl AppState {
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self {
            store,
            interpreter: QueryInterpreter::new(),
        }
    }
}

/// Build the string endpoint router.
pub fn string_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/strings", get(list_strings).post(create_string))
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_filter),
        )
        .route("/strings/:value", get(get_string).delete(delete_string))
        .with_state(state)
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    /// String to analyze
    pub value: String,
}

/// Direct filter query parameters, validated into `StringFilters`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub word_count: Option<i64>,
    pub contains_character: Option<String>,
}

impl ListParams {
    fn into_filters(self) -> ApiResult<StringFilters> {
        for (name, value) in [
            ("min_length", self.min_length),
            ("max_length", self.max_length),
            ("word_count", self.word_count),
        ] {
            if matches!(value, Some(n) if n < 0) {
                return Err(ApiError::InvalidParam(format!("{} must be >= 0", name)));
            }
        }

        let contains_character = match self.contains_character {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(ApiError::InvalidParam(
                            "contains_character must be a single character".to_string(),
                        ))
                    }
                }
            }
        };

        let filters = StringFilters {
            is_palindrome: self.is_palindrome,
            min_length: self.min_length,
            max_length: self.max_length,
            word_count: self.word_count,
            contains_character,
        };

        if let Some((min, max)) = filters.bounds_conflict() {
            return Err(ApiError::InvalidParam(format!(
                "min_length {} cannot be greater than max_length {}",
                min, max
            )));
        }

        Ok(filters)
    }
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: String,
}

// ==================
// Handlers
// ==================

/// Analyze and store a string. Duplicate content is a 409.
async fn create_string(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateStringRequest>,
) -> ApiResult<(StatusCode, Json<StringResponse>)> {
    let record = StringRecord::from_value(&body.value);
    let stored = state.store.insert(record)?;

    Logger::info("string_created", &[("id", &stored.id)]);
    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// Look up a string by its content; the path value is hashed to the id.
async fn get_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringResponse>> {
    let id = analysis::content_hash(&value);
    let record = state.store.get(&id)?;
    Ok(Json(record.into()))
}

/// List stored strings matching the direct filter parameters.
async fn list_strings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ListResponse>> {
    let filters = params.into_filters()?;
    let records = state.store.list(&filters)?;
    Ok(Json(ListResponse::new(records, filters)))
}

/// Interpret a free-text query, then list matching strings.
async fn natural_language_filter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    if params.query.trim().is_empty() {
        return Err(ApiError::InvalidParam("query must not be empty".to_string()));
    }

    let interpreted = state.interpreter.interpret(&params.query)?;
    let records = state.store.list(&interpreted.filters)?;
    Ok(Json(NaturalLanguageResponse::new(records, interpreted)))
}

/// Delete a stored string by content match.
async fn delete_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = analysis::content_hash(&value);
    state.store.delete(&id)?;

    Logger::info("string_deleted", &[("id", &id)]);
    Ok(Json(DeleteResponse::success()))
}
