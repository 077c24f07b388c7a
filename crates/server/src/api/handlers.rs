use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use data_loader::{OptionValues, Year};
use pipeline::FilterCriteria;

use super::AppState;
use crate::error::{RecommendError, RecommendResult};

// Request/Response types

/// Body of `POST /api/recommend`. Fields are checked after decoding so that
/// missing and malformed values both surface as validation errors.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub director: Option<String>,
}

impl RecommendRequest {
    pub fn into_criteria(self) -> RecommendResult<FilterCriteria> {
        Ok(FilterCriteria {
            genre: self.genres,
            year: parse_year(self.year)?,
            director: self.director,
        })
    }
}

/// Year as a whole JSON number or a string holding an integer; blank means missing
fn parse_year(value: Option<Value>) -> RecommendResult<Option<Year>> {
    let invalid = || RecommendError::Validation("Invalid request: year must be an integer".to_string());

    let year = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(year), _) => year,
            // Whole-valued floats such as 2000.0
            (None, Some(year)) if year.fract() == 0.0 && year.abs() <= i32::MAX as f64 => {
                year as i64
            }
            _ => return Err(invalid()),
        },
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };

    Year::try_from(year).map(Some).map_err(|_| invalid())
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}

// Handlers

pub async fn health_check() -> &'static str {
    "ok"
}

/// `GET /api/options/:category` → `{category: [values...]}`
pub async fn get_options(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> RecommendResult<Json<BTreeMap<String, OptionValues>>> {
    let values = state.orchestrator.options(&category)?;
    debug!("Listing {} options for '{}'", values.len(), category);

    Ok(Json(BTreeMap::from([(category, values)])))
}

/// `POST /api/recommend` → `{recommendations: [title, ...]}`
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RecommendResult<Json<RecommendResponse>> {
    let Json(payload) = payload.map_err(|rejection| {
        RecommendError::Validation(format!("Invalid request: {}", rejection.body_text()))
    })?;
    let request: RecommendRequest = serde_json::from_value(payload)
        .map_err(|e| RecommendError::Validation(format!("Invalid request: {}", e)))?;
    let criteria = request.into_criteria()?;

    // Filtering and similarity scoring are CPU-bound
    let orchestrator = state.orchestrator.clone();
    let recommendations = tokio::task::spawn_blocking(move || orchestrator.recommend(&criteria))
        .await
        .map_err(|e| RecommendError::Internal(e.to_string()))??;

    Ok(Json(RecommendResponse { recommendations }))
}
