//! HTTP surface
//!
//! - `GET /` liveness text
//! - `POST /predict` JSON symptom form in, prediction payload out
//! - `GET /features` the model input fields with their descriptions

pub mod response;

pub use response::{ApiError, status_for};

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use crate::error::Error;
use crate::features::{FIELDS, FieldDefinition, RawSymptomInput};
use crate::prediction::{PredictionResult, PredictionService};

/// Body of `GET /`
pub const LIVENESS_MESSAGE: &str = "Diabetes Prediction API is running!";

/// Build the application router
pub fn router(service: Arc<PredictionService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/features", get(features))
        .layer(cors)
        .with_state(service)
}

/// Liveness check
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

/// Run one prediction
pub async fn predict(
    State(service): State<Arc<PredictionService>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(body) = body.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;
    let raw = RawSymptomInput::from_json(&body)?;
    let result = service.predict(&raw).await?;
    Ok(Json(result))
}

/// Describe the model input fields
pub async fn features() -> Json<&'static [FieldDefinition]> {
    let fields: &'static [FieldDefinition] = &FIELDS;
    Json(fields)
}
