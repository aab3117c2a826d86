//! Error to HTTP response translation

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use serde_json::json;

use crate::error::{Error, ErrorKind};

/// HTTP status for each error kind
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::MissingField | ErrorKind::UnknownCategory | ErrorKind::Unexpected => {
            StatusCode::BAD_REQUEST
        }
    }
}

/// Pipeline error rendered as `{"error": "<message>"}`
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind());
        let message = self.0.to_string();
        if status.is_server_error() {
            error!("Prediction failed: {message}");
        } else {
            warn!("Rejected prediction request: {message}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
