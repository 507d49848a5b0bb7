// File: src/response.rs
// Purpose: axum responses for validation reports and engine errors

use crate::engine::Outcome;
use crate::error::EngineError;
use crate::report::Report;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `400 Bad Request` with the report as the JSON body.
impl IntoResponse for Report {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// An unregistered record type is a server bug, not a client mistake.
impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        tracing::error!("Validation engine error: {}", self);

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// `204 No Content` when valid, the report otherwise.
impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Valid => StatusCode::NO_CONTENT.into_response(),
            Outcome::Invalid(report) => report.into_response(),
        }
    }
}
