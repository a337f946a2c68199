use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::WikiError;

/// Boundary wrapper that turns core failures into HTTP responses.
/// Validation categories come back to the client as JSON with the exact
/// reason; storage and rendering failures stay generic on the wire, with
/// the detail logged here and nowhere else.
pub enum AppError {
    Wiki(WikiError),
    BadRequest(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Wiki(err) => match &err {
                WikiError::InvalidName { .. }
                | WikiError::InvalidLink(_)
                | WikiError::InvalidAction(_) => {
                    json_error(StatusCode::BAD_REQUEST, "Bad Request", &err.to_string())
                }
                WikiError::NotFound(_) => {
                    json_error(StatusCode::NOT_FOUND, "Not Found", &err.to_string())
                }
                WikiError::Storage { .. } => {
                    tracing::error!("Storage error: {:?}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
                }
            },
            Self::BadRequest(message) => {
                json_error(StatusCode::BAD_REQUEST, "Bad Request", &message)
            }
            Self::Internal(err) => {
                tracing::error!("Application error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<WikiError> for AppError {
    fn from(err: WikiError) -> Self {
        Self::Wiki(err)
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

fn json_error(status: StatusCode, error: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}

pub type AppResult<T> = Result<T, AppError>;
