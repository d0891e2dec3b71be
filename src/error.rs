// src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::types::ErrorRes;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorRes {
                    error: "Unauthorized",
                    detail: None,
                }),
            )
                .into_response(),
            Self::BadRequest(detail) => {
                debug!(%detail, "rejected malformed payload");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorRes {
                        error: "Bad Request",
                        detail: Some(detail),
                    }),
                )
                    .into_response()
            }
        }
    }
}
