//! Application error types and handling

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::contact::ContactResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Shown to the caller for anything that is not a client input error.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to process your request. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Request body error: {0}")]
    Body(#[from] BytesRejection),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields | AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::MissingFields | AppError::InvalidEmail => self.to_string(),
            AppError::Body(err) => {
                tracing::error!("Contact form error: unreadable request body: {}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::Json(err) => {
                tracing::error!("Contact form error: invalid request body: {}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::Io(err) => {
                tracing::error!("Contact form error: IO error: {:?}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::Config(err) => {
                tracing::error!("Contact form error: configuration error: {}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::Other(err) => {
                tracing::error!("Contact form error: {:?}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ContactResponse::failure(error_message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_requests() {
        let response = AppError::MissingFields.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields");
        assert!(body.get("message").is_none());

        let response = AppError::InvalidEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_internal_errors_hide_detail() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let response = AppError::from(parse_error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], GENERIC_ERROR_MESSAGE);

        let response = AppError::from(anyhow::anyhow!("provider exploded at line 42")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], GENERIC_ERROR_MESSAGE);
        assert!(!body.to_string().contains("line 42"));
    }
}
