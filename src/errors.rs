use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Every failure the HTTP layer can report.
///
/// All variants render as `{"error": "<message>"}`; the status code carries
/// the class of failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid {entity} ID format")]
    InvalidId { entity: &'static str },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl ApiError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId { .. } | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!("{self}");
        }
        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

/// Parse a path segment as a store identifier.
///
/// A malformed id is a 400, kept distinct from a well-formed id that matches
/// nothing (404).
pub fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId { entity })
}
