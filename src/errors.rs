use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug)]
pub enum AppError {
    /// Raw storage error raised by a `LeadStore`.
    DatabaseError(sqlx::Error),
    /// A storage write (lead or event) failed.
    IngestionFailure(String),
    /// A storage read failed.
    RetrievalFailure(String),
    /// Input passed JSON decoding but broke a field rule.
    Validation(String),
    /// The JSON extractor rejected the request body.
    InvalidPayload {
        /// Status reported by the extractor (400, 415 or 422).
        status: StatusCode,
        /// Human-readable rejection text.
        detail: String,
    },
    /// Resource not found error.
    NotFound(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::IngestionFailure(msg) => write!(f, "{}", msg),
            AppError::RetrievalFailure(msg) => write!(f, "{}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::InvalidPayload { detail, .. } => write!(f, "Invalid payload: {}", detail),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Every failure is rendered as `{"detail": "..."}`. Storage failures keep
    /// the underlying cause in the detail text so the caller can see it.
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            }
            AppError::IngestionFailure(msg) => {
                tracing::error!("Ingestion failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::RetrievalFailure(msg) => {
                tracing::error!("Retrieval failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Validation(msg) => {
                tracing::debug!("Rejected input: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            AppError::InvalidPayload { status, detail } => {
                tracing::debug!("Rejected payload ({}): {}", status, detail);
                (status, detail)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    /// Converts a `sqlx::Error` into an `AppError`.
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

/// Extension trait that turns storage errors into the caller-facing
/// ingestion/retrieval failures, prefixed with a context message.
pub trait ResultExt<T> {
    /// Wrap a failed write as `IngestionFailure`.
    fn ingestion_failure(self, context: &str) -> Result<T, AppError>;

    /// Wrap a failed read as `RetrievalFailure`.
    fn retrieval_failure(self, context: &str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn ingestion_failure(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::IngestionFailure(format!("{}: {}", context, e)))
    }

    fn retrieval_failure(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::RetrievalFailure(format!("{}: {}", context, e)))
    }
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn ingestion_failure(self, context: &str) -> Result<T, AppError> {
        self.map_err(AppError::from).ingestion_failure(context)
    }

    fn retrieval_failure(self, context: &str) -> Result<T, AppError> {
        self.map_err(AppError::from).retrieval_failure(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingestion_failure_keeps_the_cause() {
        let failed: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        let err = failed.ingestion_failure("Erro ao capturar lead").unwrap_err();

        let text = err.to_string();
        assert!(text.starts_with("Erro ao capturar lead: Database error:"));
        assert!(matches!(err, AppError::IngestionFailure(_)));
    }

    #[test]
    fn retrieval_failure_maps_to_500() {
        let failed: Result<(), AppError> = Err(AppError::DatabaseError(sqlx::Error::PoolClosed));
        let response = failed
            .retrieval_failure("Erro ao buscar leads")
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_maps_to_422() {
        let response = AppError::Validation("name must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
