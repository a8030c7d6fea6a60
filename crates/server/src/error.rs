use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tax_forms::FormError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Form(#[from] FormError),

    /// Body rejected before it reached the form, e.g. broken JSON
    #[error("{1}")]
    Rejected(StatusCode, String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                Self::Form(FormError::InvalidRecord(err.body_text()))
            }
            other => Self::Rejected(other.status(), other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Form(FormError::TemplateNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Form(FormError::InvalidRecord(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected(status, _) => *status,
            Self::Form(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::from(FormError::TemplateNotFound("f1040sc.pdf".to_string()));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let failed = ApiError::from(FormError::RenderFailed("no backend".to_string()));
        assert_eq!(
            failed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let invalid = ApiError::from(FormError::InvalidRecord("name".to_string()));
        assert_eq!(
            invalid.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let rejected = ApiError::Rejected(StatusCode::BAD_REQUEST, "bad JSON".to_string());
        assert_eq!(rejected.into_response().status(), StatusCode::BAD_REQUEST);

        let internal = ApiError::Internal("join error".to_string());
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_detail_message() {
        let err = ApiError::from(FormError::RenderFailed("no backend".to_string()));
        assert_eq!(err.to_string(), "Failed to generate PDF: no backend");
    }
}
