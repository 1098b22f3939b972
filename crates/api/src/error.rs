use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, StoreError};
use serde::Serialize;
use shared::time::DateParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg.clone(),
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => ApiError::Conflict(msg),
            StoreError::Database(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some("23505") =>
            {
                ApiError::Conflict("Resource already exists".into())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::Store(store) => store.into(),
        }
    }
}

impl From<DateParseError> for ApiError {
    fn from(err: DateParseError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_string(),
                    message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                })
            })
            .collect();

        let message = if details.len() == 1 {
            details[0].message.clone()
        } else {
            format!("{} validation errors", details.len())
        };

        ApiError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApiError::ServiceUnavailable("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_domain_errors_map_to_http_kinds() {
        assert!(matches!(
            ApiError::from(DomainError::validation("device_serial required")),
            ApiError::Validation(msg) if msg == "device_serial required"
        ));
        assert!(matches!(
            ApiError::from(DomainError::not_found("device not registered")),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::Store(StoreError::Unavailable("down".into()))),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_store_conflict_maps_to_conflict() {
        let error: ApiError = StoreError::Conflict("serial taken".into()).into();
        assert!(matches!(error, ApiError::Conflict(msg) if msg == "serial taken"));

        let error: ApiError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_date_parse_error_is_validation() {
        let error: ApiError = DateParseError::InvalidTimestamp.into();
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[derive(Validate)]
    struct Coordinates {
        #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
        lat: f64,
        #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
        long: f64,
    }

    #[test]
    fn test_validation_errors_message() {
        let single = Coordinates { lat: 95.0, long: 0.0 }.validate().unwrap_err();
        assert!(matches!(
            ApiError::from(single),
            ApiError::Validation(msg) if msg == "Latitude must be between -90 and 90"
        ));

        let double = Coordinates {
            lat: 95.0,
            long: 200.0,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            ApiError::from(double),
            ApiError::Validation(msg) if msg == "2 validation errors"
        ));
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::NotFound("test".into()).to_string(),
            "Not found: test"
        );
        assert_eq!(
            ApiError::Validation("test".into()).to_string(),
            "Validation error: test"
        );
    }
}
