// src/error.rs

use std::{collections::BTreeMap, fmt};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

use crate::{models::user::UserInfo, store::StoreError};

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 400 Bad Request, one message per offending field
    Validation(ValidationErrors),

    // 401 Unauthorized
    AuthError(String),

    // 404 Not Found
    NotFound(String),

    // 404 Not Found, with a path the client can follow to start over
    MissingContext { message: String, redirect: String },

    // 409 Conflict (e.g., test already submitted)
    Conflict(String),

    // 503 Service Unavailable (storage could not be reached)
    ServiceUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "fields": field_messages(&errors),
                }),
            ),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::MissingContext { message, redirect } => (
                StatusCode::NOT_FOUND,
                json!({ "error": message, "redirect": redirect }),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Storage is unavailable. Please try again later." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// First message per field, keyed by the camelCase wire name.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            (UserInfo::wire_name(&field).to_string(), message)
        })
        .collect()
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::NotFound(format!("{} not found", what)),
            StoreError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn validation_fields_use_wire_names() {
        let errors = UserInfo::default().validate().unwrap_err();
        let fields = field_messages(&errors);
        assert_eq!(fields["fathersName"], "Father's name is required");
        assert_eq!(fields["batchTime"], "Batch time is required");
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("batch_time"));
    }

    #[test]
    fn store_errors_map_to_http_semantics() {
        let not_found = AppError::from(StoreError::NotFound("Result x".to_string()));
        assert!(matches!(not_found, AppError::NotFound(_)));

        let down = AppError::from(StoreError::Unavailable("timeout".to_string()));
        assert_eq!(down.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
