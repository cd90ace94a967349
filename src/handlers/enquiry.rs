// src/handlers/enquiry.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::Value;

use crate::{error::AppError, models::enquiry::EnquiryCreated, state::AppState};

/// Stores a contact-form enquiry. Any non-empty JSON object is accepted.
#[utoipa::path(
    post,
    path = "/api/enquiries",
    request_body(description = "Arbitrary key/value JSON object", content_type = "application/json"),
    responses(
        (status = 201, description = "Stored", body = EnquiryCreated),
        (status = 400, description = "Payload is not a non-empty object"),
        (status = 503, description = "Storage unreachable")
    ),
    tag = "enquiry"
)]
pub async fn create_enquiry(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let fields = match payload {
        Value::Object(fields) if !fields.is_empty() => fields,
        _ => {
            return Err(AppError::BadRequest(
                "Enquiry must be a non-empty JSON object".to_string(),
            ));
        }
    };

    let enquiry = state.enquiries.save_enquiry(fields).await.map_err(|e| {
        tracing::error!("Error adding enquiry: {}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(EnquiryCreated { id: enquiry.id })))
}
