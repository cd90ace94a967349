// src/models/user.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::html::strip_html;

/// Identity details collected at signup.
///
/// Immutable once the test session is opened; carried into the stored result.
///
/// Missing fields deserialize as empty strings so that validation can
/// report every one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 30, message = "Phone number is required"))]
    pub phone: String,

    #[validate(length(min = 1, max = 100, message = "Father's name is required"))]
    pub fathers_name: String,

    #[validate(length(min = 1, max = 50, message = "Batch time is required"))]
    pub batch_time: String,
}

impl UserInfo {
    /// Strips markup from every field. Validate the returned value, not the input.
    pub fn sanitized(self) -> Self {
        Self {
            name: strip_html(&self.name),
            email: strip_html(&self.email),
            phone: strip_html(&self.phone),
            fathers_name: strip_html(&self.fathers_name),
            batch_time: strip_html(&self.batch_time),
        }
    }

    /// JSON key a client uses for a field, as renamed by serde.
    pub fn wire_name(field: &str) -> &str {
        match field {
            "fathers_name" => "fathersName",
            "batch_time" => "batchTime",
            other => other,
        }
    }
}

/// DTO for admin login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Returned by a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub expires_in: u64,
}
