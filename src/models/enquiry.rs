// src/models/enquiry.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// A contact-form style record. The payload is stored as submitted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Enquiry {
    pub id: Uuid,
    #[schema(value_type = Object)]
    pub payload: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnquiryCreated {
    pub id: Uuid,
}
