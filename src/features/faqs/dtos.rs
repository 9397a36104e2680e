use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::faqs::models::Faq;

/// Request DTO for creating or updating a FAQ
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertFaqDto {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    #[validate(length(min = 1, max = 5000, message = "Answer must be 1-5000 characters"))]
    pub answer: String,
}

/// Request DTO for bulk insert
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkInsertFaqsDto {
    #[validate(length(min = 1, message = "items must not be empty"), nested)]
    pub items: Vec<UpsertFaqDto>,
}

/// Response DTO for a FAQ
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqResponseDto {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Faq> for FaqResponseDto {
    fn from(f: Faq) -> Self {
        Self {
            id: f.id,
            question: f.question,
            answer: f.answer,
            order: f.sort_order,
            created_at: f.created_at,
        }
    }
}
