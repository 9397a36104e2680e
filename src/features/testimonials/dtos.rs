use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::testimonials::models::Testimonial;

/// Request DTO for creating or updating a testimonial
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTestimonialDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub comment: String,

    /// Portrait image URL
    pub image: Option<String>,

    pub hint: Option<String>,
}

/// Request DTO for bulk insert
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkInsertTestimonialsDto {
    #[validate(length(min = 1, message = "items must not be empty"), nested)]
    pub items: Vec<UpsertTestimonialDto>,
}

/// Response DTO for a testimonial
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponseDto {
    pub id: Uuid,
    pub name: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialResponseDto {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name,
            comment: t.comment,
            image: t.image,
            hint: t.hint,
            order: t.sort_order,
            created_at: t.created_at,
        }
    }
}
