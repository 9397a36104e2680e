use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::workshops::models::Workshop;

/// Request DTO for creating or updating a workshop
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWorkshopDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    #[serde(default)]
    pub description: String,

    pub workshop_date: NaiveDate,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,

    pub price: Decimal,
}

/// Response DTO for a workshop
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub workshop_date: NaiveDate,
    pub capacity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Workshop> for WorkshopResponseDto {
    fn from(w: Workshop) -> Self {
        Self {
            id: w.id,
            title: w.title,
            description: w.description,
            workshop_date: w.workshop_date,
            capacity: w.capacity,
            price: w.price,
            created_at: w.created_at,
        }
    }
}
