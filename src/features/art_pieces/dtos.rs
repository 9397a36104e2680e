use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::art_pieces::models::ArtPiece;

/// Request DTO for creating or replacing an art piece
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertArtPieceDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Price in the studio's display currency
    pub price: Decimal,

    /// Image URLs, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub hint: Option<String>,

    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Request DTO for bulk insert
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkInsertArtPiecesDto {
    #[validate(length(min = 1, message = "items must not be empty"), nested)]
    pub items: Vec<UpsertArtPieceDto>,
}

/// Response DTO for an art piece
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtPieceResponseDto {
    pub id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub available: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ArtPiece> for ArtPieceResponseDto {
    fn from(p: ArtPiece) -> Self {
        Self {
            id: p.id,
            title: p.title,
            price: p.price,
            images: p.images.0,
            tags: p.tags.0,
            hint: p.hint,
            available: p.available,
            order: p.sort_order,
            created_at: p.created_at,
        }
    }
}
