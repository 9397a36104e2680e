use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a catalog art piece
#[derive(Debug, Clone, FromRow)]
pub struct ArtPiece {
    pub id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub images: Json<Vec<String>>,
    pub tags: Json<Vec<String>>,
    pub hint: Option<String>,
    pub available: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
