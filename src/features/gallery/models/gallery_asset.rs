use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for a studio gallery asset
#[derive(Debug, Clone, FromRow)]
pub struct GalleryAsset {
    pub id: Uuid,
    pub title: String,
    pub gallery: String,
    pub status: String,
    pub image: String,
    pub hint: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum AssetStatus {
    Published,
    #[default]
    Draft,
    Archived,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Published => "Published",
            AssetStatus::Draft => "Draft",
            AssetStatus::Archived => "Archived",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Published" => AssetStatus::Published,
            "Archived" => AssetStatus::Archived,
            _ => AssetStatus::Draft,
        }
    }
}
