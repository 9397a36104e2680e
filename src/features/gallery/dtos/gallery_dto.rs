use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::gallery::models::{AssetStatus, GalleryAsset};

/// Response DTO for a gallery asset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryAssetResponseDto {
    pub id: Uuid,
    pub title: String,
    pub gallery: String,
    pub status: AssetStatus,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<GalleryAsset> for GalleryAssetResponseDto {
    fn from(a: GalleryAsset) -> Self {
        Self {
            id: a.id,
            title: a.title,
            gallery: a.gallery,
            status: AssetStatus::from_str(&a.status),
            image: a.image,
            hint: a.hint,
            order: a.sort_order,
            created_at: a.created_at,
        }
    }
}

/// Text fields of the multipart create/update form
#[derive(Debug, Clone, Default)]
pub struct GalleryForm {
    pub title: Option<String>,
    pub gallery: Option<String>,
    pub status: AssetStatus,
    pub hint: Option<String>,
}

/// One member of a bulk insert. Images are URL references here; bulk
/// inserts carry no files.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryAssetSeed {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Gallery bucket is required"))]
    pub gallery: String,

    #[serde(default)]
    pub status: AssetStatus,

    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image: String,

    pub hint: Option<String>,
}

/// Request DTO for bulk insert
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkInsertGalleryDto {
    #[validate(length(min = 1, message = "items must not be empty"), nested)]
    pub items: Vec<GalleryAssetSeed>,
}

/// Query params for listing gallery assets
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListGalleryQuery {
    /// Filter by gallery bucket (e.g. "Studio")
    pub gallery: Option<String>,
    /// Filter by status ("Published", "Draft", "Archived")
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(title: &str) -> GalleryAssetSeed {
        GalleryAssetSeed {
            title: title.to_string(),
            gallery: "Studio".to_string(),
            status: AssetStatus::Published,
            image: "/uploads/a.webp".to_string(),
            hint: None,
        }
    }

    #[test]
    fn empty_bulk_batch_is_rejected() {
        let dto = BulkInsertGalleryDto { items: vec![] };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn bulk_validation_reaches_into_members() {
        let dto = BulkInsertGalleryDto {
            items: vec![seed("Bridal set"), seed("")],
        };
        assert!(dto.validate().is_err());

        let dto = BulkInsertGalleryDto {
            items: vec![seed("Bridal set")],
        };
        assert!(dto.validate().is_ok());
    }
}
