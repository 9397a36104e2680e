use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::gallery::dtos::{
    GalleryAssetResponseDto, GalleryAssetSeed, GalleryForm, ListGalleryQuery,
};
use crate::features::gallery::models::GalleryAsset;
use crate::modules::storage::{ImageHost, UploadedImage};

/// Service for studio gallery assets
pub struct GalleryService {
    pool: PgPool,
    image_host: Arc<dyn ImageHost>,
}

impl GalleryService {
    pub fn new(pool: PgPool, image_host: Arc<dyn ImageHost>) -> Self {
        Self { pool, image_host }
    }

    pub async fn list(&self, query: &ListGalleryQuery) -> Result<Vec<GalleryAssetResponseDto>> {
        let assets = sqlx::query_as::<_, GalleryAsset>(
            r#"
            SELECT * FROM gallery_assets
            WHERE ($1::text IS NULL OR gallery = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY sort_order, created_at
            "#,
        )
        .bind(query.gallery.as_deref())
        .bind(query.status.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list gallery assets: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(assets.into_iter().map(|a| a.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<GalleryAssetResponseDto> {
        let asset = sqlx::query_as::<_, GalleryAsset>("SELECT * FROM gallery_assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        asset
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Gallery asset '{}' not found", id)))
    }

    /// Create an asset from the multipart form. The order field is the
    /// document count at creation time: insertion order, and deletions
    /// leave gaps.
    pub async fn create(
        &self,
        form: GalleryForm,
        image: UploadedImage,
    ) -> Result<GalleryAssetResponseDto> {
        let title = form
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::Validation("title is required".to_string()))?;
        let gallery = form
            .gallery
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| AppError::Validation("gallery is required".to_string()))?;

        let image_url = self
            .image_host
            .store(&image.filename, image.data, &image.content_type)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_assets")
            .fetch_one(&self.pool)
            .await?;

        let asset = sqlx::query_as::<_, GalleryAsset>(
            r#"
            INSERT INTO gallery_assets (title, gallery, status, image, hint, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(gallery)
        .bind(form.status.as_str())
        .bind(&image_url)
        .bind(&form.hint)
        .bind(count as i32)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create gallery asset: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Gallery asset created: id={}, gallery={}, order={}",
            asset.id,
            asset.gallery,
            asset.sort_order
        );

        Ok(asset.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        form: GalleryForm,
        image: Option<UploadedImage>,
    ) -> Result<GalleryAssetResponseDto> {
        let image_url = match image {
            Some(img) => Some(
                self.image_host
                    .store(&img.filename, img.data, &img.content_type)
                    .await?,
            ),
            None => None,
        };

        let asset = sqlx::query_as::<_, GalleryAsset>(
            r#"
            UPDATE gallery_assets SET
                title = COALESCE($2, title),
                gallery = COALESCE($3, gallery),
                status = $4,
                hint = COALESCE($5, hint),
                image = COALESCE($6, image),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(form.title.as_deref().filter(|t| !t.trim().is_empty()))
        .bind(form.gallery.as_deref().filter(|g| !g.trim().is_empty()))
        .bind(form.status.as_str())
        .bind(&form.hint)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await?;

        asset
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Gallery asset '{}' not found", id)))
    }

    /// Delete an asset. Orders are not compacted afterwards.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let asset = sqlx::query_as::<_, GalleryAsset>(
            "DELETE FROM gallery_assets WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let asset =
            asset.ok_or_else(|| AppError::NotFound(format!("Gallery asset '{}' not found", id)))?;

        if let Err(e) = self.image_host.delete_by_url(&asset.image).await {
            tracing::warn!("Failed to delete gallery image '{}': {}", asset.image, e);
        }

        tracing::info!("Gallery asset deleted: id={}", id);
        Ok(())
    }

    /// Insert a batch of assets in one transaction. The caller has
    /// already rejected empty batches.
    pub async fn bulk_insert(
        &self,
        items: Vec<GalleryAssetSeed>,
    ) -> Result<Vec<GalleryAssetResponseDto>> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_assets")
            .fetch_one(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(items.len());
        for (offset, seed) in items.into_iter().enumerate() {
            let asset = sqlx::query_as::<_, GalleryAsset>(
                r#"
                INSERT INTO gallery_assets (title, gallery, status, image, hint, sort_order)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(&seed.title)
            .bind(&seed.gallery)
            .bind(seed.status.as_str())
            .bind(&seed.image)
            .bind(&seed.hint)
            .bind(count as i32 + offset as i32)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(asset.into());
        }

        tx.commit().await?;

        tracing::info!("Gallery bulk insert: {} assets", inserted.len());
        Ok(inserted)
    }

    /// Rewrite each referenced asset's order field to its position in
    /// `ids`. One batched write; ids that match no row are skipped.
    /// Calling it again with the same array is a no-op.
    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (position, id) in ids.iter().enumerate() {
            sqlx::query(
                "UPDATE gallery_assets SET sort_order = $2, updated_at = NOW() WHERE id = $1",
            )
            .bind(id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!("Gallery reorder: {} ids", ids.len());
        Ok(())
    }
}
