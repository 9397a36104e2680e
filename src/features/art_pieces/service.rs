use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::art_pieces::dtos::{ArtPieceResponseDto, UpsertArtPieceDto};
use crate::features::art_pieces::models::ArtPiece;

/// Service for the art piece catalog
pub struct ArtPieceService {
    pool: PgPool,
}

impl ArtPieceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ArtPieceResponseDto>> {
        let pieces = sqlx::query_as::<_, ArtPiece>(
            "SELECT * FROM art_pieces ORDER BY sort_order, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list art pieces: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(pieces.into_iter().map(|p| p.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<ArtPieceResponseDto> {
        let piece = sqlx::query_as::<_, ArtPiece>("SELECT * FROM art_pieces WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        piece
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Art piece '{}' not found", id)))
    }

    pub async fn create(&self, dto: UpsertArtPieceDto) -> Result<ArtPieceResponseDto> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM art_pieces")
            .fetch_one(&self.pool)
            .await?;

        let piece = sqlx::query_as::<_, ArtPiece>(
            r#"
            INSERT INTO art_pieces (title, price, images, tags, hint, available, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&dto.title)
        .bind(dto.price)
        .bind(Json(&dto.images))
        .bind(Json(&dto.tags))
        .bind(&dto.hint)
        .bind(dto.available)
        .bind(count as i32)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create art piece: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Art piece created: id={}, title={}", piece.id, piece.title);
        Ok(piece.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpsertArtPieceDto) -> Result<ArtPieceResponseDto> {
        let piece = sqlx::query_as::<_, ArtPiece>(
            r#"
            UPDATE art_pieces SET
                title = $2, price = $3, images = $4, tags = $5,
                hint = $6, available = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.title)
        .bind(dto.price)
        .bind(Json(&dto.images))
        .bind(Json(&dto.tags))
        .bind(&dto.hint)
        .bind(dto.available)
        .fetch_optional(&self.pool)
        .await?;

        piece
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Art piece '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM art_pieces WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Art piece '{}' not found", id)));
        }

        tracing::info!("Art piece deleted: id={}", id);
        Ok(())
    }

    /// Insert a batch in one transaction; order continues from the
    /// current count.
    pub async fn bulk_insert(
        &self,
        items: Vec<UpsertArtPieceDto>,
    ) -> Result<Vec<ArtPieceResponseDto>> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM art_pieces")
            .fetch_one(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(items.len());
        for (offset, dto) in items.into_iter().enumerate() {
            let piece = sqlx::query_as::<_, ArtPiece>(
                r#"
                INSERT INTO art_pieces (title, price, images, tags, hint, available, sort_order)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
                "#,
            )
            .bind(&dto.title)
            .bind(dto.price)
            .bind(Json(&dto.images))
            .bind(Json(&dto.tags))
            .bind(&dto.hint)
            .bind(dto.available)
            .bind(count as i32 + offset as i32)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(piece.into());
        }

        tx.commit().await?;

        tracing::info!("Art piece bulk insert: {} pieces", inserted.len());
        Ok(inserted)
    }

    /// Rewrite order fields to array positions in one transaction.
    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (position, id) in ids.iter().enumerate() {
            sqlx::query("UPDATE art_pieces SET sort_order = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(position as i32)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!("Art piece reorder: {} ids", ids.len());
        Ok(())
    }
}
