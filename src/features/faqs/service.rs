use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::faqs::dtos::{FaqResponseDto, UpsertFaqDto};
use crate::features::faqs::models::Faq;

/// Service for standalone FAQ entries
pub struct FaqService {
    pool: PgPool,
}

impl FaqService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<FaqResponseDto>> {
        let faqs = sqlx::query_as::<_, Faq>("SELECT * FROM faqs ORDER BY sort_order, created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list faqs: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(faqs.into_iter().map(|f| f.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<FaqResponseDto> {
        let faq = sqlx::query_as::<_, Faq>("SELECT * FROM faqs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        faq.map(|f| f.into())
            .ok_or_else(|| AppError::NotFound(format!("FAQ '{}' not found", id)))
    }

    pub async fn create(&self, dto: UpsertFaqDto) -> Result<FaqResponseDto> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
            .fetch_one(&self.pool)
            .await?;

        let faq = sqlx::query_as::<_, Faq>(
            r#"
            INSERT INTO faqs (question, answer, sort_order)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&dto.question)
        .bind(&dto.answer)
        .bind(count as i32)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("FAQ created: id={}", faq.id);
        Ok(faq.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpsertFaqDto) -> Result<FaqResponseDto> {
        let faq = sqlx::query_as::<_, Faq>(
            r#"
            UPDATE faqs SET question = $2, answer = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.question)
        .bind(&dto.answer)
        .fetch_optional(&self.pool)
        .await?;

        faq.map(|f| f.into())
            .ok_or_else(|| AppError::NotFound(format!("FAQ '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("FAQ '{}' not found", id)));
        }

        tracing::info!("FAQ deleted: id={}", id);
        Ok(())
    }

    pub async fn bulk_insert(&self, items: Vec<UpsertFaqDto>) -> Result<Vec<FaqResponseDto>> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
            .fetch_one(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(items.len());
        for (offset, dto) in items.into_iter().enumerate() {
            let faq = sqlx::query_as::<_, Faq>(
                r#"
                INSERT INTO faqs (question, answer, sort_order)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .bind(&dto.question)
            .bind(&dto.answer)
            .bind(count as i32 + offset as i32)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(faq.into());
        }

        tx.commit().await?;

        tracing::info!("FAQ bulk insert: {} entries", inserted.len());
        Ok(inserted)
    }
}
