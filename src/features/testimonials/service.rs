use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::testimonials::dtos::{TestimonialResponseDto, UpsertTestimonialDto};
use crate::features::testimonials::models::Testimonial;

/// Service for client testimonials
pub struct TestimonialService {
    pool: PgPool,
}

impl TestimonialService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TestimonialResponseDto>> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials ORDER BY sort_order, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list testimonials: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(testimonials.into_iter().map(|t| t.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<TestimonialResponseDto> {
        let testimonial =
            sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        testimonial
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Testimonial '{}' not found", id)))
    }

    pub async fn create(&self, dto: UpsertTestimonialDto) -> Result<TestimonialResponseDto> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(&self.pool)
            .await?;

        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (name, comment, image, hint, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.comment)
        .bind(&dto.image)
        .bind(&dto.hint)
        .bind(count as i32)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Testimonial created: id={}", testimonial.id);
        Ok(testimonial.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpsertTestimonialDto,
    ) -> Result<TestimonialResponseDto> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials SET
                name = $2, comment = $3, image = $4, hint = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.comment)
        .bind(&dto.image)
        .bind(&dto.hint)
        .fetch_optional(&self.pool)
        .await?;

        testimonial
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Testimonial '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Testimonial '{}' not found",
                id
            )));
        }

        tracing::info!("Testimonial deleted: id={}", id);
        Ok(())
    }

    pub async fn bulk_insert(
        &self,
        items: Vec<UpsertTestimonialDto>,
    ) -> Result<Vec<TestimonialResponseDto>> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(items.len());
        for (offset, dto) in items.into_iter().enumerate() {
            let testimonial = sqlx::query_as::<_, Testimonial>(
                r#"
                INSERT INTO testimonials (name, comment, image, hint, sort_order)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(&dto.name)
            .bind(&dto.comment)
            .bind(&dto.image)
            .bind(&dto.hint)
            .bind(count as i32 + offset as i32)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(testimonial.into());
        }

        tx.commit().await?;

        tracing::info!("Testimonial bulk insert: {} entries", inserted.len());
        Ok(inserted)
    }

    pub async fn reorder(&self, ids: &[Uuid]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (position, id) in ids.iter().enumerate() {
            sqlx::query(
                "UPDATE testimonials SET sort_order = $2, updated_at = NOW() WHERE id = $1",
            )
            .bind(id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!("Testimonial reorder: {} ids", ids.len());
        Ok(())
    }
}
