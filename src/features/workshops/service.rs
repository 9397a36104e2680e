use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::workshops::dtos::{UpsertWorkshopDto, WorkshopResponseDto};
use crate::features::workshops::models::Workshop;

/// Service for studio workshops
pub struct WorkshopService {
    pool: PgPool,
}

impl WorkshopService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<WorkshopResponseDto>> {
        let workshops = sqlx::query_as::<_, Workshop>(
            "SELECT * FROM workshops ORDER BY workshop_date, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list workshops: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(workshops.into_iter().map(|w| w.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<WorkshopResponseDto> {
        let workshop = sqlx::query_as::<_, Workshop>("SELECT * FROM workshops WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        workshop
            .map(|w| w.into())
            .ok_or_else(|| AppError::NotFound(format!("Workshop '{}' not found", id)))
    }

    pub async fn create(&self, dto: UpsertWorkshopDto) -> Result<WorkshopResponseDto> {
        let workshop = sqlx::query_as::<_, Workshop>(
            r#"
            INSERT INTO workshops (title, description, workshop_date, capacity, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.workshop_date)
        .bind(dto.capacity)
        .bind(dto.price)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Workshop created: id={}, title={}", workshop.id, workshop.title);
        Ok(workshop.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpsertWorkshopDto) -> Result<WorkshopResponseDto> {
        let workshop = sqlx::query_as::<_, Workshop>(
            r#"
            UPDATE workshops SET
                title = $2, description = $3, workshop_date = $4,
                capacity = $5, price = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.workshop_date)
        .bind(dto.capacity)
        .bind(dto.price)
        .fetch_optional(&self.pool)
        .await?;

        workshop
            .map(|w| w.into())
            .ok_or_else(|| AppError::NotFound(format!("Workshop '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workshops WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Workshop '{}' not found", id)));
        }

        tracing::info!("Workshop deleted: id={}", id);
        Ok(())
    }
}
