use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::clients::dtos::{ClientResponseDto, UpsertClientDto};
use crate::features::clients::models::Client;

/// Service for the studio client book
pub struct ClientService {
    pool: PgPool,
}

impl ClientService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ClientResponseDto>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list clients: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(clients.into_iter().map(|c| c.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<ClientResponseDto> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        client
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Client '{}' not found", id)))
    }

    /// Register a client. Email addresses are unique; a duplicate is a
    /// conflict, not a storage failure.
    pub async fn create(&self, dto: UpsertClientDto) -> Result<ClientResponseDto> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, email, phone, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::Conflict(format!(
                "A client with email '{}' is already registered",
                dto.email
            )),
            _ => {
                tracing::error!("Failed to create client: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Client registered: id={}, email={}", client.id, client.email);
        Ok(client.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpsertClientDto) -> Result<ClientResponseDto> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients SET
                name = $2, email = $3, phone = $4, notes = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::Conflict(format!(
                "A client with email '{}' is already registered",
                dto.email
            )),
            _ => {
                tracing::error!("Failed to update client: {:?}", e);
                AppError::Database(e)
            }
        })?;

        client
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Client '{}' not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client '{}' not found", id)));
        }

        tracing::info!("Client deleted: id={}", id);
        Ok(())
    }
}
