use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::clients::dtos::{ClientResponseDto, UpsertClientDto};
use crate::features::clients::ClientService;
use crate::shared::types::{ApiResponse, Meta};

/// List clients
#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "List of clients", body = ApiResponse<Vec<ClientResponseDto>>),
    ),
    tag = "clients"
)]
pub async fn list_clients(
    State(service): State<Arc<ClientService>>,
) -> Result<Json<ApiResponse<Vec<ClientResponseDto>>>> {
    let clients = service.list().await?;
    let total = clients.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(clients),
        None,
        Some(Meta { total }),
    )))
}

/// Get a client by id
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(("id" = Uuid, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client found", body = ApiResponse<ClientResponseDto>),
        (status = 404, description = "Client not found")
    ),
    tag = "clients"
)]
pub async fn get_client(
    State(service): State<Arc<ClientService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ClientResponseDto>>> {
    let client = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(client), None, None)))
}

/// Register a client
#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = UpsertClientDto,
    responses(
        (status = 201, description = "Client registered", body = ApiResponse<ClientResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Email already registered")
    ),
    security(("bearer_auth" = [])),
    tag = "clients"
)]
pub async fn create_client(
    State(service): State<Arc<ClientService>>,
    AppJson(dto): AppJson<UpsertClientDto>,
) -> Result<(StatusCode, Json<ApiResponse<ClientResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let client = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(client), None, None)),
    ))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(("id" = Uuid, Path, description = "Client id")),
    request_body = UpsertClientDto,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Email already registered")
    ),
    security(("bearer_auth" = [])),
    tag = "clients"
)]
pub async fn update_client(
    State(service): State<Arc<ClientService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertClientDto>,
) -> Result<Json<ApiResponse<ClientResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let client = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(client), None, None)))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(("id" = Uuid, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = [])),
    tag = "clients"
)]
pub async fn delete_client(
    State(service): State<Arc<ClientService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Client deleted".to_string()),
        None,
    )))
}
