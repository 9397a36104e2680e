use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AdminContext;
use crate::features::categories::dtos::{
    CategoryForm, CategoryGalleryDto, CategoryPageDto, CategoryResponseDto, CategorySummaryDto,
};
use crate::features::categories::services::CategoryService;
use crate::modules::storage::{UploadedImage, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};
use crate::shared::types::ApiResponse;
use crate::shared::validation::SLUG_REGEX;

/// List categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategorySummaryDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategorySummaryDto>>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// Get a category document by slug
#[utoipa::path(
    get,
    path = "/api/categories/{href}",
    params(("href" = String, Path, description = "Category URL slug")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(href): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_href(&href).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Get a category page rendered as ordered sections
#[utoipa::path(
    get,
    path = "/api/categories/{href}/page",
    params(("href" = String, Path, description = "Category URL slug")),
    responses(
        (status = 200, description = "Rendered category page", body = ApiResponse<CategoryPageDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_page(
    State(service): State<Arc<CategoryService>>,
    Path(href): Path<String>,
) -> Result<Json<ApiResponse<CategoryPageDto>>> {
    let page = service.get_page(&href).await?;
    Ok(Json(ApiResponse::success(Some(page), None, None)))
}

/// Query params for the gallery subsection
#[derive(Debug, Deserialize)]
pub struct GallerySectionQuery {
    /// Tag to filter by; "All" clears the filter
    pub tag: Option<String>,
}

/// Get a category's gallery subsection with tag filtering
#[utoipa::path(
    get,
    path = "/api/categories/{href}/gallery",
    params(
        ("href" = String, Path, description = "Category URL slug"),
        ("tag" = Option<String>, Query, description = "Tag filter; \"All\" clears it")
    ),
    responses(
        (status = 200, description = "Filtered gallery items", body = ApiResponse<CategoryGalleryDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_gallery(
    State(service): State<Arc<CategoryService>>,
    Path(href): Path<String>,
    Query(query): Query<GallerySectionQuery>,
) -> Result<Json<ApiResponse<CategoryGalleryDto>>> {
    let gallery = service.get_gallery(&href, query.tag.as_deref()).await?;
    Ok(Json(ApiResponse::success(Some(gallery), None, None)))
}

/// Create a category
///
/// Accepts multipart/form-data: text fields `name`, `href`,
/// `description`, JSON-encoded collection fields (`artPieces`,
/// `processSteps`, `commitment`, `bespokeCreations`, `testimonials`,
/// `blogPosts`, `careTips`, `faqs`) and an optional `image` file.
#[utoipa::path(
    post,
    path = "/api/categories",
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Invalid form data"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Duplicate name or href")
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn create_category(
    admin: AdminContext,
    State(service): State<Arc<CategoryService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let (form, image) = parse_category_multipart(multipart).await?;

    debug!("Category create requested by admin {}", admin.token_fingerprint);
    let category = service.create(form, image).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

/// Update a category
///
/// Same multipart form as create; the stored image is kept when no new
/// file is uploaded.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Invalid form data"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let (form, image) = parse_category_multipart(multipart).await?;

    let category = service.update(id, form, image).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted".to_string()),
        None,
    )))
}

/// Pull the category form and optional image out of a multipart body.
async fn parse_category_multipart(
    mut multipart: Multipart,
) -> Result<(CategoryForm, Option<UploadedImage>)> {
    let mut form = CategoryForm::default();
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "name" => form.name = Some(read_text(field, "name").await?),
            "href" => {
                let href = read_text(field, "href").await?;
                if !SLUG_REGEX.is_match(&href) {
                    return Err(AppError::Validation(
                        "href must be a lowercase-hyphenated slug".to_string(),
                    ));
                }
                form.href = Some(href);
            }
            "description" => form.description = read_text(field, "description").await?,
            "artPieces" => form.art_pieces = read_collection(field, "artPieces").await?,
            "processSteps" => form.process_steps = read_collection(field, "processSteps").await?,
            "commitment" => form.commitment = read_collection(field, "commitment").await?,
            "bespokeCreations" => {
                form.bespoke_creations = read_collection(field, "bespokeCreations").await?
            }
            "testimonials" => form.testimonials = read_collection(field, "testimonials").await?,
            "blogPosts" => form.blog_posts = read_collection(field, "blogPosts").await?,
            "careTips" => form.care_tips = read_collection(field, "careTips").await?,
            "faqs" => form.faqs = read_collection(field, "faqs").await?,
            "image" => image = Some(read_image(field).await?),
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok((form, image))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}

async fn read_collection<T: DeserializeOwned>(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<Vec<T>> {
    let text = read_text(field, name).await?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON in {} field: {}", name, e)))
}

async fn read_image(field: axum::extract::multipart::Field<'_>) -> Result<UploadedImage> {
    let content_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported image type '{}'",
            content_type
        )));
    }

    let filename = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unnamed".to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read image data: {}", e)))?;

    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image exceeds the {}MB limit",
            MAX_IMAGE_SIZE / (1024 * 1024)
        )));
    }

    Ok(UploadedImage {
        filename,
        content_type,
        data: data.to_vec(),
    })
}
