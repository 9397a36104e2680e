use sqlx::types::Json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryForm, CategoryGalleryDto, CategoryPageDto, CategoryResponseDto, CategorySummaryDto,
};
use crate::features::categories::models::CategoryDocument;
use crate::features::categories::render::{self, GalleryView};
use crate::modules::storage::{ImageHost, UploadedImage};

/// Service for category documents and their rendered pages
pub struct CategoryService {
    pool: PgPool,
    image_host: Arc<dyn ImageHost>,
}

impl CategoryService {
    pub fn new(pool: PgPool, image_host: Arc<dyn ImageHost>) -> Self {
        Self { pool, image_host }
    }

    pub async fn list(&self) -> Result<Vec<CategorySummaryDto>> {
        let categories = sqlx::query_as::<_, CategoryDocument>(
            "SELECT * FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get the full category document by its URL slug
    pub async fn get_by_href(&self, href: &str) -> Result<CategoryResponseDto> {
        let category = self.find_by_href(href).await?;
        Ok(category.into())
    }

    /// Render a category page: the document's collections as ordered
    /// sections. Unknown slugs are a 404.
    pub async fn get_page(&self, href: &str) -> Result<CategoryPageDto> {
        let category = self.find_by_href(href).await?;
        let sections = render::render_sections(&category);

        Ok(CategoryPageDto {
            category: category.into(),
            sections,
        })
    }

    /// The gallery subsection of a category page, optionally narrowed to
    /// one tag. The special "All" tag clears the filter.
    pub async fn get_gallery(&self, href: &str, tag: Option<&str>) -> Result<CategoryGalleryDto> {
        let category = self.find_by_href(href).await?;

        let mut view = GalleryView::new(&category.art_pieces.0);
        if let Some(tag) = tag {
            view.select_tag(tag);
        }

        Ok(CategoryGalleryDto {
            tags: view.tags(),
            active_tag: view.active_tag().map(|t| t.to_string()),
            items: view.visible_items().into_iter().cloned().collect(),
        })
    }

    pub async fn create(
        &self,
        form: CategoryForm,
        image: Option<UploadedImage>,
    ) -> Result<CategoryResponseDto> {
        // Upload happens as a side effect of save; the resulting URL is
        // substituted into the document before persistence.
        let image_url = self.upload_image(image).await?.unwrap_or_default();

        let name = form
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;
        let href = form
            .href
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| AppError::Validation("href is required".to_string()))?;

        let category = sqlx::query_as::<_, CategoryDocument>(
            r#"
            INSERT INTO categories (
                name, href, description, image,
                art_pieces, process_steps, commitment, bespoke_creations,
                testimonials, blog_posts, care_tips, faqs
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(href)
        .bind(&form.description)
        .bind(&image_url)
        .bind(Json(&form.art_pieces))
        .bind(Json(&form.process_steps))
        .bind(Json(&form.commitment))
        .bind(Json(&form.bespoke_creations))
        .bind(Json(&form.testimonials))
        .bind(Json(&form.blog_posts))
        .bind(Json(&form.care_tips))
        .bind(Json(&form.faqs))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A category with this name or href already exists".to_string())
            }
            _ => {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Category created: id={}, href={}", category.id, category.href);

        Ok(category.into())
    }

    /// Replace a category document. The form always carries the complete
    /// document; a freshly uploaded image (if any) supersedes the stored
    /// URL.
    pub async fn update(
        &self,
        id: Uuid,
        form: CategoryForm,
        image: Option<UploadedImage>,
    ) -> Result<CategoryResponseDto> {
        let image_url = self.upload_image(image).await?;

        let name = form
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;
        let href = form
            .href
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| AppError::Validation("href is required".to_string()))?;

        let category = sqlx::query_as::<_, CategoryDocument>(
            r#"
            UPDATE categories SET
                name = $2,
                href = $3,
                description = $4,
                image = COALESCE($5, image),
                art_pieces = $6,
                process_steps = $7,
                commitment = $8,
                bespoke_creations = $9,
                testimonials = $10,
                blog_posts = $11,
                care_tips = $12,
                faqs = $13,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(href)
        .bind(&form.description)
        .bind(image_url)
        .bind(Json(&form.art_pieces))
        .bind(Json(&form.process_steps))
        .bind(Json(&form.commitment))
        .bind(Json(&form.bespoke_creations))
        .bind(Json(&form.testimonials))
        .bind(Json(&form.blog_posts))
        .bind(Json(&form.care_tips))
        .bind(Json(&form.faqs))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A category with this name or href already exists".to_string())
            }
            _ => {
                tracing::error!("Failed to update category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }

    /// Delete the whole document. No soft-delete; the stored page image
    /// is removed from the image host best-effort.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let category = sqlx::query_as::<_, CategoryDocument>(
            "DELETE FROM categories WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let category =
            category.ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        if !category.image.is_empty() {
            if let Err(e) = self.image_host.delete_by_url(&category.image).await {
                tracing::warn!("Failed to delete category image '{}': {}", category.image, e);
            }
        }

        tracing::info!("Category deleted: id={}, href={}", id, category.href);
        Ok(())
    }

    async fn upload_image(&self, image: Option<UploadedImage>) -> Result<Option<String>> {
        match image {
            Some(img) => {
                let url = self
                    .image_host
                    .store(&img.filename, img.data, &img.content_type)
                    .await?;
                Ok(Some(url))
            }
            None => Ok(None),
        }
    }

    async fn find_by_href(&self, href: &str) -> Result<CategoryDocument> {
        let category = sqlx::query_as::<_, CategoryDocument>(
            "SELECT * FROM categories WHERE href = $1",
        )
        .bind(href)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by href: {:?}", e);
            AppError::Database(e)
        })?;

        category.ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", href)))
    }
}
