use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::categories::models::{
    ArtPieceRecord, BespokeCreation, BlogPostTeaser, CategoryDocument, CommitmentItem, FaqEntry,
    ProcessStep, TestimonialRecord,
};
use crate::features::categories::render::PageSection;

/// Compact category DTO for list views and page headers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryDto {
    pub id: Uuid,
    pub name: String,
    pub href: String,
    pub description: String,
    pub image: String,
}

/// Full category DTO including every nested collection
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub href: String,
    pub description: String,
    pub image: String,
    pub art_pieces: Vec<ArtPieceRecord>,
    pub process_steps: Vec<ProcessStep>,
    pub commitment: Vec<CommitmentItem>,
    pub bespoke_creations: Vec<BespokeCreation>,
    pub testimonials: Vec<TestimonialRecord>,
    pub blog_posts: Vec<BlogPostTeaser>,
    pub care_tips: Vec<String>,
    pub faqs: Vec<FaqEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category page rendered as ordered sections
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageDto {
    pub category: CategorySummaryDto,
    pub sections: Vec<PageSection>,
}

/// The gallery subsection with its tag filter applied
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGalleryDto {
    /// Every selectable tag, the clear-filter label first
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tag: Option<String>,
    pub items: Vec<ArtPieceRecord>,
}

impl From<CategoryDocument> for CategorySummaryDto {
    fn from(doc: CategoryDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            href: doc.href,
            description: doc.description,
            image: doc.image,
        }
    }
}

impl From<CategoryDocument> for CategoryResponseDto {
    fn from(doc: CategoryDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            href: doc.href,
            description: doc.description,
            image: doc.image,
            art_pieces: doc.art_pieces.0,
            process_steps: doc.process_steps.0,
            commitment: doc.commitment.0,
            bespoke_creations: doc.bespoke_creations.0,
            testimonials: doc.testimonials.0,
            blog_posts: doc.blog_posts.0,
            care_tips: doc.care_tips.0,
            faqs: doc.faqs.0,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Text fields and collections carried by the multipart admin form.
///
/// Collections arrive as JSON-encoded form fields; any collection the
/// form omits stays empty rather than absent.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub href: Option<String>,
    pub description: String,
    pub art_pieces: Vec<ArtPieceRecord>,
    pub process_steps: Vec<ProcessStep>,
    pub commitment: Vec<CommitmentItem>,
    pub bespoke_creations: Vec<BespokeCreation>,
    pub testimonials: Vec<TestimonialRecord>,
    pub blog_posts: Vec<BlogPostTeaser>,
    pub care_tips: Vec<String>,
    pub faqs: Vec<FaqEntry>,
}
