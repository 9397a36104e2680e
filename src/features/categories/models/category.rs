use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A category page document.
///
/// One row per category; the page's nested collections live in JSONB
/// columns. Every collection defaults to empty, never absent, so the
/// renderer does not branch on missing-vs-empty.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryDocument {
    pub id: Uuid,
    pub name: String,
    pub href: String,
    pub description: String,
    pub image: String,
    pub art_pieces: Json<Vec<ArtPieceRecord>>,
    pub process_steps: Json<Vec<ProcessStep>>,
    pub commitment: Json<Vec<CommitmentItem>>,
    pub bespoke_creations: Json<Vec<BespokeCreation>>,
    pub testimonials: Json<Vec<TestimonialRecord>>,
    pub blog_posts: Json<Vec<BlogPostTeaser>>,
    pub care_tips: Json<Vec<String>>,
    pub faqs: Json<Vec<FaqEntry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Gallery item embedded in a category page.
///
/// Loosely typed display data; a record missing `images` or `tags`
/// deserializes with empty collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtPieceRecord {
    pub title: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    /// Icon name; unknown names render with the default icon
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BespokeCreation {
    pub image: String,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRecord {
    pub name: String,
    pub comment: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostTeaser {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
