use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a client testimonial
#[derive(Debug, Clone, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub comment: String,
    pub image: Option<String>,
    pub hint: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
