use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a standalone FAQ entry
#[derive(Debug, Clone, FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
