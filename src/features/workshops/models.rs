use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a studio workshop
#[derive(Debug, Clone, FromRow)]
pub struct Workshop {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub workshop_date: NaiveDate,
    pub capacity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
