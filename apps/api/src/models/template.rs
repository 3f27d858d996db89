use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const TEMPLATE_CATEGORIES: [&str; 4] = ["general", "creative", "technical", "business"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub preview: String,
    pub colors: Vec<String>,
    /// Enabled section keys; empty means every section.
    pub sections: Vec<String>,
    pub theme: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
