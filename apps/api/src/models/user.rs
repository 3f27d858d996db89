use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Portfolio owner. Text fields are empty strings rather than NULL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub profile_image: String,
    pub phone: String,
    pub location: String,
    pub skills: Vec<String>,
    pub template_selected: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// At most one row per user; an empty string means "no link".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SocialLinksRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub linkedin: String,
    pub github: String,
    pub facebook: String,
    pub instagram: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
