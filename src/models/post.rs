use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, sqlx::FromRow, Clone)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// Single form for both create and edit mode; title/author/content are
// required, checked client-side only.
#[derive(Debug, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub content: String,
}
