//! Bookmark domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Bookmark domain entity
///
/// A bookmark always belongs to exactly one user; visibility and
/// mutability are scoped to that owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a bookmark
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Partial update of a bookmark; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Bookmark response returned to the owning user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    /// Unique bookmark identifier
    pub id: Uuid,
    /// Owning user identifier
    pub user_id: Uuid,
    /// Bookmark title
    pub title: String,
    /// Bookmarked URL
    pub link: String,
    /// Free-form description, if provided
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            user_id: bookmark.user_id,
            title: bookmark.title,
            link: bookmark.link,
            description: bookmark.description,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}
