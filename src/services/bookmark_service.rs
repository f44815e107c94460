//! Bookmark service - CRUD over a user's bookmarks.
//!
//! All operations are scoped to the calling user; a foreign bookmark id
//! surfaces NotFound rather than revealing that the record exists.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Bookmark, BookmarkPatch, NewBookmark};
use crate::errors::{AppError, AppResult};
use crate::infra::BookmarkRepository;

/// Bookmark service trait for dependency injection.
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// List the user's bookmarks ordered by creation time
    async fn list_bookmarks(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>>;

    /// Create a bookmark owned by the user
    async fn create_bookmark(&self, user_id: Uuid, bookmark: NewBookmark) -> AppResult<Bookmark>;

    /// Get one of the user's bookmarks by id
    async fn get_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<Bookmark>;

    /// Apply a partial update to one of the user's bookmarks
    async fn update_bookmark(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: BookmarkPatch,
    ) -> AppResult<Bookmark>;

    /// Delete one of the user's bookmarks
    async fn delete_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BookmarkService.
pub struct BookmarkManager {
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl BookmarkManager {
    /// Create new bookmark service instance
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmarks }
    }
}

#[async_trait]
impl BookmarkService for BookmarkManager {
    async fn list_bookmarks(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>> {
        self.bookmarks.list_by_user(user_id).await
    }

    async fn create_bookmark(&self, user_id: Uuid, bookmark: NewBookmark) -> AppResult<Bookmark> {
        self.bookmarks.create(user_id, bookmark).await
    }

    async fn get_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<Bookmark> {
        self.bookmarks
            .find_by_id(user_id, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_bookmark(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: BookmarkPatch,
    ) -> AppResult<Bookmark> {
        self.bookmarks.update(user_id, id, patch).await
    }

    async fn delete_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        self.bookmarks.delete(user_id, id).await
    }
}
