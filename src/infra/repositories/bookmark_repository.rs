//! Bookmark repository implementation.
//!
//! Every query is scoped to the owning user: a bookmark id belonging
//! to another user behaves exactly like a nonexistent one.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::bookmark::{self, ActiveModel, Entity as BookmarkEntity};
use crate::domain::{Bookmark, BookmarkPatch, NewBookmark};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Bookmark repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// List a user's bookmarks ordered by creation time
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>>;

    /// Find a bookmark owned by the given user
    async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Bookmark>>;

    /// Create a bookmark owned by the given user
    async fn create(&self, user_id: Uuid, bookmark: NewBookmark) -> AppResult<Bookmark>;

    /// Apply a partial update to a bookmark owned by the given user
    async fn update(&self, user_id: Uuid, id: Uuid, patch: BookmarkPatch) -> AppResult<Bookmark>;

    /// Delete a bookmark owned by the given user
    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BookmarkRepository
pub struct BookmarkStore {
    db: DatabaseConnection,
}

impl BookmarkStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a bookmark row scoped to its owner
    async fn find_owned(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<bookmark::Model>> {
        BookmarkEntity::find_by_id(id)
            .filter(bookmark::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkStore {
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>> {
        let models = BookmarkEntity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .order_by_asc(bookmark::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Bookmark::from).collect())
    }

    async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Bookmark>> {
        let result = self.find_owned(user_id, id).await?;
        Ok(result.map(Bookmark::from))
    }

    async fn create(&self, user_id: Uuid, new: NewBookmark) -> AppResult<Bookmark> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            title: Set(new.title),
            link: Set(new.link),
            description: Set(new.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Bookmark::from(model))
    }

    async fn update(&self, user_id: Uuid, id: Uuid, patch: BookmarkPatch) -> AppResult<Bookmark> {
        let bookmark = self
            .find_owned(user_id, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = bookmark.into();

        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(link) = patch.link {
            active.link = Set(link);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Bookmark::from(model))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        let result = BookmarkEntity::delete_many()
            .filter(bookmark::Column::Id.eq(id))
            .filter(bookmark::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
