//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{AuthService, BookmarkService, UserService};
use crate::config::Config;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get bookmark service
    fn bookmarks(&self) -> Arc<dyn BookmarkService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    bookmark_service: Arc<dyn BookmarkService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        bookmark_service: Arc<dyn BookmarkService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            bookmark_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, BookmarkManager, UserManager};
        use crate::infra::{BookmarkStore, UserStore};

        let users = Arc::new(UserStore::new(db.clone()));
        let bookmarks = Arc::new(BookmarkStore::new(db));

        let auth_service = Arc::new(Authenticator::new(users.clone(), config));
        let user_service = Arc::new(UserManager::new(users));
        let bookmark_service = Arc::new(BookmarkManager::new(bookmarks));

        Self {
            auth_service,
            user_service,
            bookmark_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn bookmarks(&self) -> Arc<dyn BookmarkService> {
        self.bookmark_service.clone()
    }
}
