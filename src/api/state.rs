//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, BookmarkService, Services, UserService};

/// Application state shared across handlers (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Bookmark service
    pub bookmark_service: Arc<dyn BookmarkService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// This is the recommended way to create AppState as it wires all
    /// services through the service container.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        use crate::services::ServiceContainer;

        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            bookmark_service: container.bookmarks(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        bookmark_service: Arc<dyn BookmarkService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            bookmark_service,
            database,
        }
    }
}
