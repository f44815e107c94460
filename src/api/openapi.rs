//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, bookmark_handler, user_handler};
use crate::domain::{BookmarkResponse, UserResponse};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Linkvault API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Linkvault",
        version = "0.1.0",
        description = "Bookmark REST API with JWT authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::signup,
        auth_handler::signin,
        // User endpoints
        user_handler::get_current_user,
        user_handler::edit_current_user,
        // Bookmark endpoints
        bookmark_handler::list_bookmarks,
        bookmark_handler::create_bookmark,
        bookmark_handler::get_bookmark,
        bookmark_handler::edit_bookmark,
        bookmark_handler::delete_bookmark,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            BookmarkResponse,
            // Auth types
            auth_handler::SignupRequest,
            auth_handler::SigninRequest,
            TokenResponse,
            // User handler types
            user_handler::EditUserRequest,
            // Bookmark handler types
            bookmark_handler::CreateBookmarkRequest,
            bookmark_handler::EditBookmarkRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and signin"),
        (name = "Users", description = "Profile operations"),
        (name = "Bookmarks", description = "Bookmark CRUD operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/signin"))
                        .build(),
                ),
            );
        }
    }
}
