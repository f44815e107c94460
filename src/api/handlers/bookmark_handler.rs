//! Bookmark handlers.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{BookmarkPatch, BookmarkResponse, NewBookmark};
use crate::errors::AppResult;

/// Bookmark creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookmarkRequest {
    /// Bookmark title
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "First Bookmark")]
    pub title: String,
    /// Bookmarked URL
    #[validate(length(min = 1, message = "Link is required"))]
    #[schema(example = "https://www.google.com")]
    pub link: String,
    /// Free-form description
    #[schema(example = "Search engine")]
    pub description: Option<String>,
}

/// Bookmark update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EditBookmarkRequest {
    /// New title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    /// New URL
    #[validate(length(min = 1, message = "Link must not be empty"))]
    pub link: Option<String>,
    /// New description
    pub description: Option<String>,
}

/// Create bookmark routes
pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookmarks).post(create_bookmark))
        .route(
            "/:id",
            get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark),
        )
}

/// List the caller's bookmarks
#[utoipa::path(
    get,
    path = "/bookmarks",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's bookmarks", body = Vec<BookmarkResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_bookmarks(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookmarkResponse>>> {
    let bookmarks = state
        .bookmark_service
        .list_bookmarks(current_user.id)
        .await?;

    Ok(Json(
        bookmarks.into_iter().map(BookmarkResponse::from).collect(),
    ))
}

/// Create a bookmark
#[utoipa::path(
    post,
    path = "/bookmarks",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    request_body = CreateBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created", body = BookmarkResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_bookmark(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookmarkRequest>,
) -> AppResult<(StatusCode, Json<BookmarkResponse>)> {
    let bookmark = state
        .bookmark_service
        .create_bookmark(
            current_user.id,
            NewBookmark {
                title: payload.title,
                link: payload.link,
                description: payload.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BookmarkResponse::from(bookmark))))
}

/// Get a bookmark by id
#[utoipa::path(
    get,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Bookmark ID")
    ),
    responses(
        (status = 200, description = "Bookmark", body = BookmarkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Bookmark not found")
    )
)]
pub async fn get_bookmark(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookmarkResponse>> {
    let bookmark = state
        .bookmark_service
        .get_bookmark(current_user.id, id)
        .await?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Edit a bookmark by id
#[utoipa::path(
    patch,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Bookmark ID")
    ),
    request_body = EditBookmarkRequest,
    responses(
        (status = 200, description = "Bookmark updated", body = BookmarkResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Bookmark not found")
    )
)]
pub async fn edit_bookmark(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<EditBookmarkRequest>,
) -> AppResult<Json<BookmarkResponse>> {
    let bookmark = state
        .bookmark_service
        .update_bookmark(
            current_user.id,
            id,
            BookmarkPatch {
                title: payload.title,
                link: payload.link,
                description: payload.description,
            },
        )
        .await?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Delete a bookmark by id
#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Bookmark ID")
    ),
    responses(
        (status = 204, description = "Bookmark deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Bookmark not found")
    )
)]
pub async fn delete_bookmark(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state
        .bookmark_service
        .delete_bookmark(current_user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
