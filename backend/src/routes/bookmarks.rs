//! Bookmark routes
//!
//! All routes require a bearer token and operate only on the caller's
//! own bookmarks.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::parse_bookmark_id;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookmarks_shared::{Bookmark, CreateBookmarkRequest, EditBookmarkRequest};

/// Create bookmark routes, with and without a trailing slash
pub fn bookmark_routes() -> Router<AppState> {
    let collection = get(list_bookmarks).post(create_bookmark);
    let item = get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark);

    Router::new()
        .route("/bookmarks", collection.clone())
        .route("/bookmarks/", collection)
        .route("/bookmarks/:id", item.clone())
        .route("/bookmarks/:id/", item)
}

/// GET /bookmarks
async fn list_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Bookmark>>> {
    let bookmarks = state.bookmarks().list_mine(&auth).await?;
    Ok(Json(bookmarks))
}

/// POST /bookmarks
async fn create_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookmarkRequest>,
) -> ApiResult<(StatusCode, Json<Bookmark>)> {
    let bookmark = state.bookmarks().create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// GET /bookmarks/:id
async fn get_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Bookmark>> {
    let id = parse_bookmark_id(&id)?;
    let bookmark = state.bookmarks().get_by_id(&auth, id).await?;
    Ok(Json(bookmark))
}

/// PATCH /bookmarks/:id
async fn edit_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<EditBookmarkRequest>,
) -> ApiResult<Json<Bookmark>> {
    let id = parse_bookmark_id(&id)?;
    let bookmark = state.bookmarks().update(&auth, id, req).await?;
    Ok(Json(bookmark))
}

/// DELETE /bookmarks/:id
async fn delete_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_bookmark_id(&id)?;
    state.bookmarks().delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
