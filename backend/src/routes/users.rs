//! Profile routes for the authenticated user

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use bookmarks_shared::{EditUserRequest, User};

/// Create user routes
///
/// Paths are absolute so the trailing-slash forms can be registered too.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users/me/", get(get_me))
        .route("/users", patch(edit_me))
        .route("/users/", patch(edit_me))
}

/// GET /users/me
async fn get_me(State(state): State<AppState>, auth: AuthUser) -> Json<User> {
    Json(state.users().get_self(&auth))
}

/// PATCH /users
async fn edit_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<EditUserRequest>,
) -> ApiResult<Json<User>> {
    let user = state.users().edit_self(&auth, req).await?;
    Ok(Json(user))
}
