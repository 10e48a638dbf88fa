//! Authentication routes
//!
//! Signup and signin are the only unauthenticated API endpoints.

use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use bookmarks_shared::{AuthRequest, AuthToken};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// POST /auth/signup
async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AuthRequest>,
) -> ApiResult<(StatusCode, Json<AuthToken>)> {
    let token = state.auth().signup(req).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// POST /auth/signin
async fn signin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AuthRequest>,
) -> ApiResult<Json<AuthToken>> {
    let token = state.auth().signin(req).await?;
    Ok(Json(token))
}
