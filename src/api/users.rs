//! User HTTP Routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use super::ApiState;
use super::extract::{ApiJson, ApiPath};
use crate::core::user;
use crate::errors::Result;
use crate::models::{NewUser, StatusMessage, UserCreated, UserPatch, UserView};

/// Routes mounted under `/users`.
pub fn user_routes() -> Router<ApiState> {
    Router::new().route("/", post(create_user_handler)).route(
        "/:user_id",
        get(get_user_handler)
            .put(update_user_handler)
            .patch(patch_user_handler)
            .delete(delete_user_handler),
    )
}

pub(super) async fn create_user_handler(
    State(state): State<ApiState>,
    ApiJson(body): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<UserCreated>)> {
    let created = user::create_user(&state.db, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            status: "User created successfully".to_string(),
            user_id: created.id,
        }),
    ))
}

async fn get_user_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<UserView>> {
    let found = user::get_user(&state.db, user_id).await?;
    Ok(Json(found.into()))
}

async fn update_user_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(body): ApiJson<NewUser>,
) -> Result<Json<UserView>> {
    let updated = user::update_user(&state.db, user_id, body).await?;
    Ok(Json(updated.into()))
}

async fn patch_user_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(body): ApiJson<UserPatch>,
) -> Result<Json<UserView>> {
    let patched = user::patch_user(&state.db, user_id, body).await?;
    Ok(Json(patched.into()))
}

async fn delete_user_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<StatusMessage>> {
    user::delete_user(&state.db, user_id).await?;
    Ok(Json(StatusMessage::new("User deleted successfully")))
}
