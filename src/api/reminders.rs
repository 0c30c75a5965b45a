//! Reminder HTTP Routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use super::ApiState;
use super::extract::{ApiJson, ApiPath};
use crate::core::reminder;
use crate::entities::ReminderModel;
use crate::errors::Result;
use crate::models::{NewReminder, ReminderUpdate, StatusMessage};

/// Routes mounted under `/reminders`.
pub fn reminder_routes() -> Router<ApiState> {
    Router::new().route("/", post(create_reminder_handler)).route(
        "/:reminder_id",
        get(get_reminder_handler)
            .put(update_reminder_handler)
            .delete(delete_reminder_handler),
    )
}

pub(super) async fn create_reminder_handler(
    State(state): State<ApiState>,
    ApiJson(body): ApiJson<NewReminder>,
) -> Result<(StatusCode, Json<ReminderModel>)> {
    let created = reminder::create_reminder(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_reminder_handler(
    State(state): State<ApiState>,
    ApiPath(reminder_id): ApiPath<i64>,
) -> Result<Json<ReminderModel>> {
    Ok(Json(reminder::get_reminder(&state.db, reminder_id).await?))
}

async fn update_reminder_handler(
    State(state): State<ApiState>,
    ApiPath(reminder_id): ApiPath<i64>,
    ApiJson(body): ApiJson<ReminderUpdate>,
) -> Result<Json<ReminderModel>> {
    Ok(Json(
        reminder::update_reminder(&state.db, reminder_id, body).await?,
    ))
}

async fn delete_reminder_handler(
    State(state): State<ApiState>,
    ApiPath(reminder_id): ApiPath<i64>,
) -> Result<Json<StatusMessage>> {
    reminder::delete_reminder(&state.db, reminder_id).await?;
    Ok(Json(StatusMessage::new("Reminder deleted successfully")))
}
