//! Budget HTTP Routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use super::ApiState;
use super::extract::{ApiJson, ApiPath};
use crate::core::budget;
use crate::entities::BudgetModel;
use crate::errors::Result;
use crate::models::{BudgetUpdate, NewBudget, StatusMessage};

/// Routes mounted under `/budgets`.
pub fn budget_routes() -> Router<ApiState> {
    Router::new().route("/", post(create_budget_handler)).route(
        "/:budget_id",
        get(get_budget_handler)
            .put(update_budget_handler)
            .delete(delete_budget_handler),
    )
}

pub(super) async fn create_budget_handler(
    State(state): State<ApiState>,
    ApiJson(body): ApiJson<NewBudget>,
) -> Result<(StatusCode, Json<BudgetModel>)> {
    let created = budget::create_budget(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_budget_handler(
    State(state): State<ApiState>,
    ApiPath(budget_id): ApiPath<i64>,
) -> Result<Json<BudgetModel>> {
    Ok(Json(budget::get_budget(&state.db, budget_id).await?))
}

async fn update_budget_handler(
    State(state): State<ApiState>,
    ApiPath(budget_id): ApiPath<i64>,
    ApiJson(body): ApiJson<BudgetUpdate>,
) -> Result<Json<BudgetModel>> {
    Ok(Json(budget::update_budget(&state.db, budget_id, body).await?))
}

async fn delete_budget_handler(
    State(state): State<ApiState>,
    ApiPath(budget_id): ApiPath<i64>,
) -> Result<Json<StatusMessage>> {
    budget::delete_budget(&state.db, budget_id).await?;
    Ok(Json(StatusMessage::new("Budget deleted successfully")))
}
