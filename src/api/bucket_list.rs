//! Bucket list HTTP Routes
//!
//! `PUT /bucketlist/:id/complete` answers with the flag only, not the item.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};

use super::ApiState;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::core::bucket_list;
use crate::errors::Result;
use crate::models::{
    BucketListItemCreated, BucketListItemPatch, BucketListItemView, CompletionQuery,
    CompletionStatus, NewBucketListItem, StatusMessage,
};

/// Routes mounted under `/bucketlist`.
pub fn bucket_list_routes() -> Router<ApiState> {
    Router::new()
        .route("/", post(create_item_handler))
        .route(
            "/:item_id",
            get(get_item_handler)
                .put(update_item_handler)
                .patch(patch_item_handler)
                .delete(delete_item_handler),
        )
        .route("/:item_id/complete", put(mark_completed_handler))
}

pub(super) async fn create_item_handler(
    State(state): State<ApiState>,
    ApiJson(body): ApiJson<NewBucketListItem>,
) -> Result<(StatusCode, Json<BucketListItemCreated>)> {
    let created = bucket_list::create_item(&state.db, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(BucketListItemCreated {
            status: "Bucket list item created successfully".to_string(),
            item_id: created.id,
        }),
    ))
}

async fn get_item_handler(
    State(state): State<ApiState>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<Json<BucketListItemView>> {
    let item = bucket_list::get_item(&state.db, item_id).await?;
    Ok(Json(item.into()))
}

async fn update_item_handler(
    State(state): State<ApiState>,
    ApiPath(item_id): ApiPath<i64>,
    ApiJson(body): ApiJson<NewBucketListItem>,
) -> Result<Json<BucketListItemView>> {
    let item = bucket_list::update_item(&state.db, item_id, body).await?;
    Ok(Json(item.into()))
}

async fn patch_item_handler(
    State(state): State<ApiState>,
    ApiPath(item_id): ApiPath<i64>,
    ApiJson(body): ApiJson<BucketListItemPatch>,
) -> Result<Json<BucketListItemView>> {
    let item = bucket_list::patch_item(&state.db, item_id, body).await?;
    Ok(Json(item.into()))
}

async fn delete_item_handler(
    State(state): State<ApiState>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<Json<StatusMessage>> {
    bucket_list::delete_item(&state.db, item_id).await?;
    Ok(Json(StatusMessage::new(
        "Bucket list item deleted successfully",
    )))
}

async fn mark_completed_handler(
    State(state): State<ApiState>,
    ApiPath(item_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<CompletionQuery>,
) -> Result<Json<CompletionStatus>> {
    let completed = bucket_list::mark_completed(&state.db, item_id, query.completed).await?;
    Ok(Json(CompletionStatus {
        status: "Bucket list item updated successfully".to_string(),
        completed,
    }))
}
