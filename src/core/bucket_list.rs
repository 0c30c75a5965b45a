//! Bucket list business logic - Handles items and their completion flag.
//!
//! Title and description are replaced together by [`update_item`]; the completion flag
//! has its own operation, [`mark_completed`], and full updates never touch it.

use crate::{
    core::require_text,
    entities::{BucketListItem, bucket_list_item},
    errors::{Error, Result},
    models::{BucketListItemPatch, NewBucketListItem},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

const RESOURCE: &str = "Bucket list item";

const fn not_found(id: i64) -> Error {
    Error::NotFound {
        resource: RESOURCE,
        id,
    }
}

/// Creates a new, not yet completed, bucket list item.
#[instrument(skip(db))]
pub async fn create_item(
    db: &DatabaseConnection,
    new_item: NewBucketListItem,
) -> Result<bucket_list_item::Model> {
    let title = require_text("title", &new_item.title)?;

    let item = bucket_list_item::ActiveModel {
        title: Set(title),
        description: Set(new_item.description),
        completed: Set(false),
        ..Default::default()
    };

    let created = item.insert(db).await.map_err(|e| Error::Write {
        resource: "bucket list item",
        message: e.to_string(),
    })?;
    info!(item_id = created.id, "Created bucket list item");
    Ok(created)
}

/// Finds an item by id.
#[instrument(skip(db))]
pub async fn get_item(db: &DatabaseConnection, item_id: i64) -> Result<bucket_list_item::Model> {
    let item = BucketListItem::find_by_id(item_id).one(db).await?;
    debug!(found = item.is_some(), "Bucket list item lookup");
    item.ok_or_else(|| not_found(item_id))
}

/// Replaces title and description; `completed` keeps its stored value.
#[instrument(skip(db))]
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    replacement: NewBucketListItem,
) -> Result<bucket_list_item::Model> {
    let title = require_text("title", &replacement.title)?;

    let txn = db.begin().await?;
    let result = BucketListItem::update_many()
        .col_expr(bucket_list_item::Column::Title, Expr::value(title))
        .col_expr(
            bucket_list_item::Column::Description,
            Expr::value(replacement.description),
        )
        .filter(bucket_list_item::Column::Id.eq(item_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found(item_id));
    }

    let updated = BucketListItem::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(item_id))?;
    txn.commit().await?;

    info!(item_id, "Updated bucket list item");
    Ok(updated)
}

/// Applies only the fields present in `patch`, including the completion flag.
#[instrument(skip(db))]
pub async fn patch_item(
    db: &DatabaseConnection,
    item_id: i64,
    patch: BucketListItemPatch,
) -> Result<bucket_list_item::Model> {
    let mut update =
        BucketListItem::update_many().filter(bucket_list_item::Column::Id.eq(item_id));
    let mut changed = false;

    if let Some(title) = patch.title {
        let title = require_text("title", &title)?;
        update = update.col_expr(bucket_list_item::Column::Title, Expr::value(title));
        changed = true;
    }
    if let Some(description) = patch.description {
        update = update.col_expr(
            bucket_list_item::Column::Description,
            Expr::value(description),
        );
        changed = true;
    }
    if let Some(completed) = patch.completed {
        update = update.col_expr(bucket_list_item::Column::Completed, Expr::value(completed));
        changed = true;
    }

    if !changed {
        return get_item(db, item_id).await;
    }

    let txn = db.begin().await?;
    if update.exec(&txn).await?.rows_affected == 0 {
        return Err(not_found(item_id));
    }
    let patched = BucketListItem::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(item_id))?;
    txn.commit().await?;

    info!(item_id, "Patched bucket list item");
    Ok(patched)
}

/// Deletes an item. Reminders and budgets for the item go with it.
#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = BucketListItem::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(item_id));
    }
    info!(item_id, "Deleted bucket list item");
    Ok(())
}

/// Sets the completion flag and echoes it back.
#[instrument(skip(db))]
pub async fn mark_completed(
    db: &DatabaseConnection,
    item_id: i64,
    completed: bool,
) -> Result<bool> {
    let result = BucketListItem::update_many()
        .col_expr(bucket_list_item::Column::Completed, Expr::value(completed))
        .filter(bucket_list_item::Column::Id.eq(item_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found(item_id));
    }
    info!(item_id, completed, "Updated completion flag");
    Ok(completed)
}
