//! Reminder business logic.
//!
//! Creation runs inside a transaction that is rolled back on any store failure, after
//! which the failure is reported as [`Error::Write`] with the store message attached.

use crate::{
    core::write_failure,
    entities::{Reminder, reminder},
    errors::{Error, Result},
    models::{NewReminder, ReminderUpdate},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

const RESOURCE: &str = "Reminder";

const fn not_found(id: i64) -> Error {
    Error::NotFound {
        resource: RESOURCE,
        id,
    }
}

/// Creates a reminder and returns it with its generated id.
#[instrument(skip(db))]
pub async fn create_reminder(
    db: &DatabaseConnection,
    new_reminder: NewReminder,
) -> Result<reminder::Model> {
    let reminder = reminder::ActiveModel {
        user_id: Set(new_reminder.user_id),
        bucketlist_item_id: Set(new_reminder.bucketlist_item_id),
        reminder_date: Set(new_reminder.reminder_date),
        message: Set(new_reminder.message),
        ..Default::default()
    };

    let txn = db.begin().await?;
    let created = match reminder.insert(&txn).await {
        Ok(created) => created,
        Err(e) => {
            let rollback = txn.rollback().await;
            return Err(write_failure("reminder", &e, rollback));
        }
    };
    txn.commit().await?;

    info!(reminder_id = created.id, "Created reminder");
    Ok(created)
}

/// Finds a reminder by id.
#[instrument(skip(db))]
pub async fn get_reminder(db: &DatabaseConnection, reminder_id: i64) -> Result<reminder::Model> {
    let reminder = Reminder::find_by_id(reminder_id).one(db).await?;
    debug!(found = reminder.is_some(), "Reminder lookup");
    reminder.ok_or_else(|| not_found(reminder_id))
}

/// Replaces item, date and message. The owning user is fixed at creation.
#[instrument(skip(db))]
pub async fn update_reminder(
    db: &DatabaseConnection,
    reminder_id: i64,
    replacement: ReminderUpdate,
) -> Result<reminder::Model> {
    let txn = db.begin().await?;
    let result = Reminder::update_many()
        .col_expr(
            reminder::Column::BucketlistItemId,
            Expr::value(replacement.bucketlist_item_id),
        )
        .col_expr(
            reminder::Column::ReminderDate,
            Expr::value(replacement.reminder_date),
        )
        .col_expr(reminder::Column::Message, Expr::value(replacement.message))
        .filter(reminder::Column::Id.eq(reminder_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found(reminder_id));
    }

    let updated = Reminder::find_by_id(reminder_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(reminder_id))?;
    txn.commit().await?;

    info!(reminder_id, "Updated reminder");
    Ok(updated)
}

/// Deletes a reminder.
#[instrument(skip(db))]
pub async fn delete_reminder(db: &DatabaseConnection, reminder_id: i64) -> Result<()> {
    let result = Reminder::delete_by_id(reminder_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(reminder_id));
    }
    info!(reminder_id, "Deleted reminder");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_create_and_get_reminder_integration() -> Result<()> {
        let (db, user, item) = setup_with_owner().await?;
        let due = Utc.with_ymd_and_hms(2027, 3, 1, 9, 0, 0).unwrap();

        let created = create_reminder(
            &db,
            NewReminder {
                user_id: user.id,
                bucketlist_item_id: item.id,
                reminder_date: due,
                message: Some("Book flights".to_string()),
            },
        )
        .await?;
        assert_eq!(created.user_id, user.id);
        assert_eq!(created.bucketlist_item_id, item.id);
        assert_eq!(created.reminder_date, due);

        let fetched = get_reminder(&db, created.id).await?;
        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_reminder_for_missing_user_rolls_back() -> Result<()> {
        let (db, _user, item) = setup_with_owner().await?;

        let result = create_reminder(
            &db,
            NewReminder {
                user_id: 9999,
                bucketlist_item_id: item.id,
                reminder_date: Utc::now(),
                message: None,
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Write {
                resource: "reminder",
                message: _
            }
        ));
        assert_eq!(Reminder::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_reminder_keeps_owner() -> Result<()> {
        let (db, user, item) = setup_with_owner().await?;
        let other_item = create_test_item(&db, "Second item").await?;
        let reminder = create_test_reminder(&db, user.id, item.id).await?;
        let new_date = Utc.with_ymd_and_hms(2028, 1, 15, 12, 30, 0).unwrap();

        let update = ReminderUpdate {
            bucketlist_item_id: other_item.id,
            reminder_date: new_date,
            message: None,
        };
        let updated = update_reminder(&db, reminder.id, update.clone()).await?;
        assert_eq!(updated.user_id, user.id);
        assert_eq!(updated.bucketlist_item_id, other_item.id);
        assert_eq!(updated.reminder_date, new_date);
        assert!(updated.message.is_none());

        let again = update_reminder(&db, reminder.id, update).await?;
        assert_eq!(again, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_reminder_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        assert!(matches!(
            get_reminder(&db, 5).await.unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            update_reminder(
                &db,
                5,
                ReminderUpdate {
                    bucketlist_item_id: 1,
                    reminder_date: Utc::now(),
                    message: None,
                }
            )
            .await
            .unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            delete_reminder(&db, 5).await.unwrap_err(),
            Error::NotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_reminder_then_get_is_not_found() -> Result<()> {
        let (db, user, item) = setup_with_owner().await?;
        let reminder = create_test_reminder(&db, user.id, item.id).await?;

        delete_reminder(&db, reminder.id).await?;
        assert!(matches!(
            get_reminder(&db, reminder.id).await.unwrap_err(),
            Error::NotFound { .. }
        ));

        Ok(())
    }
}
