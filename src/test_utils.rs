//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{bucket_list, budget, reminder, user},
    entities,
    errors::Result,
    models::{NewBucketListItem, NewBudget, NewReminder, NewUser},
};
use sea_orm::DatabaseConnection;

/// Plaintext password given to every user from [`create_test_user`].
pub const TEST_PASSWORD: &str = "test-password";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user named `username` with email `<username>@example.com`.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    user::create_user(
        db,
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: TEST_PASSWORD.to_string(),
        },
    )
    .await
}

/// Creates a test bucket list item without a description.
pub async fn create_test_item(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entities::bucket_list_item::Model> {
    bucket_list::create_item(
        db,
        NewBucketListItem {
            title: title.to_string(),
            description: None,
        },
    )
    .await
}

/// Creates a reminder due now with message `"Test reminder"`.
pub async fn create_test_reminder(
    db: &DatabaseConnection,
    user_id: i64,
    bucketlist_item_id: i64,
) -> Result<entities::reminder::Model> {
    reminder::create_reminder(
        db,
        NewReminder {
            user_id,
            bucketlist_item_id,
            reminder_date: chrono::Utc::now(),
            message: Some("Test reminder".to_string()),
        },
    )
    .await
}

/// Creates a budget with nothing spent yet.
pub async fn create_test_budget(
    db: &DatabaseConnection,
    user_id: i64,
    bucketlist_item_id: i64,
    budget_amount: f64,
) -> Result<entities::budget::Model> {
    budget::create_budget(
        db,
        NewBudget {
            user_id,
            bucketlist_item_id,
            budget_amount,
            spent_amount: None,
        },
    )
    .await
}

/// Sets up a test environment with one user and one item, the parents every
/// reminder and budget needs.
pub async fn setup_with_owner() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::bucket_list_item::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "tester").await?;
    let item = create_test_item(&db, "Test Item").await?;
    Ok((db, user, item))
}
