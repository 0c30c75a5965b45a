//! Budget business logic.
//!
//! Amounts must be finite and non-negative. `spent_amount` starts at `0.0` unless the
//! caller supplies it. Like reminders, creation is guarded by a transaction that is
//! rolled back on failure.

use crate::{
    core::{require_amount, write_failure},
    entities::{Budget, budget},
    errors::{Error, Result},
    models::{BudgetUpdate, NewBudget},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

const RESOURCE: &str = "Budget";

const fn not_found(id: i64) -> Error {
    Error::NotFound {
        resource: RESOURCE,
        id,
    }
}

/// Creates a budget and returns it with its generated id.
#[instrument(skip(db))]
pub async fn create_budget(
    db: &DatabaseConnection,
    new_budget: NewBudget,
) -> Result<budget::Model> {
    let budget_amount = require_amount("budget_amount", new_budget.budget_amount)?;
    let spent_amount = require_amount("spent_amount", new_budget.spent_amount.unwrap_or(0.0))?;

    let budget = budget::ActiveModel {
        user_id: Set(new_budget.user_id),
        bucketlist_item_id: Set(new_budget.bucketlist_item_id),
        budget_amount: Set(budget_amount),
        spent_amount: Set(spent_amount),
        ..Default::default()
    };

    let txn = db.begin().await?;
    let created = match budget.insert(&txn).await {
        Ok(created) => created,
        Err(e) => {
            let rollback = txn.rollback().await;
            return Err(write_failure("budget", &e, rollback));
        }
    };
    txn.commit().await?;

    info!(budget_id = created.id, "Created budget");
    Ok(created)
}

/// Finds a budget by id.
#[instrument(skip(db))]
pub async fn get_budget(db: &DatabaseConnection, budget_id: i64) -> Result<budget::Model> {
    let budget = Budget::find_by_id(budget_id).one(db).await?;
    debug!(found = budget.is_some(), "Budget lookup");
    budget.ok_or_else(|| not_found(budget_id))
}

/// Replaces both amounts of a budget.
#[instrument(skip(db))]
pub async fn update_budget(
    db: &DatabaseConnection,
    budget_id: i64,
    amounts: BudgetUpdate,
) -> Result<budget::Model> {
    let budget_amount = require_amount("budget_amount", amounts.budget_amount)?;
    let spent_amount = require_amount("spent_amount", amounts.spent_amount)?;

    let txn = db.begin().await?;
    let result = Budget::update_many()
        .col_expr(budget::Column::BudgetAmount, Expr::value(budget_amount))
        .col_expr(budget::Column::SpentAmount, Expr::value(spent_amount))
        .filter(budget::Column::Id.eq(budget_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found(budget_id));
    }

    let updated = Budget::find_by_id(budget_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(budget_id))?;
    txn.commit().await?;

    info!(budget_id, "Updated budget");
    Ok(updated)
}

/// Deletes a budget.
#[instrument(skip(db))]
pub async fn delete_budget(db: &DatabaseConnection, budget_id: i64) -> Result<()> {
    let result = Budget::delete_by_id(budget_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(budget_id));
    }
    info!(budget_id, "Deleted budget");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_create_budget_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let negative = create_budget(
            &db,
            NewBudget {
                user_id: 1,
                bucketlist_item_id: 1,
                budget_amount: -10.0,
                spent_amount: None,
            },
        )
        .await;
        assert!(matches!(negative.unwrap_err(), Error::Validation { message: _ }));

        let nan_spent = create_budget(
            &db,
            NewBudget {
                user_id: 1,
                bucketlist_item_id: 1,
                budget_amount: 10.0,
                spent_amount: Some(f64::NAN),
            },
        )
        .await;
        assert!(matches!(nan_spent.unwrap_err(), Error::Validation { message: _ }));
        assert_eq!(Budget::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_budget_defaults_spent_amount() -> Result<()> {
        let (db, user, item) = setup_with_owner().await?;

        let created = create_budget(
            &db,
            NewBudget {
                user_id: user.id,
                bucketlist_item_id: item.id,
                budget_amount: 100.0,
                spent_amount: None,
            },
        )
        .await?;
        assert_eq!(created.budget_amount, 100.0);
        assert_eq!(created.spent_amount, 0.0);

        let fetched = get_budget(&db, created.id).await?;
        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_budget_for_missing_item_rolls_back() -> Result<()> {
        let (db, user, _item) = setup_with_owner().await?;

        let result = create_budget(
            &db,
            NewBudget {
                user_id: user.id,
                bucketlist_item_id: 4242,
                budget_amount: 50.0,
                spent_amount: Some(5.0),
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Write {
                resource: "budget",
                message: _
            }
        ));
        assert_eq!(Budget::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_budget() -> Result<()> {
        let (db, user, item) = setup_with_owner().await?;
        let budget = create_test_budget(&db, user.id, item.id, 250.0).await?;

        let amounts = BudgetUpdate {
            budget_amount: 300.0,
            spent_amount: 120.5,
        };
        let updated = update_budget(&db, budget.id, amounts).await?;
        assert_eq!(updated.budget_amount, 300.0);
        assert_eq!(updated.spent_amount, 120.5);
        assert_eq!(updated.user_id, user.id);
        assert_eq!(updated.bucketlist_item_id, item.id);

        let again = update_budget(&db, budget.id, amounts).await?;
        assert_eq!(again, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_budget_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        assert!(matches!(
            get_budget(&db, 3).await.unwrap_err(),
            Error::NotFound {
                resource: "Budget",
                id: 3
            }
        ));
        assert!(matches!(
            update_budget(
                &db,
                3,
                BudgetUpdate {
                    budget_amount: 1.0,
                    spent_amount: 0.0
                }
            )
            .await
            .unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            delete_budget(&db, 3).await.unwrap_err(),
            Error::NotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_owner_removes_budgets() -> Result<()> {
        let (db, user, item) = setup_with_owner().await?;
        let budget = create_test_budget(&db, user.id, item.id, 80.0).await?;

        crate::core::user::delete_user(&db, user.id).await?;
        assert!(matches!(
            get_budget(&db, budget.id).await.unwrap_err(),
            Error::NotFound { .. }
        ));

        Ok(())
    }
}
