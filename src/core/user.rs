//! User business logic - Handles all user-related operations.
//!
//! Passwords are digested with [`password::hash_password`] before they reach the store
//! and the digest never leaves this module except inside a `user::Model`, whose
//! serialization skips it.

use crate::{
    core::{password, require_text},
    entities::{User, user},
    errors::{Error, Result},
    models::{NewUser, UserPatch},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

const RESOURCE: &str = "User";

const fn not_found(id: i64) -> Error {
    Error::NotFound {
        resource: RESOURCE,
        id,
    }
}

fn require_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(Error::validation("password cannot be empty"));
    }
    Ok(())
}

/// Creates a user, storing a digest of the supplied password.
///
/// Username and email are trimmed and must be non-empty. A failing insert is reported
/// as [`Error::Write`].
#[instrument(skip(db, new_user), fields(username = %new_user.username))]
pub async fn create_user(db: &DatabaseConnection, new_user: NewUser) -> Result<user::Model> {
    let username = require_text("username", &new_user.username)?;
    let email = require_text("email", &new_user.email)?;
    require_password(&new_user.password)?;
    let hashed_password = password::hash_password(&new_user.password)?;

    let user = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        hashed_password: Set(hashed_password),
        ..Default::default()
    };

    let created = user.insert(db).await.map_err(|e| Error::Write {
        resource: "user",
        message: e.to_string(),
    })?;
    info!(user_id = created.id, "Created user");
    Ok(created)
}

/// Finds a user by id.
#[instrument(skip(db))]
pub async fn get_user(db: &DatabaseConnection, user_id: i64) -> Result<user::Model> {
    let user = User::find_by_id(user_id).one(db).await?;
    debug!(found = user.is_some(), "User lookup");
    user.ok_or_else(|| not_found(user_id))
}

/// Replaces username, email and password of an existing user.
///
/// The write and the read-back share one transaction, so the returned model is what
/// the store holds.
#[instrument(skip(db, replacement), fields(username = %replacement.username))]
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i64,
    replacement: NewUser,
) -> Result<user::Model> {
    let username = require_text("username", &replacement.username)?;
    let email = require_text("email", &replacement.email)?;
    require_password(&replacement.password)?;
    let hashed_password = password::hash_password(&replacement.password)?;

    let txn = db.begin().await?;
    let result = User::update_many()
        .col_expr(user::Column::Username, Expr::value(username))
        .col_expr(user::Column::Email, Expr::value(email))
        .col_expr(user::Column::HashedPassword, Expr::value(hashed_password))
        .filter(user::Column::Id.eq(user_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found(user_id));
    }

    let updated = User::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(user_id))?;
    txn.commit().await?;

    info!(user_id, "Updated user");
    Ok(updated)
}

/// Applies only the fields present in `patch`.
///
/// An empty patch is a read of the current row.
#[instrument(skip(db))]
pub async fn patch_user(
    db: &DatabaseConnection,
    user_id: i64,
    patch: UserPatch,
) -> Result<user::Model> {
    let mut update = User::update_many().filter(user::Column::Id.eq(user_id));
    let mut changed = false;

    if let Some(username) = patch.username {
        let username = require_text("username", &username)?;
        update = update.col_expr(user::Column::Username, Expr::value(username));
        changed = true;
    }
    if let Some(email) = patch.email {
        let email = require_text("email", &email)?;
        update = update.col_expr(user::Column::Email, Expr::value(email));
        changed = true;
    }
    if let Some(plaintext) = patch.password {
        require_password(&plaintext)?;
        let hashed_password = password::hash_password(&plaintext)?;
        update = update.col_expr(user::Column::HashedPassword, Expr::value(hashed_password));
        changed = true;
    }

    if !changed {
        return get_user(db, user_id).await;
    }

    let txn = db.begin().await?;
    if update.exec(&txn).await?.rows_affected == 0 {
        return Err(not_found(user_id));
    }
    let patched = User::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(user_id))?;
    txn.commit().await?;

    info!(user_id, "Patched user");
    Ok(patched)
}

/// Deletes a user. Reminders and budgets owned by the user go with it.
#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let result = User::delete_by_id(user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(user_id));
    }
    info!(user_id, "Deleted user");
    Ok(())
}

/// Checks a plaintext password against the user's stored digest.
#[instrument(skip(db, plaintext))]
pub async fn verify_user_password(
    db: &DatabaseConnection,
    user_id: i64,
    plaintext: &str,
) -> Result<bool> {
    let user = get_user(db, user_id).await?;
    password::verify_password(plaintext, &user.hashed_password)
}
