//! Request and response shapes for each resource.
//!
//! Stored forms are the SeaORM models in [`crate::entities`]. The types here are the
//! creation forms, full-replace update forms, partial-update (patch) forms and the
//! views returned over HTTP.

use crate::entities::{bucket_list_item, user};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
/// Use together with `#[serde(default)]`.
#[allow(clippy::option_option)]
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Fields required to create or fully replace a user.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    /// Display name
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Plaintext password, digested before storage
    pub password: String,
}

// Hand-written so the plaintext never reaches logs.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Partial user update; absent fields keep their stored value.
#[derive(Clone, Default, Deserialize)]
pub struct UserPatch {
    /// New display name
    pub username: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New plaintext password
    pub password: Option<String>,
}

impl std::fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPatch")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Public view of a user. The password digest is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// User id
    pub id: i64,
    /// Display name
    pub username: String,
    /// Contact email address
    pub email: String,
}

impl From<user::Model> for UserView {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}

/// Response to `POST /users`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserCreated {
    /// Human-readable outcome
    pub status: String,
    /// Generated id
    pub user_id: i64,
}

// ---------------------------------------------------------------------------
// Bucket list items
// ---------------------------------------------------------------------------

/// Fields required to create or fully replace a bucket list item.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBucketListItem {
    /// Short title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial bucket list item update.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BucketListItemPatch {
    /// New title
    pub title: Option<String>,
    /// New description; `null` clears it, absence leaves it alone
    #[serde(default, deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,
    /// New completion flag
    pub completed: Option<bool>,
}

/// Public view of a bucket list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketListItemView {
    /// Item id
    pub id: i64,
    /// Short title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
}

impl From<bucket_list_item::Model> for BucketListItemView {
    fn from(model: bucket_list_item::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
        }
    }
}

/// Response to `POST /bucketlist`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BucketListItemCreated {
    /// Human-readable outcome
    pub status: String,
    /// Generated id
    pub item_id: i64,
}

/// Query string of `PUT /bucketlist/:id/complete`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompletionQuery {
    /// Desired completion flag
    pub completed: bool,
}

/// Response to `PUT /bucketlist/:id/complete`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionStatus {
    /// Human-readable outcome
    pub status: String,
    /// The flag as stored
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

/// Fields required to create a reminder.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReminder {
    /// Owner
    pub user_id: i64,
    /// Item the reminder is about
    pub bucketlist_item_id: i64,
    /// Due date, RFC 3339
    pub reminder_date: DateTime<Utc>,
    /// Optional text
    #[serde(default)]
    pub message: Option<String>,
}

/// Full replacement of a reminder's mutable fields. The owner cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderUpdate {
    /// Item the reminder is about
    pub bucketlist_item_id: i64,
    /// Due date, RFC 3339
    pub reminder_date: DateTime<Utc>,
    /// Optional text
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

/// Fields required to create a budget.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBudget {
    /// Owner
    pub user_id: i64,
    /// Item the budget funds
    pub bucketlist_item_id: i64,
    /// Planned amount
    pub budget_amount: f64,
    /// Amount already spent, `0.0` when omitted
    #[serde(default)]
    pub spent_amount: Option<f64>,
}

/// Replacement amounts for a budget.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BudgetUpdate {
    /// Planned amount
    pub budget_amount: f64,
    /// Amount spent so far
    pub spent_amount: f64,
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Response carrying only an outcome message, used by deletes.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Human-readable outcome
    pub status: String,
}

impl StatusMessage {
    /// Wraps a static message.
    #[must_use]
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}
