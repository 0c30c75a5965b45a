//! Reminder entity - A dated note tying a user to one of their bucket list items.
//!
//! `user_id` is fixed at creation; the item, date and message can be replaced.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reminder database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reminders")]
pub struct Model {
    /// Unique identifier for the reminder
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owner of the reminder
    pub user_id: i64,
    /// Item the reminder is about
    pub bucketlist_item_id: i64,
    /// When the reminder is due, stored as `DATETIME` so MySQL accepts dates past 2038
    #[sea_orm(column_type = "DateTime")]
    pub reminder_date: DateTimeUtc,
    /// Optional text shown with the reminder
    pub message: Option<String>,
}

/// Defines relationships between Reminder and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each reminder belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    /// Each reminder belongs to one bucket list item
    #[sea_orm(
        belongs_to = "super::bucket_list_item::Entity",
        from = "Column::BucketlistItemId",
        to = "super::bucket_list_item::Column::Id",
        on_delete = "Cascade"
    )]
    BucketListItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::bucket_list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BucketListItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
