//! Bucket list item entity - Something a user wants to do, with a completion flag.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bucket list item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bucketlist")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short title (e.g., "See the northern lights")
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Whether the item has been done
    #[sea_orm(default_value = false)]
    pub completed: bool,
}

/// Defines relationships between `BucketListItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One item has many reminders
    #[sea_orm(has_many = "super::reminder::Entity")]
    Reminders,
    /// One item has many budgets
    #[sea_orm(has_many = "super::budget::Entity")]
    Budgets,
}

impl Related<super::reminder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reminders.def()
    }
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
