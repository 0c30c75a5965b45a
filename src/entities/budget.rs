//! Budget entity - Money set aside for a bucket list item, and how much of it is spent.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owner of the budget
    pub user_id: i64,
    /// Item the budget funds
    pub bucketlist_item_id: i64,
    /// Planned amount in dollars
    pub budget_amount: f64,
    /// Amount spent so far in dollars
    pub spent_amount: f64,
}

/// Defines relationships between Budget and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each budget belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    /// Each budget belongs to one bucket list item
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
