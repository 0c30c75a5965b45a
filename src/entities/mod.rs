//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod bucket_list_item;
pub mod budget;
pub mod reminder;
pub mod user;

// Re-export specific types to avoid conflicts
pub use bucket_list_item::{
    Column as BucketListItemColumn, Entity as BucketListItem, Model as BucketListItemModel,
};
pub use budget::{Column as BudgetColumn, Entity as Budget, Model as BudgetModel};
pub use reminder::{Column as ReminderColumn, Entity as Reminder, Model as ReminderModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
