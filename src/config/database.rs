//! Database configuration module.
//!
//! This module builds the process-wide connection pool from [`DatabaseConfig`] and can
//! create the four resource tables from the entity definitions. Table creation uses
//! `SeaORM`'s `Schema::create_table_from_entity` so the schema always matches the Rust
//! structs, and is guarded with `IF NOT EXISTS` so it is safe to run on every start.
//!
//! The pool is created once in `main`, shared with every handler, and closed explicitly
//! at shutdown.

use crate::config::DatabaseConfig;
use crate::entities::{BucketListItem, Budget, Reminder, User};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::time::Duration;
use tracing::{info, instrument};

/// Opens the connection pool described by `config`.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;
    info!("Database connection pool established");
    Ok(db)
}

/// Creates all resource tables that do not exist yet.
///
/// Parents are created before children so the foreign keys on `reminders` and
/// `budgets` resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = [
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(BucketListItem),
        schema.create_table_from_entity(Reminder),
        schema.create_table_from_entity(Budget),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    info!("Resource tables are present");
    Ok(())
}
