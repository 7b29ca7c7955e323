//! Database configuration module.
//!
//! This module handles `SQLite` connections and table creation using `SeaORM`. Tables are
//! generated with `Schema::create_table_from_entity`, so the schema always matches the
//! entity definitions without hand-written SQL.

use crate::entities::BillEntity;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

/// Local `SQLite` file used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/bill_buddy.sqlite?mode=rwc";

/// Gets the database URL from the environment, falling back to the local default.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens a connection to `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Creates the `bills` table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut bill_table = schema.create_table_from_entity(BillEntity);
    bill_table.if_not_exists();

    db.execute(builder.build(&bill_table)).await?;
    Ok(())
}
