use crate::{config::Config, migration::Migrator};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use std::error::Error;

/// Connects to the store and applies pending migrations once, at startup.
pub async fn init(config: &Config) -> Result<DatabaseConnection, Box<dyn Error>> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging_level(log::LevelFilter::Debug);
    let connection = Database::connect(options).await?;
    log::info!("Connected to database...");

    let schema_manager = SchemaManager::new(&connection);
    Migrator::up(&connection, None).await?;
    assert!(schema_manager.has_table("users").await?);
    assert!(schema_manager.has_table("orders").await?);
    log::info!("Applied migrations...");

    Ok(connection)
}
