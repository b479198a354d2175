pub mod portfolio;
pub mod properties;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Create a SeaORM database connection pool for the given connection string.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
