use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensure the photo storage root exists before accepting uploads
pub async fn prepare_photo_storage(config: &Config) -> Result<(), Error> {
    tokio::fs::create_dir_all(&config.photo_storage_path).await?;

    Ok(())
}
