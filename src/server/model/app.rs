use std::path::PathBuf;

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Root directory uploaded item photos are stored under.
    pub photo_dir: PathBuf,
}
