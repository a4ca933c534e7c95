use std::path::PathBuf;

use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub photo_storage_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            photo_storage_path: PathBuf::from(
                std::env::var("PHOTO_STORAGE_PATH").unwrap_or_else(|_| "homebase-fs".to_string()),
            ),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
