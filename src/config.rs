use anyhow::Context;
use secrecy::Secret;

use crate::auth::Credentials;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub uploads_dir: String,
    pub credentials: Credentials,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://database.db".to_string()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            uploads_dir: std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string()),
            credentials: Credentials::new(
                std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                Secret::new(
                    std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string()),
                ),
            ),
        })
    }
}
