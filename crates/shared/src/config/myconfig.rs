use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid port number")?;

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a number")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET is not set")?;

        Ok(Self {
            port,
            database_url,
            db_max_connections,
            jwt_secret,
        })
    }
}
