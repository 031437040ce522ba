// src/config.rs

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

/// Default bound on concurrent store fetches within one dashboard request.
pub const DEFAULT_STORE_CONCURRENCY: usize = 4;

/// Default size of the Postgres connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub rust_log: String,
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound on per-course fetches in flight for a single dashboard.
    pub store_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = optional("PORT", 3000)?;
        let max_connections = optional("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let store_concurrency = optional("STORE_CONCURRENCY", DEFAULT_STORE_CONCURRENCY)?.max(1);

        Ok(Self {
            database_url,
            jwt_secret,
            rust_log,
            port,
            max_connections,
            store_concurrency,
        })
    }
}

fn required(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("{key} must be set"))
}

fn optional<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
