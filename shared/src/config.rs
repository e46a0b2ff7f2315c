use std::env;
use std::time::Duration;

use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub lifecycle: LifecycleConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let lifecycle = LifecycleConfig {
            sweep_interval: Duration::from_secs(env_or("SWEEP_INTERVAL_SECONDS", 300)?),
        };
        let cache = CacheConfig {
            venue_ttl: Duration::from_secs(env_or("VENUE_CACHE_TTL_SECONDS", 600)?),
        };
        Ok(Self {
            database,
            lifecycle,
            cache,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct LifecycleConfig {
    pub sweep_interval: Duration,
}

pub struct CacheConfig {
    pub venue_ttl: Duration,
}

fn env_or(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(default),
    }
}
