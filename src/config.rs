use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
    pub collection_name: String,
    pub host: String,
    pub port: u16,
    pub seed_url: String,
    pub route_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mongo_uri: required("MONGO_URI")?,
            db_name: required("DB_NAME")?,
            collection_name: env::var("COLLECTION_NAME")
                .unwrap_or_else(|_| "transactions".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parsed("PORT", "5000")?,
            seed_url: env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.to_string()),
            route_prefix: normalize_prefix(
                &env::var("ROUTE_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            ),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::Config(format!("{key} must be set")))
}

fn parsed<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|e| Error::Config(format!("{key}={raw} is invalid: {e}")))
}

/// Leading slash, no trailing slash, empty for the root.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
