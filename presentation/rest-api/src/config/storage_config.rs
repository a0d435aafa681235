use std::path::PathBuf;

use anyhow::{Context, bail};

pub const DEFAULT_PRODUCTS_FILE: &str = "data/products.json";
pub const DEFAULT_CARTS_FILE: &str = "data/carts.json";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where products and carts are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// One JSON file per collection.
    File {
        products_path: PathBuf,
        carts_path: PathBuf,
    },
    /// PostgreSQL, one row per record.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

impl StorageConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::File { .. } => "file",
            StorageConfig::Postgres { .. } => "postgres",
        }
    }

    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "file" or "postgres" (default: "file")
    /// - PRODUCTS_FILE / CARTS_FILE: collection files in file mode
    ///   (default: "data/products.json" / "data/carts.json")
    /// - DATABASE_URL: PostgreSQL connection string (required for "postgres")
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "file".to_string());

        match backend.trim().to_lowercase().as_str() {
            "file" => Ok(StorageConfig::File {
                products_path: lookup("PRODUCTS_FILE")
                    .unwrap_or_else(|| DEFAULT_PRODUCTS_FILE.to_string())
                    .into(),
                carts_path: lookup("CARTS_FILE")
                    .unwrap_or_else(|| DEFAULT_CARTS_FILE.to_string())
                    .into(),
            }),
            "postgres" => {
                let database_url = lookup("DATABASE_URL")
                    .context("DATABASE_URL must be set when STORAGE_BACKEND=postgres")?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .parse::<u32>()
                        .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                Ok(StorageConfig::Postgres {
                    database_url,
                    max_connections,
                })
            }
            other => bail!("Unknown STORAGE_BACKEND: {other}"),
        }
    }
}
