//! Optional TOML configuration for the demonstration binaries.
//!
//! Every field has a default matching the hard-coded demo inputs, so running
//! without a file behaves exactly like the plain demos.
//!
//! ```toml
//! log_level = "debug"
//! orders = ["basic", "premium", "meal", "standard"]
//!
//! [storage]
//! backend = "file"          # or "database"
//! path = "document.txt"
//!
//! [[products]]
//! name = "Product1"
//! price = 100.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cart::{Product, ShoppingCart};
use crate::error::ConfigError;
use crate::storage::StorageConfig;

/// Environment variable consulted when no path is passed on the command line.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_level: String,
    pub orders: Vec<String>,
    pub products: Vec<ProductConfig>,
    pub storage: StorageConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            orders: ["basic", "premium", "meal", "standard"]
                .into_iter()
                .map(String::from)
                .collect(),
            products: vec![
                ProductConfig {
                    name: "Product1".to_string(),
                    price: 100.0,
                },
                ProductConfig {
                    name: "Product2".to_string(),
                    price: 200.0,
                },
            ],
            storage: StorageConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Loads from `path` when given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// First CLI argument, then `PATTERNS_CONFIG`, then defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::args_os()
            .nth(1)
            .or_else(|| std::env::var_os(CONFIG_ENV))
            .map(PathBuf::from);
        Self::load(path.as_deref())
    }

    pub fn cart(&self) -> ShoppingCart {
        self.products
            .iter()
            .map(|p| Product::new(p.name.clone(), p.price))
            .collect()
    }
}
