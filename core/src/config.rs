//! Configuration for building in-memory databases from JSON documents
//!
//! ```json
//! {
//!   "stores": {
//!     "users": {
//!       "required_fields": ["id"],
//!       "datasets": [{ "id": 1, "name": "ada" }]
//!     }
//!   }
//! }
//! ```

use roda_common::{DatasetError, DatasetResult, ObjectStoreError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::memory::{MemoryDatabase, MemoryDatabaseBuilder, MemoryObjectStore};
use crate::record::Record;

/// Configuration of a whole database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Stores by key.
    #[serde(default)]
    pub stores: BTreeMap<String, StoreConfig>,
}

/// Configuration of one store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Fields every dataset of the store needs to be valid.
    #[serde(default)]
    pub required_fields: Vec<String>,
    /// The datasets, in enumeration order.
    #[serde(default)]
    pub datasets: Vec<Record>,
}

/// Errors raised while reading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document could not be read.
    #[error(transparent)]
    Store(#[from] ObjectStoreError),
    /// The document was read but is malformed or invalid.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl DatabaseConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DatasetError::with_source("malformed database configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ObjectStoreError::with_source(
                format!("cannot read configuration {}", path.display()),
                e,
            )
        })?;
        debug!(path = %path.display(), bytes = json.len(), "read database configuration");
        Ok(Self::from_json_str(&json)?)
    }

    /// Check store keys and required field names.
    pub fn validate(&self) -> DatasetResult<()> {
        for (key, store) in &self.stores {
            if key.is_empty() {
                return Err(DatasetError::new("store key must not be empty"));
            }
            let mut seen = HashSet::new();
            for name in &store.required_fields {
                if name.is_empty() {
                    return Err(DatasetError::new(format!(
                        "store '{key}' has an empty required field name"
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(DatasetError::new(format!(
                        "store '{key}' lists required field '{name}' twice"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl StoreConfig {
    /// Build the store; every dataset receives this store's required fields.
    pub fn into_store(self) -> MemoryObjectStore {
        let required: Arc<[String]> = self.required_fields.into();
        MemoryObjectStore::new(
            self.datasets
                .into_iter()
                .map(|record| record.with_required(Arc::clone(&required))),
        )
    }
}

impl MemoryDatabase {
    /// Validate `config` and build the database it describes.
    pub fn from_config(config: DatabaseConfig) -> DatasetResult<Self> {
        config.validate()?;
        let stores = config.stores.len();
        let db = config
            .stores
            .into_iter()
            .fold(MemoryDatabaseBuilder::new(), |builder, (key, store)| {
                builder.store(key, store.into_store())
            })
            .build();
        info!(stores, "loaded in-memory database from configuration");
        Ok(db)
    }
}
