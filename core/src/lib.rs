//! Roda Core - read-only data access layer
//!
//! This crate defines the [`Dataset`], [`ObjectStore`] and [`Database`]
//! contracts together with an ordered [`Record`], in-memory and streaming
//! store implementations, and a JSON configuration loader.

pub mod config;
pub mod memory;
pub mod record;
pub mod stream;
pub mod traits;

pub use config::{ConfigError, DatabaseConfig, StoreConfig};
pub use memory::{MemoryDatabase, MemoryDatabaseBuilder, MemoryObjectStore};
pub use record::Record;
pub use roda_common::{
    DatasetError, DatasetResult, ObjectStoreError, ObjectStoreResult, Value,
};
pub use stream::StreamStore;
pub use traits::{Database, Dataset, Datasets, Fields, ObjectStore, Stores};
