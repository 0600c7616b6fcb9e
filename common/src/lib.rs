//! Common types shared across the roda crates.
//!
//! This module provides the failure kinds of the data access layer and the
//! value type carried by dataset fields.

pub mod error;
pub mod value;

pub use error::{DatasetError, DatasetResult, ObjectStoreError, ObjectStoreResult};
pub use value::Value;
