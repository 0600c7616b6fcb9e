//! In-memory store and database implementations
//!
//! Both are restartable: every call to `datasets()` or `stores()` starts a
//! fresh enumeration over data that is fixed at construction time.

use roda_common::{DatasetError, ObjectStoreResult};
use std::collections::BTreeMap;
use std::ops::Index;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::record::Record;
use crate::traits::{Database, Dataset, Datasets, ObjectStore, Stores};

/// Store holding its datasets in memory.
///
/// Cloning is cheap; clones share the same datasets.
#[derive(Debug, Clone)]
pub struct MemoryObjectStore<D = Record> {
    datasets: Arc<[D]>,
}

impl<D> MemoryObjectStore<D> {
    pub fn new(datasets: impl IntoIterator<Item = D>) -> Self {
        let datasets: Arc<[D]> = datasets.into_iter().collect();
        trace!(count = datasets.len(), "created in-memory object store");
        Self { datasets }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Borrow the datasets without cloning them.
    pub fn as_slice(&self) -> &[D] {
        &self.datasets
    }
}

impl<D> Default for MemoryObjectStore<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<D> From<Vec<D>> for MemoryObjectStore<D> {
    fn from(datasets: Vec<D>) -> Self {
        Self::new(datasets)
    }
}

impl<D> ObjectStore for MemoryObjectStore<D>
where
    D: Dataset + Clone,
{
    type Dataset = D;

    fn datasets(&self) -> ObjectStoreResult<Datasets<'_, D>> {
        Ok(Box::new(self.datasets.iter().cloned().map(Ok)))
    }

    fn len(&self) -> ObjectStoreResult<usize> {
        Ok(self.datasets.len())
    }
}

impl<'a, D> IntoIterator for &'a MemoryObjectStore<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.datasets.iter()
    }
}

/// Database mapping string keys to stores.
///
/// Stores are enumerated in key order. Looking up an absent key fails with
/// [`DatasetError`]; indexing an absent key panics.
#[derive(Debug, Clone)]
pub struct MemoryDatabase<S = MemoryObjectStore> {
    stores: BTreeMap<String, S>,
}

impl<S> MemoryDatabase<S> {
    pub fn builder() -> MemoryDatabaseBuilder<S> {
        MemoryDatabaseBuilder::new()
    }

    /// Managed keys, in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.stores.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.stores.contains_key(key)
    }

    /// Key and store pairs, in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &S)> + '_ {
        self.stores.iter().map(|(key, store)| (key.as_str(), store))
    }
}

impl<S> Default for MemoryDatabase<S> {
    fn default() -> Self {
        Self {
            stores: BTreeMap::new(),
        }
    }
}

impl<S> Database for MemoryDatabase<S>
where
    S: ObjectStore + Clone,
{
    type Key = str;
    type Store = S;
    type Error = DatasetError;

    fn get(&self, key: &str) -> Result<S, DatasetError> {
        match self.stores.get(key) {
            Some(store) => Ok(store.clone()),
            None => {
                debug!(key, "lookup of unknown store key");
                Err(DatasetError::new(format!("no store for key '{key}'")))
            }
        }
    }

    fn stores(&self) -> Result<Stores<'_, S>, DatasetError> {
        Ok(Box::new(self.stores.values().cloned()))
    }

    fn len(&self) -> Result<usize, DatasetError> {
        Ok(self.stores.len())
    }
}

impl<S> Index<&str> for MemoryDatabase<S> {
    type Output = S;

    fn index(&self, key: &str) -> &S {
        match self.stores.get(key) {
            Some(store) => store,
            None => panic!("no store for key '{key}'"),
        }
    }
}

/// Builder for creating in-memory databases.
#[derive(Debug)]
pub struct MemoryDatabaseBuilder<S = MemoryObjectStore> {
    stores: BTreeMap<String, S>,
}

impl<S> MemoryDatabaseBuilder<S> {
    pub fn new() -> Self {
        Self {
            stores: BTreeMap::new(),
        }
    }

    /// Register a store under `key`. A later store with the same key
    /// replaces the earlier one.
    pub fn store(mut self, key: impl Into<String>, store: S) -> Self {
        let key = key.into();
        if self.stores.insert(key.clone(), store).is_some() {
            warn!(key = %key, "store key registered twice, keeping the last store");
        }
        self
    }

    pub fn build(self) -> MemoryDatabase<S> {
        debug!(stores = self.stores.len(), "built in-memory database");
        MemoryDatabase {
            stores: self.stores,
        }
    }
}

impl<S> Default for MemoryDatabaseBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, S> FromIterator<(K, S)> for MemoryDatabase<S> {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MemoryDatabaseBuilder::new(), |builder, (key, store)| {
                builder.store(key, store)
            })
            .build()
    }
}
