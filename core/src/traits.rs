//! Core traits of the read-only data access layer
//!
//! Three contracts compose by nesting: a [`Database`] yields [`ObjectStore`]s,
//! each of which yields [`Dataset`]s. None of them mutates the data it
//! exposes.

use roda_common::{ObjectStoreResult, Value};
use std::fmt::Debug;

/// Lazy sequence of `(name, value)` pairs of a dataset.
pub type Fields<'a> = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

/// Lazy sequence of datasets produced by a store.
pub type Datasets<'a, D> = Box<dyn Iterator<Item = ObjectStoreResult<D>> + 'a>;

/// Lazy sequence of stores produced by a database.
pub type Stores<'a, S> = Box<dyn Iterator<Item = S> + 'a>;

/// A named bag of fields representing one logical data record.
///
/// Implementations decide the iteration order of their fields and what makes
/// a record valid.
pub trait Dataset: Debug {
    /// Every field of this dataset as `(name, value)` pairs.
    fn fields(&self) -> Fields<'_>;

    /// Number of fields. Always equal to the number of pairs `fields()` yields.
    fn len(&self) -> usize {
        self.fields().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a single field by name.
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Whether this dataset is usable. Must be pure and must not panic.
    ///
    /// This is also the truthiness of the dataset: callers filtering
    /// "truthy" datasets filter on this predicate.
    fn is_valid(&self) -> bool;
}

/// A collection of datasets.
///
/// Whether a second call to [`ObjectStore::datasets`] restarts the
/// enumeration is defined by each implementation; callers must not assume it.
pub trait ObjectStore: Debug {
    type Dataset: Dataset;

    /// Start enumerating the datasets of this store.
    fn datasets(&self) -> ObjectStoreResult<Datasets<'_, Self::Dataset>>;

    /// Iterate the store. Equivalent to [`ObjectStore::datasets`].
    fn iter(&self) -> ObjectStoreResult<Datasets<'_, Self::Dataset>> {
        self.datasets()
    }

    /// Number of datasets the store yields.
    ///
    /// The default runs a full enumeration, so it is O(n) and consumes
    /// single-pass stores. The first enumeration error is returned.
    fn len(&self) -> ObjectStoreResult<usize> {
        let mut count = 0;
        for dataset in self.datasets()? {
            dataset?;
            count += 1;
        }
        Ok(count)
    }
}

/// A keyed collection of stores.
///
/// Every store yielded by [`Database::stores`] must be retrievable through
/// [`Database::get`] with one of the keys the database manages.
pub trait Database: Debug {
    type Key: ?Sized + Debug;
    type Store: ObjectStore;
    /// Failure reported by [`Database::get`] for absent keys and by
    /// [`Database::stores`]. Each implementation documents its choice.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Obtain a store by key.
    fn get(&self, key: &Self::Key) -> Result<Self::Store, Self::Error>;

    /// Every store this database manages, in an implementation-defined order.
    fn stores(&self) -> Result<Stores<'_, Self::Store>, Self::Error>;

    /// Iterate the database. Equivalent to [`Database::stores`].
    fn iter(&self) -> Result<Stores<'_, Self::Store>, Self::Error> {
        self.stores()
    }

    /// Number of stores, counted over a full enumeration of `stores()`.
    fn len(&self) -> Result<usize, Self::Error> {
        Ok(self.stores()?.count())
    }
}
