//! Single-pass store over an arbitrary iterator
//!
//! [`StreamStore`] hands its iterator out on the first call to `datasets()`.
//! It cannot restart: every later call fails with [`ObjectStoreError`].

use roda_common::{ObjectStoreError, ObjectStoreResult};
use std::fmt;
use std::sync::Mutex;
use tracing::{trace, warn};

use crate::traits::{Dataset, Datasets, ObjectStore};

pub struct StreamStore<I> {
    source: Mutex<Option<I>>,
}

impl<I, D> StreamStore<I>
where
    I: Iterator<Item = ObjectStoreResult<D>>,
    D: Dataset,
{
    pub fn new(source: I) -> Self {
        Self {
            source: Mutex::new(Some(source)),
        }
    }
}

impl<I> StreamStore<I> {
    /// Whether `datasets()` has already handed out the iterator.
    pub fn is_consumed(&self) -> bool {
        match self.source.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.get_ref().is_none(),
        }
    }

    fn take(&self) -> ObjectStoreResult<I> {
        let mut guard = self
            .source
            .lock()
            .map_err(|_| ObjectStoreError::new("stream store lock poisoned"))?;
        match guard.take() {
            Some(source) => Ok(source),
            None => {
                warn!("refusing to enumerate a consumed stream store");
                Err(ObjectStoreError::new("stream store already consumed"))
            }
        }
    }
}

impl<I> StreamStore<I>
where
    I: Iterator,
{
    /// Wrap an iterator of datasets that cannot fail.
    pub fn infallible<D>(source: I) -> StreamStore<std::iter::Map<I, fn(D) -> ObjectStoreResult<D>>>
    where
        I: Iterator<Item = D>,
        D: Dataset,
    {
        StreamStore::new(source.map(Ok as fn(D) -> ObjectStoreResult<D>))
    }
}

impl<I> fmt::Debug for StreamStore<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamStore")
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

impl<I, D> ObjectStore for StreamStore<I>
where
    I: Iterator<Item = ObjectStoreResult<D>>,
    D: Dataset,
{
    type Dataset = D;

    fn datasets(&self) -> ObjectStoreResult<Datasets<'_, D>> {
        let source = self.take()?;
        trace!("handing out stream store iterator");
        Ok(Box::new(source))
    }
}
