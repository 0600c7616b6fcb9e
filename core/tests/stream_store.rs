//! Integration tests for the single-pass stream store

mod common;

use common::{assert_dataset_conformance, numbered_records};
use roda_core::{ObjectStore, ObjectStoreError, Record, StreamStore};

#[test]
fn test_stream_yields_each_dataset_once() {
    let store = StreamStore::infallible(numbered_records(5).into_iter());

    let ids: Vec<i64> = store
        .datasets()
        .unwrap()
        .map(|d| d.unwrap())
        .inspect(assert_dataset_conformance)
        .filter_map(|record| record.get("id").and_then(|v| v.as_int()))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    assert!(store.is_consumed());
    assert!(store.datasets().is_err());
}

#[test]
fn test_enumeration_is_lazy() {
    use std::cell::Cell;

    let produced = Cell::new(0);
    let store = StreamStore::infallible((0..10i64).map(|i| {
        produced.set(produced.get() + 1);
        Record::new().with_field("i", i)
    }));

    let mut datasets = store.datasets().unwrap();
    assert_eq!(produced.get(), 0);
    datasets.next().unwrap().unwrap();
    datasets.next().unwrap().unwrap();
    assert_eq!(produced.get(), 2);
}

#[test]
fn test_len_reports_first_item_error() {
    let store = StreamStore::new(
        vec![
            Ok(Record::new()),
            Err(ObjectStoreError::new("backing resource unreachable")),
            Ok(Record::new()),
        ]
        .into_iter(),
    );

    let err = store.len().unwrap_err();
    assert_eq!(err.message(), "backing resource unreachable");
}
