//! Contract conformance checks shared by the integration tests

#![allow(dead_code)] // each test binary uses a different subset

use roda_core::{Database, Dataset, ObjectStore, Record};

/// Field count equals the number of pairs iteration produces.
pub fn assert_dataset_conformance<D: Dataset>(dataset: &D) {
    assert_eq!(
        dataset.len(),
        dataset.fields().count(),
        "len() disagrees with fields() for {:?}",
        dataset
    );
    assert_eq!(dataset.is_empty(), dataset.len() == 0);
    for (name, value) in dataset.fields() {
        assert_eq!(
            dataset.field(name),
            Some(value),
            "field({name:?}) disagrees with fields() for {dataset:?}"
        );
    }
}

/// For restartable stores: `iter()` and `datasets()` yield the same sequence,
/// and `len()` matches it.
pub fn assert_store_conformance<S>(store: &S)
where
    S: ObjectStore,
    S::Dataset: PartialEq,
{
    let direct: Vec<S::Dataset> = store
        .datasets()
        .expect("datasets() should succeed")
        .collect::<Result<_, _>>()
        .expect("enumeration should succeed");
    let iterated: Vec<S::Dataset> = store
        .iter()
        .expect("iter() should succeed")
        .collect::<Result<_, _>>()
        .expect("enumeration should succeed");

    assert_eq!(direct, iterated);
    assert_eq!(store.len().expect("len() should succeed"), direct.len());
    direct.iter().for_each(assert_dataset_conformance);
}

/// Every enumerated store conforms, and `len()` counts them.
pub fn assert_database_conformance<DB>(db: &DB)
where
    DB: Database,
    <DB::Store as ObjectStore>::Dataset: PartialEq,
{
    let stores: Vec<DB::Store> = db.stores().expect("stores() should succeed").collect();
    assert_eq!(db.len().expect("len() should succeed"), stores.len());
    assert_eq!(db.iter().expect("iter() should succeed").count(), stores.len());
    stores.iter().for_each(assert_store_conformance);
}

/// Records with an `id` field, `count` of them.
pub fn numbered_records(count: i64) -> Vec<Record> {
    (1..=count)
        .map(|id| Record::new().with_field("id", id).with_field("label", format!("row-{id}")))
        .collect()
}
