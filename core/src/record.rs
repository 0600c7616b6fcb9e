//! Record: the concrete dataset of roda
//!
//! A [`Record`] keeps its fields in insertion order and is valid when every
//! required field is present and not null.

use roda_common::Value;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

use crate::traits::{Dataset, Fields};

/// Ordered field record with a required-field validity rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
    /// Shared between all records of one store.
    required: Arc<[String]>,
}

impl Record {
    /// Create an empty record without required fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set the names of the fields that must be present and non-null.
    #[must_use]
    pub fn with_required(mut self, required: impl Into<Arc<[String]>>) -> Self {
        self.required = required.into();
        self
    }

    /// Insert a field. An existing field of the same name keeps its position
    /// and the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Required fields that are absent or null, in declaration order.
    pub fn missing_fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.required
            .iter()
            .filter(|name| self.get(name).is_none_or(Value::is_null))
            .map(String::as_str)
    }
}

impl Dataset for Record {
    fn fields(&self) -> Fields<'_> {
        Box::new(self.fields.iter().map(|(name, value)| (name.as_str(), value)))
    }

    fn len(&self) -> usize {
        self.fields.len()
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn is_valid(&self) -> bool {
        self.missing_fields().next().is_none()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Written as a JSON object; required fields are not part of the document.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field names to values")
    }

    // Keeps the document's key order.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
        let mut record = Record::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            record.insert(name, value);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let record = Record::new()
            .with_field("zeta", 1i64)
            .with_field("alpha", "a")
            .with_field("mid", true);

        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(record.len(), 3);
        assert_eq!(record.fields().count(), record.len());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = Record::new().with_field("a", 1i64).with_field("b", 2i64);
        let previous = record.insert("a", 10i64);

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(record.len(), 2);
        let pairs: Vec<(&str, &Value)> = record.fields().collect();
        assert_eq!(pairs[0], ("a", &Value::Int(10)));
        assert_eq!(pairs[1], ("b", &Value::Int(2)));
    }

    #[test]
    fn test_validity_follows_required_fields() {
        let req = required(&["id", "name"]);

        let complete = Record::new()
            .with_field("id", 1i64)
            .with_field("name", "x")
            .with_required(req.clone());
        assert!(complete.is_valid());

        let missing = Record::new().with_field("id", 1i64).with_required(req.clone());
        assert!(!missing.is_valid());
        assert_eq!(missing.missing_fields().collect::<Vec<_>>(), vec!["name"]);

        let null_name = Record::new()
            .with_field("id", 1i64)
            .with_field("name", Value::Null)
            .with_required(req);
        assert!(!null_name.is_valid());
    }

    #[test]
    fn test_empty_record() {
        let record = Record::new();
        assert_eq!(record.len(), 0);
        assert!(record.is_empty());
        assert_eq!(record.fields().count(), 0);
        assert!(record.is_valid());

        let strict = Record::new().with_required(required(&["id"]));
        assert!(strict.is_empty());
        assert!(!strict.is_valid());
    }

    #[test]
    fn test_json_keeps_key_order() {
        let record: Record = serde_json::from_str(r#"{"b": 2, "a": null, "c": [1]}"#).unwrap();
        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(record.field("a"), Some(&Value::Null));

        let written = serde_json::to_string(&record).unwrap();
        assert_eq!(written, r#"{"b":2,"a":null,"c":[1]}"#);

        assert!(serde_json::from_str::<Record>("[1, 2]").is_err());
    }

    #[test]
    fn test_collect_into_record() {
        let record: Record = vec![("x", 1i64), ("y", 2i64)].into_iter().collect();
        assert_eq!(record.get("y"), Some(&Value::Int(2)));
    }
}
