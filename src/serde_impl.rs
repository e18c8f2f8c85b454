//! Serde support (feature-gated)
//!
//! This module provides `Serialize` and `Deserialize` implementations when
//! the `serde` feature is enabled:
//!
//! - [`Optional<T>`] has the same representation as `Option<T>`
//! - [`List<T>`] is a sequence
//! - [`Map<K, V>`] is a map
//! - [`Entry<K, V>`] is a struct with `key` and `value` fields
//!
//! Lazy sequences are descriptions, not data, and are not serializable;
//! collect them first.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use steams::{List, Optional};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Report {
//!     scores: List<u32>,
//!     best: Optional<u32>,
//! }
//!
//! let json = r#"{"scores":[3,9,4],"best":null}"#;
//! let report: Report = serde_json::from_str(json).unwrap();
//! assert_eq!(report.scores.len(), 3);
//! assert!(report.best.is_empty());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Entry, List, Map, Optional};

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl<T> Serialize for List<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for List<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(List::from)
    }
}

impl<K, V> Serialize for Map<K, V>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for Map<K, V>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HashMap::<K, V>::deserialize(deserializer).map(Map::from)
    }
}

impl<K, V> Serialize for Entry<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Entry", 2)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

const ENTRY_FIELDS: &[&str] = &["key", "value"];

enum EntryField {
    Key,
    Value,
}

impl<'de> Deserialize<'de> for EntryField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl Visitor<'_> for FieldVisitor {
            type Value = EntryField;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`key` or `value`")
            }

            fn visit_str<E: de::Error>(self, field: &str) -> Result<EntryField, E> {
                match field {
                    "key" => Ok(EntryField::Key),
                    "value" => Ok(EntryField::Value),
                    other => Err(de::Error::unknown_field(other, ENTRY_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct EntryVisitor<K, V> {
    marker: PhantomData<fn() -> Entry<K, V>>,
}

impl<'de, K, V> Visitor<'de> for EntryVisitor<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Entry<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("struct Entry")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Entry<K, V>, A::Error> {
        let key = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let value = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(Entry::new(key, value))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entry<K, V>, A::Error> {
        let mut key = None;
        let mut value = None;
        while let Some(field) = map.next_key()? {
            match field {
                EntryField::Key => {
                    if key.is_some() {
                        return Err(de::Error::duplicate_field("key"));
                    }
                    key = Some(map.next_value()?);
                }
                EntryField::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
            }
        }
        let key = key.ok_or_else(|| de::Error::missing_field("key"))?;
        let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
        Ok(Entry::new(key, value))
    }
}

impl<'de, K, V> Deserialize<'de> for Entry<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct(
            "Entry",
            ENTRY_FIELDS,
            EntryVisitor {
                marker: PhantomData,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Report {
        scores: List<u32>,
        best: Optional<u32>,
    }

    #[test]
    fn test_optional_matches_option() {
        let present = serde_json::to_string(&Optional::present(5)).unwrap();
        assert_eq!(present, "5");
        let empty = serde_json::to_string(&Optional::<i32>::empty()).unwrap();
        assert_eq!(empty, "null");

        let back: Optional<i32> = serde_json::from_str("null").unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_list_is_a_sequence() {
        let json = serde_json::to_string(&list![1, 2, 3]).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: List<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list![1, 2, 3]);
    }

    #[test]
    fn test_map_is_a_map() {
        let m: Map<String, i32> = vec![("a".to_string(), 1)].into_iter().collect();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"a":1}"#);
        let back: Map<String, i32> = serde_json::from_str(r#"{"x":7,"y":8}"#).unwrap();
        assert_eq!(back["y"], 8);
    }

    #[test]
    fn test_entry_fields() {
        let json = serde_json::to_string(&Entry::new("k", 2)).unwrap();
        assert_eq!(json, r#"{"key":"k","value":2}"#);
        let back: Entry<String, i32> = serde_json::from_str(r#"{"value":2,"key":"k"}"#).unwrap();
        assert_eq!(back, Entry::new("k".to_string(), 2));
    }

    #[test]
    fn test_entry_missing_field_fails() {
        let result: Result<Entry<String, i32>, _> = serde_json::from_str(r#"{"key":"k"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing field `value`"));
    }

    #[test]
    fn test_nested_in_derived_struct() {
        let json = r#"{"scores":[3,9,4],"best":9}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.scores.max(), Optional::Present(&9));
        assert_eq!(report.best.get(), 9);
        assert_eq!(serde_json::to_string(&report).unwrap(), json);
    }
}
