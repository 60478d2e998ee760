//! Insertion-ordered `label -> value` mapping.
//!
//! The analysis endpoints return JSON objects such as
//! `{"Python": 1200, "TypeScript": 800}`. Display ranking must keep the
//! backend's key order for equal values, so the object is decoded into a
//! `Vec` of pairs instead of a hash or B-tree map.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered set of labelled values. Labels are unique; inserting an
/// existing label replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for LabelMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> LabelMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace. A replaced label keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, value: V) {
        let label = label.into();
        if let Some(slot) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = value;
        } else {
            self.entries.push((label, value));
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Value for `label`, inserting `V::default()` at the end if absent.
    pub fn entry_or_default(&mut self, label: &str) -> &mut V
    where
        V: Default,
    {
        let index = match self.entries.iter().position(|(l, _)| l == label) {
            Some(index) => index,
            None => {
                self.entries.push((label.to_string(), V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V, L: Into<String>> FromIterator<(L, V)> for LabelMap<V> {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl<V> IntoIterator for LabelMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for LabelMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

struct LabelMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for LabelMapVisitor<V> {
    type Value = LabelMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of labels to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = LabelMap::new();
        while let Some((label, value)) = access.next_entry::<String, V>()? {
            map.insert(label, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for LabelMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LabelMapVisitor(PhantomData))
    }
}

impl<V: JsonSchema> JsonSchema for LabelMap<V> {
    fn schema_name() -> Cow<'static, str> {
        <BTreeMap<String, V> as JsonSchema>::schema_name()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <BTreeMap<String, V> as JsonSchema>::json_schema(generator)
    }

    fn inline_schema() -> bool {
        true
    }
}
