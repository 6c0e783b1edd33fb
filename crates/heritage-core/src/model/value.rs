// crates/heritage-core/src/model/value.rs

//! Free-form record data.
//!
//! Some record groups (admission prices, resources, directions, ...) have no
//! fixed shape. They are kept as an ordered tree of [`FreeValue`] so every
//! branch is handled explicitly and the key order of the source file survives.
//! JSON `null` carries no information here and is dropped while reading.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single free-form value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FreeValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<FreeValue>),
    Tree(FreeMap),
}

/// Ordered string-keyed map of [`FreeValue`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FreeMap {
    entries: Vec<(String, FreeValue)>,
}

impl FreeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FreeValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FreeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Text value stored under `key`, if it is text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(FreeValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FreeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FreeValue)> for FreeMap {
    fn from_iter<I: IntoIterator<Item = (K, FreeValue)>>(iter: I) -> Self {
        let mut map = FreeMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl From<&str> for FreeValue {
    fn from(s: &str) -> Self {
        FreeValue::Text(s.to_owned())
    }
}

impl From<f64> for FreeValue {
    fn from(n: f64) -> Self {
        FreeValue::Number(n)
    }
}

impl From<bool> for FreeValue {
    fn from(b: bool) -> Self {
        FreeValue::Bool(b)
    }
}

// -----------------------------------------------------------------------------
// SERDE
// -----------------------------------------------------------------------------

impl Serialize for FreeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct FreeValueVisitor;

impl<'de> Visitor<'de> for FreeValueVisitor {
    type Value = FreeValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("text, number, boolean, list or object")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FreeValue, E> {
        Ok(FreeValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FreeValue, E> {
        Ok(FreeValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FreeValue, E> {
        Ok(FreeValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FreeValue, E> {
        Ok(FreeValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FreeValue, E> {
        Ok(FreeValue::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FreeValue, E> {
        Ok(FreeValue::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FreeValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Option<FreeValue>>()? {
            if let Some(item) = item {
                items.push(item);
            }
        }
        Ok(FreeValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<FreeValue, A::Error> {
        FreeMapVisitor.visit_map(map).map(FreeValue::Tree)
    }
}

struct FreeMapVisitor;

impl<'de> Visitor<'de> for FreeMapVisitor {
    type Value = FreeMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FreeMap, A::Error> {
        let mut map = FreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, Option<FreeValue>>()? {
            if let Some(value) = value {
                map.insert(key, value);
            }
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for FreeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FreeValueVisitor)
    }
}

impl<'de> Deserialize<'de> for FreeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FreeMapVisitor)
    }
}
