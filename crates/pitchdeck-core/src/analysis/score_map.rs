//! Score map that keeps criteria in the order the service sent them.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ScoreDetail;

/// Ordered mapping from criterion name to [`ScoreDetail`].
///
/// Entry order is the JSON object's key order. A repeated key keeps its first
/// position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    entries: Vec<(String, ScoreDetail)>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a criterion. Replacing keeps the original position.
    pub fn insert(&mut self, criterion: impl Into<String>, detail: ScoreDetail) {
        let criterion = criterion.into();
        match self.entries.iter_mut().find(|(k, _)| *k == criterion) {
            Some((_, existing)) => *existing = detail,
            None => self.entries.push((criterion, detail)),
        }
    }

    pub fn get(&self, criterion: &str) -> Option<&ScoreDetail> {
        self.entries
            .iter()
            .find(|(k, _)| k == criterion)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreDetail)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, ScoreDetail)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (K, ScoreDetail)>>(iter: I) -> Self {
        let mut map = ScoreMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for ScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct ScoreMapVisitor;

impl<'de> Visitor<'de> for ScoreMapVisitor {
    type Value = ScoreMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of criterion name to {{score, rationale}}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ScoreMap, A::Error> {
        let mut map = ScoreMap {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((k, v)) = access.next_entry::<String, ScoreDetail>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScoreMapVisitor)
    }
}
