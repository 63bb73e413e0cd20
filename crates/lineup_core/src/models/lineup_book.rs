use super::lineup::Lineup;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque key of a lineup in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct LineupKey(String);

impl LineupKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// `prefix` followed by a random UUID.
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineupKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineupEntry {
    pub key: LineupKey,
    pub lineup: Lineup,
}

/// Insertion-ordered lineup collection. Order is the display order of the selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineupBook {
    entries: Vec<LineupEntry>,
}

impl LineupBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineupEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LineupKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn index_of(&self, key: &LineupKey) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key == key)
    }

    pub fn contains(&self, key: &LineupKey) -> bool {
        self.index_of(key).is_some()
    }

    pub fn get(&self, key: &LineupKey) -> Option<&Lineup> {
        self.entries.iter().find(|entry| &entry.key == key).map(|entry| &entry.lineup)
    }

    pub fn key_at(&self, index: usize) -> Option<&LineupKey> {
        self.entries.get(index).map(|entry| &entry.key)
    }

    /// Append a new lineup, or replace the value of an existing key in place.
    pub fn insert(&mut self, key: LineupKey, lineup: Lineup) {
        match self.index_of(&key) {
            Some(index) => self.entries[index].lineup = lineup,
            None => self.entries.push(LineupEntry { key, lineup }),
        }
    }

    /// Swap in a new value for an existing key. Returns false if the key is unknown.
    pub fn replace(&mut self, key: &LineupKey, lineup: Lineup) -> bool {
        match self.index_of(key) {
            Some(index) => {
                self.entries[index].lineup = lineup;
                true
            }
            None => false,
        }
    }

    /// Remove `key`, returning its former display index and value.
    pub fn remove(&mut self, key: &LineupKey) -> Option<(usize, Lineup)> {
        let index = self.index_of(key)?;
        let entry = self.entries.remove(index);
        Some((index, entry.lineup))
    }

    /// New collection with every lineup transformed, keys and order preserved.
    pub fn map_lineups(&self, mut f: impl FnMut(&Lineup) -> Lineup) -> LineupBook {
        LineupBook {
            entries: self
                .entries
                .iter()
                .map(|entry| LineupEntry { key: entry.key.clone(), lineup: f(&entry.lineup) })
                .collect(),
        }
    }
}

impl FromIterator<(LineupKey, Lineup)> for LineupBook {
    fn from_iter<I: IntoIterator<Item = (LineupKey, Lineup)>>(iter: I) -> Self {
        let mut book = LineupBook::new();
        for (key, lineup) in iter {
            book.insert(key, lineup);
        }
        book
    }
}

impl<'a> IntoIterator for &'a LineupBook {
    type Item = &'a LineupEntry;
    type IntoIter = std::slice::Iter<'a, LineupEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
