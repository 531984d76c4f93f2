//! Id → display name directories for authors and genres

use crate::types::ANY;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Read-only id → display name map
///
/// Entries keep the order they were inserted in, which for a loaded catalog
/// is the order of the keys in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

/// One entry of a filter drop-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder style, used when assembling catalogs in code)
    pub fn with(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(id.into(), name.into());
        self
    }

    /// Insert or rename an entry; a renamed entry keeps its position
    pub fn insert(&mut self, id: String, name: String) {
        match self.index.get(&id) {
            Some(&pos) => self.entries[pos].1 = name,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }

    /// Display name for `id`
    pub fn name(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop-down entries: the unconstrained `"any"` entry labelled
    /// `all_label`, followed by every directory entry
    pub fn options(&self, all_label: &str) -> Vec<FilterOption> {
        std::iter::once(FilterOption {
            value: ANY.to_string(),
            label: all_label.to_string(),
        })
        .chain(self.iter().map(|(id, name)| FilterOption {
            value: id.to_string(),
            label: name.to_string(),
        }))
        .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Directory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for (k, v) in iter {
            directory.insert(k.into(), v.into());
        }
        directory
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = Directory;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of ids to display names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Directory, A::Error> {
        let mut directory = Directory::new();
        while let Some((id, name)) = access.next_entry::<String, String>()? {
            directory.insert(id, name);
        }
        Ok(directory)
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DirectoryVisitor)
    }
}
