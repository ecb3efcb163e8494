//! Case-insensitive, multi-valued parameter map.
//!
//! # Design Decisions
//! - Entries kept in insertion order with the name's original casing
//! - Index keyed by the lowercased name points at every entry sharing it
//! - Inserting an existing name appends; nothing is ever overwritten

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Parameters bound by a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, Vec<usize>>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.index
            .entry(fold(&name))
            .or_default()
            .push(self.entries.len());
        self.entries.push((name, value.into()));
    }

    /// First value bound to `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions(name)
            .first()
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Every value bound to `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.positions(name)
            .iter()
            .map(|&i| self.entries[i].1.as_str())
            .collect()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        !self.positions(name).is_empty()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Distinct names in first-seen order, with first-seen casing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, (name, _))| self.positions(name).first() == Some(i))
            .map(|(_, (name, _))| name.as_str())
    }

    fn positions(&self, name: &str) -> &[usize] {
        self.index.get(&fold(name)).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl<'a> IntoIterator for &'a ParameterMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for ParameterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<&str> = self.names().collect();
        let mut map = serializer.serialize_map(Some(names.len()))?;
        for name in names {
            map.serialize_entry(name, &self.get_all(name))?;
        }
        map.end()
    }
}
