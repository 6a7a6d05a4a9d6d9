//! Ordered, deduplicated list of attraction names

use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Attraction names in discovery order, unique, and never longer than `limit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttractionList {
    names: Vec<String>,
    seen: HashSet<String>,
    limit: usize,
}

impl AttractionList {
    /// Empty list that accepts at most `limit` names
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            names: Vec::with_capacity(limit),
            seen: HashSet::with_capacity(limit),
            limit,
        }
    }

    /// Append `name` unless it is blank, already present, or the list is full.
    /// Returns whether the name was added.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() || self.is_full() || self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Push every name in order until the list is full
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            if self.is_full() {
                break;
            }
            self.push(name);
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.names.len() >= self.limit
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a AttractionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl Serialize for AttractionList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names.serialize(serializer)
    }
}
