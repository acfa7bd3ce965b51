use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category-to-count histogram over one derived key of a table.
///
/// Serializes as a plain JSON object (`{"Pass": 2, "Fail": 1}`) with keys in sorted
/// order so repeated requests produce byte-identical bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(BTreeMap<String, u64>);

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// A distribution restricted to a fixed key set, every bucket starting at zero.
    pub fn with_buckets<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(|k| (k.into(), 0)).collect())
    }

    /// Counts one occurrence of `key`, opening a new bucket if needed.
    pub fn increment(&mut self, key: &str) {
        match self.0.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.0.insert(key.to_string(), 1);
            }
        }
    }

    /// Counts one occurrence of `key` only if that bucket already exists.
    /// Returns whether the key was counted.
    pub fn increment_existing(&mut self, key: &str) -> bool {
        match self.0.get_mut(key) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
