use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerKey;

/// Per-key validation messages. An empty map means the responses are valid.
///
/// Messages for a key keep the order they were added in and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationErrors(BTreeMap<AnswerKey, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn add(&mut self, key: AnswerKey, message: impl Into<String>) {
        let message = message.into();
        let messages = self.0.entry(key).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, &[String])> {
        self.0.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Restrict the map to the given keys.
    pub fn only<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut subset = Self::new();
        for key in keys {
            if let Some((k, messages)) = self.0.get_key_value(key) {
                subset.0.insert(k.clone(), messages.clone());
            }
        }
        subset
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{key}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}
