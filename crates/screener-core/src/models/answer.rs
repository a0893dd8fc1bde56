use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a single question within an instrument (e.g. `q1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerKey(String);

impl AnswerKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AnswerKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnswerKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for AnswerKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A raw answer as supplied by the caller.
///
/// Integers are the only well-typed answers. Anything else (strings,
/// fractions, nested JSON) is kept verbatim so the type rule can report it
/// instead of the value being lost at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Integer(i64),
    Other(serde_json::Value),
}

impl AnswerValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(v) => Some(*v),
            AnswerValue::Other(_) => None,
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Integer(value)
    }
}
