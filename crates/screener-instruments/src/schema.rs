use std::collections::BTreeMap;

use screener_core::models::answer::{AnswerKey, AnswerValue};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Message for a key the instrument does not recognize.
pub const INVALID_KEY: &str = "invalid key";
/// Message for a required key left unanswered in the final regime.
pub const BLANK: &str = "can't be blank";
/// Message for an answer that is not an integer.
pub const NOT_AN_INTEGER: &str = "is not an integer";
/// Message for an integer answer outside the permitted range.
pub const NOT_INCLUDED: &str = "is not included in the list";

/// Inclusive range of permitted answer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: i64,
    pub max: i64,
}

impl AnswerRange {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The check a [`Rule`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum RuleKind {
    Integer,
    Range(AnswerRange),
}

/// A predicate over one answer, paired with the message recorded when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: String,
}

impl Rule {
    pub fn integer() -> Self {
        Self {
            kind: RuleKind::Integer,
            message: NOT_AN_INTEGER.to_string(),
        }
    }

    pub fn range(min: i64, max: i64) -> Self {
        Self {
            kind: RuleKind::Range(AnswerRange { min, max }),
            message: NOT_INCLUDED.to_string(),
        }
    }

    pub fn check(&self, value: &AnswerValue) -> bool {
        match self.kind {
            RuleKind::Integer => value.as_integer().is_some(),
            RuleKind::Range(range) => value.as_integer().is_some_and(|v| range.contains(v)),
        }
    }
}

/// Declarative description of what a valid response set looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationSchema {
    /// Keys that must be answered once the screening is final.
    pub required_keys: Vec<AnswerKey>,
    /// The closed set of recognized keys, in question order.
    pub permitted_keys: Vec<AnswerKey>,
    /// Rules per key, evaluated in order.
    pub rules: BTreeMap<AnswerKey, Vec<Rule>>,
}

impl ValidationSchema {
    /// A schema where every key is required and answered with an integer
    /// between 0 and `max`.
    pub fn likert(keys: &[&str], max: i64) -> Self {
        let permitted_keys: Vec<AnswerKey> = keys.iter().map(|k| AnswerKey::from(*k)).collect();
        let rules = permitted_keys
            .iter()
            .map(|key| (key.clone(), vec![Rule::integer(), Rule::range(0, max)]))
            .collect();
        Self {
            required_keys: permitted_keys.clone(),
            permitted_keys,
            rules,
        }
    }

    pub fn is_permitted(&self, key: &str) -> bool {
        self.permitted_keys.iter().any(|k| k.as_str() == key)
    }

    pub fn rules_for(&self, key: &str) -> &[Rule] {
        self.rules.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}
