use std::collections::{BTreeMap, BTreeSet};

use super::answer::{AnswerKey, AnswerValue};

/// Caller-supplied answers before they are checked against an instrument.
pub type RawResponses = BTreeMap<String, Option<AnswerValue>>;

/// Answers partitioned against an instrument's permitted keys.
///
/// Built once and never mutated. Recognized keys keep their value as given,
/// including explicit nulls; keys outside the permitted set are remembered
/// so they can be reported, but their values are discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    recognized: BTreeMap<AnswerKey, Option<AnswerValue>>,
    invalid: BTreeSet<AnswerKey>,
}

impl ResponseSet {
    pub fn new<I, K>(raw: I, permitted: &[AnswerKey]) -> Self
    where
        I: IntoIterator<Item = (K, Option<AnswerValue>)>,
        K: Into<AnswerKey>,
    {
        let mut recognized = BTreeMap::new();
        let mut invalid = BTreeSet::new();
        for (key, value) in raw {
            let key = key.into();
            if permitted.contains(&key) {
                recognized.insert(key, value);
            } else {
                invalid.insert(key);
            }
        }
        Self {
            recognized,
            invalid,
        }
    }

    /// The answer for `key`, treating an explicit null the same as absence.
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.recognized.get(key).and_then(Option::as_ref)
    }

    /// The answer for `key` if it is present and an integer.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(AnswerValue::as_integer)
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Recognized keys with non-null answers.
    pub fn answered(&self) -> impl Iterator<Item = (&AnswerKey, &AnswerValue)> {
        self.recognized
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v)))
    }

    /// Every recognized key, including those given an explicit null.
    pub fn recognized_keys(&self) -> impl Iterator<Item = &AnswerKey> {
        self.recognized.keys()
    }

    pub fn invalid_keys(&self) -> impl Iterator<Item = &AnswerKey> {
        self.invalid.iter()
    }

    pub fn is_invalid_key(&self, key: &str) -> bool {
        self.invalid.contains(key)
    }

    /// True when nothing was answered and no unrecognized key was given.
    pub fn is_empty(&self) -> bool {
        self.answered().next().is_none() && self.invalid.is_empty()
    }
}
