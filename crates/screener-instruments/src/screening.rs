//! Guarded access to a validated response set.
//!
//! Accessors come in two strengths. Whole-set accessors (scores, severity,
//! answers) need the screening to be final and every answer valid, checked
//! in that order. Field-level accessors only need the keys they read to be
//! answered and valid, in either regime, so partially completed forms can be
//! queried.

use screener_core::models::answer::{AnswerKey, AnswerValue};
use screener_core::models::response_set::ResponseSet;
use screener_core::models::status::Status;
use screener_core::models::validation::ValidationErrors;

use crate::error::InstrumentError;
use crate::schema::{ValidationSchema, NOT_AN_INTEGER};
use crate::validation::validate;

/// A response set bound to a status, validated once at construction.
#[derive(Debug, Clone)]
pub struct Screening {
    responses: ResponseSet,
    status: Status,
    errors: ValidationErrors,
}

impl Screening {
    pub fn new<I, K>(schema: &ValidationSchema, raw: I, status: Status) -> Self
    where
        I: IntoIterator<Item = (K, Option<AnswerValue>)>,
        K: Into<AnswerKey>,
    {
        let responses = ResponseSet::new(raw, &schema.permitted_keys);
        let errors = validate(schema, &responses, status);
        Self {
            responses,
            status,
            errors,
        }
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whole-set guard: final status first, then full validity.
    pub fn ensure_ready(&self) -> Result<(), InstrumentError> {
        if !self.status.is_final() {
            tracing::debug!(status = %self.status, "screening not final");
            return Err(InstrumentError::NotReady {
                status: self.status,
            });
        }
        if !self.is_valid() {
            tracing::debug!(errors = %self.errors, "screening has invalid responses");
            return Err(InstrumentError::InvalidResponse {
                errors: self.errors.clone(),
            });
        }
        Ok(())
    }

    /// Values of `keys` after the whole-set guard has passed.
    pub fn ready_values<const N: usize>(
        &self,
        keys: [&str; N],
    ) -> Result<[u32; N], InstrumentError> {
        self.ensure_ready()?;
        self.values(keys)
    }

    /// Values of `keys`, requiring only those keys to be answered and valid.
    ///
    /// These accessors use this guard and so answer in either regime: PHQ-9
    /// `suicidal_ideation_score` (q9), `impacted` (q10), `phq2_score`,
    /// `phq2_positive` and `somewhat_depressed` (q1, q2), and AUDIT
    /// `auditc_positive` (q1–q3). Every other score or classification goes
    /// through [`Screening::ready_values`] or [`Screening::ensure_ready`].
    pub fn field_values<const N: usize>(
        &self,
        keys: [&str; N],
    ) -> Result<[u32; N], InstrumentError> {
        let errors = self.errors.only(keys);
        if !errors.is_empty() {
            tracing::debug!(%errors, "field-level accessor refused");
            return Err(InstrumentError::InvalidResponse { errors });
        }
        self.values(keys)
    }

    fn values<const N: usize>(&self, keys: [&str; N]) -> Result<[u32; N], InstrumentError> {
        let mut values = [0; N];
        for (slot, key) in values.iter_mut().zip(keys) {
            *slot = self.value(key)?;
        }
        Ok(values)
    }

    fn value(&self, key: &str) -> Result<u32, InstrumentError> {
        let answer = self
            .responses
            .get(key)
            .ok_or_else(|| InstrumentError::Unanswered {
                key: AnswerKey::from(key),
            })?;
        answer
            .as_integer()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                let mut errors = ValidationErrors::new();
                errors.add(AnswerKey::from(key), NOT_AN_INTEGER);
                InstrumentError::InvalidResponse { errors }
            })
    }
}

/// Shared surface of the per-instrument evaluators.
pub trait Evaluator {
    fn screening(&self) -> &Screening;

    fn status(&self) -> Status {
        self.screening().status()
    }

    fn is_valid(&self) -> bool {
        self.screening().is_valid()
    }

    fn errors(&self) -> &ValidationErrors {
        self.screening().errors()
    }

    /// The raw answer for `key`, if one was given.
    fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.screening().responses().get(key)
    }
}
