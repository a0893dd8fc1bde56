//! The status-aware validation pass shared by every instrument.
//!
//! Passes run in a fixed order and an earlier failure for a key suppresses
//! the later ones: unrecognized keys first, then required presence (final
//! regime only), then the per-key rules, stopping at the first rule that
//! fails.

use screener_core::models::response_set::ResponseSet;
use screener_core::models::status::Status;
use screener_core::models::validation::ValidationErrors;

use crate::schema::{ValidationSchema, BLANK, INVALID_KEY};

/// Evaluate `schema` against `responses` under `status`. Never fails; an
/// empty result means the responses are valid.
pub fn validate(
    schema: &ValidationSchema,
    responses: &ResponseSet,
    status: Status,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for key in responses.invalid_keys() {
        errors.add(key.clone(), INVALID_KEY);
    }

    if status.is_final() {
        for key in &schema.required_keys {
            if !responses.is_answered(key.as_str()) {
                errors.add(key.clone(), BLANK);
            }
        }
    }

    for (key, value) in responses.answered() {
        if errors.contains_key(key.as_str()) {
            continue;
        }
        if let Some(rule) = schema
            .rules_for(key.as_str())
            .iter()
            .find(|rule| !rule.check(value))
        {
            tracing::debug!(key = %key, message = %rule.message, "rule failed");
            errors.add(key.clone(), rule.message.clone());
        }
    }

    tracing::debug!(
        %status,
        regime = %status.regime(),
        error_keys = errors.len(),
        "validated responses"
    );
    errors
}
