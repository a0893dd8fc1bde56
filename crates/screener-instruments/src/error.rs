use screener_core::models::answer::AnswerKey;
use screener_core::models::status::Status;
use screener_core::models::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("responses cannot be scored while the screening is {status}")]
    NotReady { status: Status },

    #[error("'{key}' has not been answered yet")]
    Unanswered { key: AnswerKey },

    #[error("invalid responses: {errors}")]
    InvalidResponse { errors: ValidationErrors },
}

impl InstrumentError {
    /// True for the recoverable "ask again later" conditions: the screening
    /// is not final yet, or an answer a field-level accessor needs is missing.
    pub fn is_not_ready(&self) -> bool {
        matches!(
            self,
            InstrumentError::NotReady { .. } | InstrumentError::Unanswered { .. }
        )
    }
}
