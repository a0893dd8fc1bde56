//! screener-instruments
//!
//! Questionnaire definitions and scoring. Each instrument declares its
//! validation schema as data; one shared engine validates responses under
//! the caller's lifecycle status, and per-instrument evaluators derive
//! scores, severity and risk flags behind a readiness guard.

pub mod error;
pub mod instruments;
mod report;
pub mod schema;
pub mod scoring;
pub mod screening;
pub mod validation;

use screener_core::models::answer::AnswerKey;
use screener_core::models::report::ScreeningReport;
use screener_core::models::response_set::RawResponses;
use screener_core::models::screening::ScreeningRequest;
use screener_core::models::status::Status;
use screener_core::models::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

use error::InstrumentError;
use instruments::audit::AuditSubscale;
use schema::ValidationSchema;
use screening::Screening;

/// Caller-level switches that change how an instrument is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    #[serde(default)]
    pub audit_subscale: AuditSubscale,
}

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "audit").
    fn id(&self) -> &str;

    /// Short clinical name (e.g., "PHQ-9").
    fn abbreviation(&self) -> &str;

    /// The condition the instrument screens for.
    fn disorder_name(&self) -> &str;

    fn max_score(&self) -> u32;

    fn schema(&self) -> &ValidationSchema;

    fn permitted_keys(&self) -> &[AnswerKey] {
        &self.schema().permitted_keys
    }

    fn required_keys(&self) -> &[AnswerKey] {
        &self.schema().required_keys
    }

    /// Validate raw responses without scoring them.
    fn validate(&self, responses: &RawResponses, status: Status) -> ValidationErrors {
        Screening::new(self.schema(), responses.clone(), status)
            .errors()
            .clone()
    }

    /// Evaluate a request, keeping every value the instrument can compute.
    fn report(&self, request: &ScreeningRequest, options: &EvaluationOptions) -> ScreeningReport;

    /// Format a report as plain text for terminals and notes.
    fn to_text(&self, report: &ScreeningReport) -> String {
        let mut output = format!("## {} ({})\n\n", self.abbreviation(), self.disorder_name());
        output.push_str(&format!("- status: {} ({})\n", report.status, report.regime));

        if !report.errors.is_empty() {
            output.push_str("\n### Errors\n");
            for (key, messages) in report.errors.iter() {
                output.push_str(&format!("- {key}: {}\n", messages.join(", ")));
            }
        }

        if let Some(score) = report.score {
            output.push_str(&format!("- score: {score}/{}", report.max_score));
            if let Some(label) = &report.severity_label {
                output.push_str(&format!(" {label}"));
            }
            output.push('\n');
        }
        if let Some(acuity) = &report.acuity {
            output.push_str(&format!("- acuity: {acuity}\n"));
        }
        if let Some(positive) = report.positive {
            output.push_str(&format!("- positive: {positive}\n"));
        }
        for (name, value) in &report.subscores {
            output.push_str(&format!("- {name}: {value}\n"));
        }
        for (name, value) in &report.flags {
            output.push_str(&format!("- {name}: {value}\n"));
        }
        if !report.ready {
            output.push_str("- not ready for scoring\n");
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::asrs::Asrs),
        Box::new(instruments::audit::Audit),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Evaluate a request against the instrument it names.
pub fn evaluate(
    request: &ScreeningRequest,
    options: &EvaluationOptions,
) -> Result<ScreeningReport, InstrumentError> {
    let instrument = get_instrument(&request.instrument)
        .ok_or_else(|| InstrumentError::UnknownInstrument(request.instrument.clone()))?;
    let report = instrument.report(request, options);
    tracing::info!(
        instrument = instrument.id(),
        status = %report.status,
        valid = report.valid,
        ready = report.ready,
        "evaluated screening"
    );
    Ok(report)
}
