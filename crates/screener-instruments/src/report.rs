use std::collections::BTreeMap;

use screener_core::models::report::ScreeningReport;
use screener_core::models::screening::ScreeningRequest;
use uuid::Uuid;

use crate::screening::Screening;
use crate::Instrument;

/// Report with identity, status and validation filled in and every
/// instrument-specific field left empty.
pub(crate) fn base_report(
    instrument: &dyn Instrument,
    request: &ScreeningRequest,
    screening: &Screening,
) -> ScreeningReport {
    ScreeningReport {
        screening_id: request.id.unwrap_or_else(Uuid::new_v4),
        instrument_id: instrument.id().to_string(),
        abbreviation: instrument.abbreviation().to_string(),
        disorder_name: instrument.disorder_name().to_string(),
        status: screening.status(),
        regime: screening.status().regime(),
        valid: screening.is_valid(),
        ready: screening.ensure_ready().is_ok(),
        errors: screening.errors().clone(),
        max_score: instrument.max_score(),
        score: None,
        acuity: None,
        severity_label: None,
        positive: None,
        answers: None,
        subscores: BTreeMap::new(),
        flags: BTreeMap::new(),
        evaluated_at: jiff::Timestamp::now(),
    }
}
