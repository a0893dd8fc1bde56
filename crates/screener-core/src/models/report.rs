use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::status::{Regime, Status};
use super::validation::ValidationErrors;

/// Everything that can currently be said about one screening.
///
/// Values that the instrument refuses to compute yet (wrong regime, missing
/// or invalid answers) are `None`; `ready` is true only when the whole
/// response set is final and valid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningReport {
    pub screening_id: Uuid,
    pub instrument_id: String,
    pub abbreviation: String,
    pub disorder_name: String,
    pub status: Status,
    pub regime: Regime,
    pub valid: bool,
    pub ready: bool,
    pub errors: ValidationErrors,
    pub max_score: u32,
    pub score: Option<u32>,
    pub acuity: Option<String>,
    pub severity_label: Option<String>,
    pub positive: Option<bool>,
    pub answers: Option<Vec<u32>>,
    /// Instrument-specific sub-scores (e.g. `suicidal_ideation_score`).
    #[serde(default)]
    pub subscores: BTreeMap<String, u32>,
    /// Instrument-specific boolean predicates (e.g. `impacted`).
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
    pub evaluated_at: jiff::Timestamp,
}
