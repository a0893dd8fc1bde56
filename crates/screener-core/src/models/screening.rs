use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response_set::RawResponses;
use super::status::Status;
use crate::error::CoreError;

/// One evaluation request: which instrument, the current status, and the
/// answers collected so far.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub instrument: String,
    pub status: Status,
    #[serde(default)]
    pub responses: RawResponses,
}

impl ScreeningRequest {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
