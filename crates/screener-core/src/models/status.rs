use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Lifecycle status of a screening, supplied by the caller.
///
/// Two vocabularies are in use (`requested/started/finished/canceled` and
/// `pending/submitted`); both collapse onto the two validation regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Status {
    Requested,
    Started,
    Finished,
    Canceled,
    Pending,
    Submitted,
}

/// Validation strictness derived from a [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Regime {
    /// Answers may be missing; whatever is present must be in range.
    InProgress,
    /// Every required answer must be present and every rule must hold.
    Final,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Requested,
        Status::Started,
        Status::Finished,
        Status::Canceled,
        Status::Pending,
        Status::Submitted,
    ];

    pub const fn regime(self) -> Regime {
        match self {
            Status::Finished | Status::Submitted => Regime::Final,
            Status::Requested | Status::Started | Status::Canceled | Status::Pending => {
                Regime::InProgress
            }
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self.regime(), Regime::Final)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Requested => "requested",
            Status::Started => "started",
            Status::Finished => "finished",
            Status::Canceled => "canceled",
            Status::Pending => "pending",
            Status::Submitted => "submitted",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::InProgress => f.write_str("in progress"),
            Regime::Final => f.write_str("final"),
        }
    }
}
