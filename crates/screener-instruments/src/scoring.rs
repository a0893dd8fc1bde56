/// Clinical descriptor for a range of total scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity {
    /// Short bucket name (e.g. "mild").
    pub acuity: &'static str,
    /// Display form shown next to a score (e.g. "(mild)").
    pub label: &'static str,
}

/// A severity bucket covering every score below `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBand {
    pub upper: u32,
    pub severity: Severity,
}

/// Ordered severity thresholds for one instrument.
#[derive(Debug, Clone, Copy)]
pub struct SeverityScale {
    /// Bands in ascending order of `upper`.
    pub bands: &'static [SeverityBand],
    /// Applies to every score at or above the last band's bound.
    pub top: Severity,
}

impl SeverityScale {
    pub fn classify(&self, score: u32) -> Severity {
        self.bands
            .iter()
            .find(|band| score < band.upper)
            .map_or(self.top, |band| band.severity)
    }
}

/// Number of `values` matching `pred`.
pub fn count_where(values: &[u32], pred: impl Fn(u32) -> bool) -> u32 {
    values.iter().filter(|v| pred(**v)).count() as u32
}
