use screener_core::models::answer::{AnswerKey, AnswerValue};
use screener_core::models::report::ScreeningReport;
use screener_core::models::screening::ScreeningRequest;
use screener_core::models::status::Status;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::report::base_report;
use crate::schema::ValidationSchema;
use crate::scoring::{Severity, SeverityBand, SeverityScale};
use crate::screening::{Evaluator, Screening};
use crate::{EvaluationOptions, Instrument};

const KEYS: [&str; 10] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"];

const SEVERITY: SeverityScale = SeverityScale {
    bands: &[
        SeverityBand {
            upper: 8,
            severity: Severity {
                acuity: "none",
                label: "(low risk)",
            },
        },
        SeverityBand {
            upper: 16,
            severity: Severity {
                acuity: "hazardous/harmful alcohol consumption",
                label: "(hazardous or harmful)",
            },
        },
        SeverityBand {
            upper: 20,
            severity: Severity {
                acuity: "high level of alcohol problems",
                label: "(high level of problems)",
            },
        },
    ],
    top: Severity {
        acuity: "probable alcohol dependence",
        label: "(probable dependence)",
    },
};

/// Which part of the AUDIT is being scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AuditSubscale {
    /// All ten items.
    #[default]
    Full,
    /// Restricted to the AUDIT-C consumption items. When the AUDIT-C screen
    /// is negative the score falls back to q1 + q2.
    AuditC,
}

/// AUDIT: Alcohol Use Disorders Identification Test. Ten items scored 0–4.
pub struct Audit;

impl Instrument for Audit {
    fn id(&self) -> &str {
        "audit"
    }

    fn abbreviation(&self) -> &str {
        "AUDIT"
    }

    fn disorder_name(&self) -> &str {
        "Alcohol Use Disorder"
    }

    fn max_score(&self) -> u32 {
        40
    }

    fn schema(&self) -> &ValidationSchema {
        static SCHEMA: std::sync::LazyLock<ValidationSchema> =
            std::sync::LazyLock::new(|| ValidationSchema::likert(&KEYS, 4));
        &SCHEMA
    }

    fn report(&self, request: &ScreeningRequest, options: &EvaluationOptions) -> ScreeningReport {
        let evaluator = AuditEvaluator::with_subscale(
            request.responses.clone(),
            request.status,
            options.audit_subscale,
        );
        let mut report = base_report(self, request, evaluator.screening());
        report.score = evaluator.score().ok();
        report.acuity = evaluator.acuity().ok().map(str::to_string);
        report.severity_label = evaluator.severity_label().ok().map(str::to_string);
        report.positive = evaluator.positive().ok();
        report.answers = evaluator.answers().ok();
        if let Ok(positive) = evaluator.auditc_positive() {
            report.flags.insert("auditc_positive".to_string(), positive);
        }
        report
    }
}

/// Scores an AUDIT response set.
#[derive(Debug, Clone)]
pub struct AuditEvaluator {
    screening: Screening,
    subscale: AuditSubscale,
}

impl Evaluator for AuditEvaluator {
    fn screening(&self) -> &Screening {
        &self.screening
    }
}

impl AuditEvaluator {
    /// Evaluator for the full ten-item AUDIT.
    pub fn new<I, K>(raw: I, status: Status) -> Self
    where
        I: IntoIterator<Item = (K, Option<AnswerValue>)>,
        K: Into<AnswerKey>,
    {
        Self::with_subscale(raw, status, AuditSubscale::Full)
    }

    pub fn with_subscale<I, K>(raw: I, status: Status, subscale: AuditSubscale) -> Self
    where
        I: IntoIterator<Item = (K, Option<AnswerValue>)>,
        K: Into<AnswerKey>,
    {
        Self {
            screening: Screening::new(Audit.schema(), raw, status),
            subscale,
        }
    }

    pub fn subscale(&self) -> AuditSubscale {
        self.subscale
    }

    /// AUDIT-C screen over the three consumption items.
    pub fn auditc_positive(&self) -> Result<bool, InstrumentError> {
        let [q1, q2, q3] = self.screening.field_values(["q1", "q2", "q3"])?;
        Ok(q1 + q2 + q3 >= 3 && q2 + q3 > 0)
    }

    /// True when scoring is restricted to AUDIT-C and that screen is negative.
    fn gated(&self) -> Result<bool, InstrumentError> {
        match self.subscale {
            AuditSubscale::Full => Ok(false),
            AuditSubscale::AuditC => Ok(!self.auditc_positive()?),
        }
    }

    pub fn score(&self) -> Result<u32, InstrumentError> {
        Ok(self.answers()?.iter().sum())
    }

    /// Answers that contribute to the score, in question order.
    pub fn answers(&self) -> Result<Vec<u32>, InstrumentError> {
        let values = self.screening.ready_values(KEYS)?;
        if self.gated()? {
            let [q1, q2, ..] = values;
            return Ok(vec![q1, q2]);
        }
        Ok(values.to_vec())
    }

    pub fn acuity(&self) -> Result<&'static str, InstrumentError> {
        Ok(SEVERITY.classify(self.score()?).acuity)
    }

    pub fn severity_label(&self) -> Result<&'static str, InstrumentError> {
        Ok(SEVERITY.classify(self.score()?).label)
    }

    pub fn positive(&self) -> Result<bool, InstrumentError> {
        Ok(self.score()? >= 8)
    }
}
