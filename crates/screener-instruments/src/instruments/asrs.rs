use screener_core::models::answer::{AnswerKey, AnswerValue};
use screener_core::models::report::ScreeningReport;
use screener_core::models::screening::ScreeningRequest;
use screener_core::models::status::Status;

use crate::error::InstrumentError;
use crate::report::base_report;
use crate::schema::ValidationSchema;
use crate::scoring::count_where;
use crate::screening::{Evaluator, Screening};
use crate::{EvaluationOptions, Instrument};

const KEYS: [&str; 6] = ["q1", "q2", "q3", "q4", "q5", "q6"];

/// ASRS v1.1 Part A: Adult ADHD Self-Report Scale screener.
/// Six items scored 0–4 (never … very often).
pub struct Asrs;

impl Instrument for Asrs {
    fn id(&self) -> &str {
        "asrs"
    }

    fn abbreviation(&self) -> &str {
        "ASRS"
    }

    fn disorder_name(&self) -> &str {
        "Adult ADHD"
    }

    fn max_score(&self) -> u32 {
        24
    }

    fn schema(&self) -> &ValidationSchema {
        static SCHEMA: std::sync::LazyLock<ValidationSchema> =
            std::sync::LazyLock::new(|| ValidationSchema::likert(&KEYS, 4));
        &SCHEMA
    }

    fn report(&self, request: &ScreeningRequest, _options: &EvaluationOptions) -> ScreeningReport {
        let evaluator = AsrsEvaluator::new(request.responses.clone(), request.status);
        let mut report = base_report(self, request, evaluator.screening());
        report.positive = evaluator.positive().ok();
        report.answers = evaluator.answers().ok().map(Vec::from);
        if let Ok(result) = evaluator.result() {
            report.flags.insert("result".to_string(), result);
        }
        report
    }
}

/// Scores an ASRS response set.
#[derive(Debug, Clone)]
pub struct AsrsEvaluator {
    screening: Screening,
}

impl Evaluator for AsrsEvaluator {
    fn screening(&self) -> &Screening {
        &self.screening
    }
}

impl AsrsEvaluator {
    pub fn new<I, K>(raw: I, status: Status) -> Self
    where
        I: IntoIterator<Item = (K, Option<AnswerValue>)>,
        K: Into<AnswerKey>,
    {
        Self {
            screening: Screening::new(Asrs.schema(), raw, status),
        }
    }

    /// Four or more answers in the shaded region of the form.
    ///
    /// The second group reads q5 twice and never reads q4.
    // TODO: confirm with the clinical owners whether [q4, q5, q6] was meant.
    pub fn result(&self) -> Result<bool, InstrumentError> {
        let [q1, q2, q3, _q4, q5, q6] = self.screening.ready_values(KEYS)?;
        let inattentive = count_where(&[q1, q2, q3], |v| v > 1);
        let hyperactive = count_where(&[q5, q5, q6], |v| v > 2);
        Ok(inattentive + hyperactive >= 4)
    }

    pub fn positive(&self) -> Result<bool, InstrumentError> {
        self.result()
    }

    pub fn answers(&self) -> Result<[u32; 6], InstrumentError> {
        self.screening.ready_values(KEYS)
    }
}
