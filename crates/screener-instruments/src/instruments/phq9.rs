use screener_core::models::answer::{AnswerKey, AnswerValue};
use screener_core::models::report::ScreeningReport;
use screener_core::models::screening::ScreeningRequest;
use screener_core::models::status::Status;

use crate::error::InstrumentError;
use crate::report::base_report;
use crate::schema::ValidationSchema;
use crate::scoring::{count_where, Severity, SeverityBand, SeverityScale};
use crate::screening::{Evaluator, Screening};
use crate::{EvaluationOptions, Instrument};

const KEYS: [&str; 10] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"];
/// The nine symptom items; q10 (functional impact) is not part of the score.
const SYMPTOM_KEYS: [&str; 9] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9"];

const SEVERITY: SeverityScale = SeverityScale {
    bands: &[
        SeverityBand {
            upper: 5,
            severity: Severity {
                acuity: "none",
                label: "(minimal)",
            },
        },
        SeverityBand {
            upper: 10,
            severity: Severity {
                acuity: "mild",
                label: "(mild)",
            },
        },
        SeverityBand {
            upper: 15,
            severity: Severity {
                acuity: "moderate",
                label: "(moderate)",
            },
        },
        SeverityBand {
            upper: 20,
            severity: Severity {
                acuity: "moderately severe",
                label: "(moderately severe)",
            },
        },
    ],
    top: Severity {
        acuity: "severe",
        label: "(severe)",
    },
};

/// PHQ-9: Patient Health Questionnaire. Nine symptom items plus one
/// functional-impact item, each scored 0–3.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn abbreviation(&self) -> &str {
        "PHQ-9"
    }

    fn disorder_name(&self) -> &str {
        "Depression"
    }

    fn max_score(&self) -> u32 {
        27
    }

    fn schema(&self) -> &ValidationSchema {
        static SCHEMA: std::sync::LazyLock<ValidationSchema> =
            std::sync::LazyLock::new(|| ValidationSchema::likert(&KEYS, 3));
        &SCHEMA
    }

    fn report(&self, request: &ScreeningRequest, _options: &EvaluationOptions) -> ScreeningReport {
        let evaluator = Phq9Evaluator::new(request.responses.clone(), request.status);
        let mut report = base_report(self, request, evaluator.screening());

        report.score = evaluator.score().ok();
        report.acuity = evaluator.acuity().ok().map(str::to_string);
        report.severity_label = evaluator.severity_label().ok().map(str::to_string);
        report.positive = evaluator.positive().ok();
        report.answers = evaluator.answers().ok().map(Vec::from);

        let subscores = [
            ("suicidal_ideation_score", evaluator.suicidal_ideation_score()),
            ("phq2_score", evaluator.phq2_score()),
        ];
        for (name, value) in subscores {
            if let Ok(value) = value {
                report.subscores.insert(name.to_string(), value);
            }
        }

        let flags = [
            ("phq2_positive", evaluator.phq2_positive()),
            ("somewhat_depressed", evaluator.somewhat_depressed()),
            ("pretty_depressed", evaluator.pretty_depressed()),
            ("impacted", evaluator.impacted()),
            ("result", evaluator.result()),
            ("eligible_for_follow_up", evaluator.eligible_for_follow_up()),
        ];
        for (name, value) in flags {
            if let Ok(value) = value {
                report.flags.insert(name.to_string(), value);
            }
        }
        report
    }
}

/// Scores a PHQ-9 response set.
#[derive(Debug, Clone)]
pub struct Phq9Evaluator {
    screening: Screening,
}

impl Evaluator for Phq9Evaluator {
    fn screening(&self) -> &Screening {
        &self.screening
    }
}

impl Phq9Evaluator {
    pub fn new<I, K>(raw: I, status: Status) -> Self
    where
        I: IntoIterator<Item = (K, Option<AnswerValue>)>,
        K: Into<AnswerKey>,
    {
        Self {
            screening: Screening::new(Phq9.schema(), raw, status),
        }
    }

    /// Sum of the nine symptom items.
    pub fn score(&self) -> Result<u32, InstrumentError> {
        Ok(self.screening.ready_values(SYMPTOM_KEYS)?.iter().sum())
    }

    pub fn acuity(&self) -> Result<&'static str, InstrumentError> {
        Ok(SEVERITY.classify(self.score()?).acuity)
    }

    pub fn severity_label(&self) -> Result<&'static str, InstrumentError> {
        Ok(SEVERITY.classify(self.score()?).label)
    }

    pub fn positive(&self) -> Result<bool, InstrumentError> {
        Ok(self.score()? >= 5)
    }

    pub fn eligible_for_follow_up(&self) -> Result<bool, InstrumentError> {
        Ok(self.score()? >= 10)
    }

    /// All ten answers in question order.
    pub fn answers(&self) -> Result<[u32; 10], InstrumentError> {
        self.screening.ready_values(KEYS)
    }

    /// Raw value of q9 ("thoughts that you would be better off dead").
    pub fn suicidal_ideation_score(&self) -> Result<u32, InstrumentError> {
        let [q9] = self.screening.field_values(["q9"])?;
        Ok(q9)
    }

    /// PHQ-2 screen: the first two items.
    pub fn phq2_score(&self) -> Result<u32, InstrumentError> {
        let [q1, q2] = self.screening.field_values(["q1", "q2"])?;
        Ok(q1 + q2)
    }

    pub fn phq2_positive(&self) -> Result<bool, InstrumentError> {
        Ok(self.phq2_score()? >= 3)
    }

    /// Little interest or depressed mood on more than several days.
    pub fn somewhat_depressed(&self) -> Result<bool, InstrumentError> {
        let [q1, q2] = self.screening.field_values(["q1", "q2"])?;
        Ok(q1 > 1 || q2 > 1)
    }

    /// At least five symptoms present more than half the days, where any
    /// suicidal ideation counts once more.
    pub fn pretty_depressed(&self) -> Result<bool, InstrumentError> {
        let values = self.screening.ready_values(SYMPTOM_KEYS)?;
        let frequent = count_where(&values, |v| (2..=3).contains(&v));
        let [.., q9] = values;
        Ok(frequent + u32::from(q9 > 0) >= 5)
    }

    /// Symptoms made work, home or social life at least somewhat difficult.
    pub fn impacted(&self) -> Result<bool, InstrumentError> {
        let [q10] = self.screening.field_values(["q10"])?;
        Ok(q10 > 0)
    }

    pub fn result(&self) -> Result<bool, InstrumentError> {
        self.screening.ensure_ready()?;
        Ok(self.somewhat_depressed()? && self.pretty_depressed()? && self.impacted()?)
    }
}
