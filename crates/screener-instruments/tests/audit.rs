use screener_core::models::answer::AnswerValue;
use screener_core::models::status::Status;
use screener_instruments::error::InstrumentError;
use screener_instruments::instruments::audit::{Audit, AuditEvaluator, AuditSubscale};
use screener_instruments::screening::Evaluator;
use screener_instruments::Instrument;

fn answers(values: [i64; 10]) -> Vec<(String, Option<AnswerValue>)> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (format!("q{}", i + 1), Some(AnswerValue::Integer(v))))
        .collect()
}

fn finished(values: [i64; 10]) -> AuditEvaluator {
    AuditEvaluator::new(answers(values), Status::Finished)
}

const LOW: [i64; 10] = [0, 1, 0, 1, 0, 0, 1, 0, 0, 0];
const HARMFUL: [i64; 10] = [2, 1, 0, 1, 2, 3, 1, 0, 0, 3];
const HIGH: [i64; 10] = [1, 4, 1, 1, 2, 2, 2, 1, 0, 3];
const DEPENDENT: [i64; 10] = [3, 4, 1, 3, 2, 4, 2, 1, 0, 3];

#[test]
fn constants() {
    assert_eq!(Audit.abbreviation(), "AUDIT");
    assert_eq!(Audit.disorder_name(), "Alcohol Use Disorder");
    assert_eq!(Audit.max_score(), 40);
}

#[test]
fn low_risk_response_set() {
    let audit = finished(LOW);
    assert_eq!(audit.score().unwrap(), 3);
    assert_eq!(audit.acuity().unwrap(), "none");
    assert!(!audit.positive().unwrap());
    assert!(!audit.auditc_positive().unwrap());
    assert_eq!(audit.answers().unwrap(), vec![0, 1, 0, 1, 0, 0, 1, 0, 0, 0]);
}

#[test]
fn harmful_response_set() {
    let audit = finished(HARMFUL);
    assert_eq!(audit.score().unwrap(), 13);
    assert!(audit.positive().unwrap());
    assert!(audit.auditc_positive().unwrap());
    assert_eq!(audit.acuity().unwrap(), "hazardous/harmful alcohol consumption");
}

#[test]
fn high_problem_response_set() {
    let audit = finished(HIGH);
    assert_eq!(audit.score().unwrap(), 17);
    assert!(audit.positive().unwrap());
    assert_eq!(audit.acuity().unwrap(), "high level of alcohol problems");
}

#[test]
fn dependence_response_set() {
    let audit = finished(DEPENDENT);
    assert_eq!(audit.score().unwrap(), 23);
    assert_eq!(audit.acuity().unwrap(), "probable alcohol dependence");
    assert_eq!(audit.severity_label().unwrap(), "(probable dependence)");
}

#[test]
fn positive_threshold_is_eight() {
    let audit = finished([4, 3, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(audit.score().unwrap(), 7);
    assert!(!audit.positive().unwrap());

    let audit = finished([4, 4, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(audit.score().unwrap(), 8);
    assert!(audit.positive().unwrap());
    assert_eq!(audit.acuity().unwrap(), "hazardous/harmful alcohol consumption");
}

#[test]
fn full_subscale_is_the_default() {
    assert_eq!(finished(LOW).subscale(), AuditSubscale::Full);
}

#[test]
fn auditc_negative_falls_back_to_first_two_items() {
    let audit = AuditEvaluator::with_subscale(answers(LOW), Status::Finished, AuditSubscale::AuditC);
    assert_eq!(audit.score().unwrap(), 1);
    assert_eq!(audit.answers().unwrap(), vec![0, 1]);
}

#[test]
fn auditc_positive_keeps_full_score() {
    let audit =
        AuditEvaluator::with_subscale(answers(HARMFUL), Status::Finished, AuditSubscale::AuditC);
    assert_eq!(audit.score().unwrap(), 13);
    assert_eq!(audit.answers().unwrap().len(), 10);
}

#[test]
fn auditc_needs_more_than_frequency() {
    // q1 alone reaching 3 is not enough without any quantity or binge answer.
    let audit = finished([3, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert!(!audit.auditc_positive().unwrap());
}

#[test]
fn auditc_positive_reads_partial_answers() {
    let audit = AuditEvaluator::new(
        [
            ("q1", Some(AnswerValue::Integer(2))),
            ("q2", Some(AnswerValue::Integer(1))),
            ("q3", Some(AnswerValue::Integer(0))),
        ],
        Status::Started,
    );
    assert!(audit.auditc_positive().unwrap());
    assert!(audit.score().unwrap_err().is_not_ready());
}

#[test]
fn value_outside_range_is_reported() {
    let audit = AuditEvaluator::new(
        [
            ("q1", Some(AnswerValue::Integer(2))),
            ("q7", Some(AnswerValue::Integer(5))),
        ],
        Status::Started,
    );
    assert_eq!(audit.errors().get("q7").unwrap(), ["is not included in the list"]);
}

#[test]
fn disallowed_key_is_reported() {
    let mut raw = answers(HARMFUL);
    raw.push(("q11".to_string(), Some(AnswerValue::Integer(2))));
    let audit = AuditEvaluator::new(raw, Status::Started);
    assert!(!audit.is_valid());
    assert_eq!(audit.errors().get("q11").unwrap(), ["invalid key"]);
}

#[test]
fn scoring_in_progress_is_not_ready() {
    let audit = AuditEvaluator::new(answers(LOW), Status::Started);
    assert!(audit.is_valid());
    for err in [
        audit.score().unwrap_err(),
        audit.positive().unwrap_err(),
        audit.acuity().unwrap_err(),
    ] {
        assert!(matches!(err, InstrumentError::NotReady { .. }));
    }
}

#[test]
fn empty_set_is_valid_until_finished() {
    let none = Vec::<(String, Option<AnswerValue>)>::new();
    assert!(AuditEvaluator::new(none.clone(), Status::Requested).is_valid());
    assert!(AuditEvaluator::new(none.clone(), Status::Started).is_valid());

    let audit = AuditEvaluator::new(none, Status::Finished);
    assert_eq!(audit.errors().len(), 10);
    assert_eq!(audit.errors().get("q1").unwrap(), ["can't be blank"]);
}

/// Answers totalling `score`, filling items up to 4 in question order.
fn scoring(score: i64) -> [i64; 10] {
    let mut values = [0; 10];
    let mut remaining = score;
    for value in &mut values {
        *value = remaining.min(4);
        remaining -= *value;
    }
    values
}

#[test]
fn acuity_boundaries() {
    let cases = [
        (7, "none", "(low risk)"),
        (8, "hazardous/harmful alcohol consumption", "(hazardous or harmful)"),
        (15, "hazardous/harmful alcohol consumption", "(hazardous or harmful)"),
        (16, "high level of alcohol problems", "(high level of problems)"),
        (19, "high level of alcohol problems", "(high level of problems)"),
        (20, "probable alcohol dependence", "(probable dependence)"),
        (40, "probable alcohol dependence", "(probable dependence)"),
    ];
    for (score, acuity, label) in cases {
        let audit = finished(scoring(score));
        assert_eq!(audit.score().unwrap(), score as u32);
        assert_eq!(audit.acuity().unwrap(), acuity, "score {score}");
        assert_eq!(audit.severity_label().unwrap(), label, "score {score}");
    }
}
