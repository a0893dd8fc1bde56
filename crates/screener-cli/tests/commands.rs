use screener_cli::commands;
use screener_cli::config::{OutputFormat, ScreenerConfig};

const FINISHED_PHQ9: &str = r#"{
    "instrument": "phq9",
    "status": "finished",
    "responses": {
        "q1": 0, "q2": 1, "q3": 0, "q4": 1, "q5": 0,
        "q6": 0, "q7": 1, "q8": 0, "q9": 0, "q10": 0
    }
}"#;

#[test]
fn list_names_every_instrument() {
    let text = commands::list(OutputFormat::Text).unwrap();
    assert!(text.contains("PHQ-9"));
    assert!(text.contains("ASRS"));
    assert!(text.contains("AUDIT"));

    let json: serde_json::Value =
        serde_json::from_str(&commands::list(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["id"], "phq9");
}

#[test]
fn schema_is_json() {
    let json: serde_json::Value = serde_json::from_str(&commands::schema("asrs").unwrap()).unwrap();
    assert_eq!(json["permitted_keys"].as_array().unwrap().len(), 6);
    assert_eq!(json["rules"]["q1"][1]["kind"]["type"], "range");
    assert_eq!(json["rules"]["q1"][1]["kind"]["max"], 4);
}

#[test]
fn schema_for_unknown_instrument_fails() {
    assert!(commands::schema("gad7").is_err());
}

#[test]
fn score_as_json() {
    let output =
        commands::score(FINISHED_PHQ9, &ScreenerConfig::default(), OutputFormat::Json).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["score"], 3);
    assert_eq!(report["acuity"], "none");
    assert_eq!(report["severity_label"], "(minimal)");
    assert_eq!(report["positive"], false);
    assert_eq!(report["regime"], "final");
}

#[test]
fn score_as_text() {
    let output =
        commands::score(FINISHED_PHQ9, &ScreenerConfig::default(), OutputFormat::Text).unwrap();
    assert!(output.contains("- score: 3/27 (minimal)"));
}

#[test]
fn score_reports_validation_errors() {
    let input = r#"{ "instrument": "audit", "status": "started", "responses": { "q7": 5, "q11": 1 } }"#;
    let output = commands::score(input, &ScreenerConfig::default(), OutputFormat::Json).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"]["q7"][0], "is not included in the list");
    assert_eq!(report["errors"]["q11"][0], "invalid key");
    assert_eq!(report["score"], serde_json::Value::Null);
}

#[test]
fn score_rejects_unknown_instrument() {
    let input = r#"{ "instrument": "gad7", "status": "finished" }"#;
    let err = commands::score(input, &ScreenerConfig::default(), OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("unknown instrument: gad7"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    commands::config_init(&path, false).unwrap();
    assert!(path.exists());
    assert!(commands::config_init(&path, false).is_err());
    commands::config_init(&path, true).unwrap();
}

#[test]
fn config_show_is_json() {
    let output = commands::config_show(&ScreenerConfig::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["audit_subscale"], "full");
    assert_eq!(json["output"], "text");
}
