use std::fs;

use suiteplot::{ConfigError, LabelSet, Policy, VisualizerConfig};

#[test]
fn empty_object_gives_defaults() {
    let cfg = VisualizerConfig::from_json_str("cfg.json", "{}").unwrap();
    assert_eq!(cfg, VisualizerConfig::default());
    assert_eq!(cfg.labels, LabelSet::alphabet());
    assert_eq!(cfg.policy, Policy::AllOrNothing);
    assert_eq!(cfg.window.title, "Graphical Summary of Test Suite");
}

#[test]
fn parses_all_fields() {
    let text = r#"{
        "labels": ["A", "B", "nightly"],
        "policy": "best_effort",
        "window": { "width": 800.0, "height": 600.0, "title": "Nightly" }
    }"#;
    let cfg = VisualizerConfig::from_json_str("cfg.json", text).unwrap();
    assert_eq!(cfg.labels, LabelSet::parse("A,B,nightly").unwrap());
    assert_eq!(cfg.policy, Policy::BestEffort);
    assert_eq!(cfg.window.width, 800.0);
    assert_eq!(cfg.window.height, 600.0);
    assert_eq!(cfg.window.title, "Nightly");
}

#[test]
fn partial_window_keeps_other_defaults() {
    let cfg = VisualizerConfig::from_json_str("cfg.json", r#"{"window":{"width":640}}"#).unwrap();
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.window.height, 900.0);
}

#[test]
fn bad_policy_is_parse_error() {
    let err = VisualizerConfig::from_json_str("cfg.json", r#"{"policy":"sometimes"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("suite.json");
    fs::write(&path, r#"{"labels":["Q"]}"#).unwrap();
    let cfg = VisualizerConfig::from_json_file(&path).unwrap();
    assert_eq!(cfg.labels.len(), 1);

    let err = VisualizerConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn duplicate_labels_are_parse_error() {
    let err = VisualizerConfig::from_json_str("cfg.json", r#"{"labels":["A","A"]}"#).unwrap_err();
    match err {
        ConfigError::Parse { source, .. } => assert!(source.to_string().contains("more than once")),
        other => panic!("unexpected error: {other}"),
    }
}
