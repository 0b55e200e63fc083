//! Tests for one-shot command output

use spesa::output::{ListReport, OutputMode, render_summary};

use crate::common::sample_store;

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_list_report_json() {
    let store = sample_store();
    let report = ListReport::new(store.items());
    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputMode::Json, "€").unwrap()).unwrap();

    assert_eq!(json["items"][0]["position"], 1);
    assert_eq!(json["items"][0]["name"], "Pane");
    assert_eq!(json["items"][0]["category"], "Alimentari");
    assert_eq!(json["items"][0]["quantity"], 2);
    assert_eq!(json["items"][0]["purchased"], false);
    assert_eq!(json["items"][1]["name"], "Latte");
    assert_eq!(json["summary"]["count"], 2);
}

#[test]
fn test_list_report_human() {
    let store = sample_store();
    let text = ListReport::new(store.items()).render(OutputMode::Human, "€").unwrap();

    assert!(text.contains("[ ] 2. Latte - Alimentari"));
    assert!(text.contains("Spesa totale: €4.20"));
}

#[test]
fn test_summary_json_fields() {
    let summary = sample_store().summary();
    let json: serde_json::Value =
        serde_json::from_str(&render_summary(&summary, OutputMode::Json, "€").unwrap()).unwrap();

    assert_eq!(json["count"], 2);
    assert_eq!(json["purchased_count"], 0);
    assert_eq!(json["unpurchased_count"], 2);
    assert!(json["total_value"].as_f64().is_some());
}

#[test]
fn test_summary_human_of_empty_list() {
    let summary = spesa::ItemStore::new().summary();
    let text = render_summary(&summary, OutputMode::Human, "€").unwrap();
    assert!(text.contains("La lista è vuota"));
}
