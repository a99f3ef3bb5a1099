#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{delta_of, doc};
use jsondelta_core::diff::{render_human_summary, summarize, DeltaEntry, DeltaSummary};
use serde_json::json;

#[test]
fn test_summary_lists_changed_leaves() {
    let delta = delta_of(
        doc(r#"{"db":{"host":"a","port":5432},"tags":["x","y"]}"#),
        doc(r#"{"db":{"host":"b","port":5432},"tags":["x","z","w"]}"#),
    );
    let summary = summarize(&delta);
    assert!(summary.changed);

    let paths: Vec<&str> = summary.entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["/db/host", "/tags/1", "/tags/2"]);
}

#[test]
fn test_summary_serializes_for_audit_records() {
    let summary = summarize(&delta_of(doc("1"), doc("2")));
    let encoded = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        encoded,
        json!({"changed": true, "entries": [{"path": "", "value": 2.0}]})
    );
    let decoded: DeltaSummary = serde_json::from_value(encoded).unwrap();
    assert_eq!(
        decoded.entries,
        vec![DeltaEntry {
            path: String::new(),
            value: json!(2.0),
        }]
    );
}

#[test]
fn test_render_no_changes() {
    let rendered = render_human_summary(&delta_of(doc("[1]"), doc("[1]")));
    assert!(rendered.starts_with("## JSON Delta"));
    assert!(rendered.contains("_No changes detected._"));
}

#[test]
fn test_render_lists_each_path() {
    let rendered = render_human_summary(&delta_of(
        doc(r#"{"a":1,"b":{"c":1}}"#),
        doc(r#"{"a":1,"b":{"c":1,"d":2}}"#),
    ));
    assert!(rendered.contains("**Changed paths**: 1"));
    assert!(rendered.contains("- `/b/d` → `2.0`"));
}

#[test]
fn test_render_root_replacement() {
    let rendered = render_human_summary(&delta_of(doc("1"), doc("true")));
    assert!(rendered.contains("- `/` → `true`"));
}
