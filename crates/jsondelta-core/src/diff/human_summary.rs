//! Flattened and human-readable views of a delta.

use crate::diff::model::{Delta, DeltaEntry, DeltaSummary};
use serde_json::Value;

/// Flatten a delta into JSON Pointer addressed leaves.
///
/// Object members are descended into. Array slots are descended into except
/// `null` placeholders, which mark unchanged positions. Scalars, `null` object
/// members and empty containers are leaves.
pub fn summarize(delta: &Delta) -> DeltaSummary {
    let mut entries = Vec::new();
    if let Some(value) = delta {
        collect_entries(value, &mut String::new(), &mut entries);
    }
    DeltaSummary {
        changed: delta.is_some(),
        entries,
    }
}

fn collect_entries(value: &Value, path: &mut String, out: &mut Vec<DeltaEntry>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, member) in map {
                let len = path.len();
                push_segment(path, key);
                collect_entries(member, path, out);
                path.truncate(len);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                if item.is_null() {
                    continue;
                }
                let len = path.len();
                push_segment(path, &index.to_string());
                collect_entries(item, path, out);
                path.truncate(len);
            }
        }
        leaf => out.push(DeltaEntry {
            path: path.clone(),
            value: leaf.clone(),
        }),
    }
}

// RFC 6901 escaping
fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    for ch in segment.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            other => path.push(other),
        }
    }
}

/// Render a Markdown summary of a delta.
///
/// Intended for audit logs and review displays. It is informational only
/// and cannot be parsed back into a delta.
pub fn render_human_summary(delta: &Delta) -> String {
    let mut out = String::new();

    out.push_str("## JSON Delta\n\n");

    let summary = summarize(delta);
    if !summary.changed {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str(&format!("**Changed paths**: {}\n\n", summary.entries.len()));
    for entry in &summary.entries {
        let path = if entry.path.is_empty() {
            "/"
        } else {
            entry.path.as_str()
        };
        out.push_str(&format!("- `{}` → `{}`\n", path, entry.value));
    }

    out
}
