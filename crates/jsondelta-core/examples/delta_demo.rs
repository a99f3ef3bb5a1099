//! Delta Demonstration
//!
//! Diffs two configuration snapshots and prints the delta and its summary.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Absent vs. present documents
//! 2. Slot-wise array deltas and key-wise object deltas
//! 3. Removals reported through their old value

use jsondelta_core::codec::{encode_delta, EncodeStyle};
use jsondelta_core::compute_delta;
use jsondelta_core::diff::render_human_summary;
use jsondelta_core::logging_facility::{init, Profile};

const BEFORE: &str = r#"{
  "service": "billing",
  "replicas": 2,
  "ports": [80, 443],
  "limits": {"cpu": "500m", "memory": "256Mi"},
  "debug": true
}"#;

const AFTER: &str = r#"{
  "service": "billing",
  "replicas": 3,
  "ports": [80, 443, 9090],
  "limits": {"cpu": "500m", "memory": "512Mi"},
  "debug": null
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== JSON Delta Demo ===\n");

    // ===== Part 1: Snapshot drift =====
    println!("## Part 1: Snapshot drift\n");
    let delta = compute_delta(Some(BEFORE.as_bytes()), Some(AFTER.as_bytes()))?;
    if let Some(text) = encode_delta(&delta, EncodeStyle::Pretty)? {
        println!("{}\n", text);
    }
    println!("{}", render_human_summary(&delta));

    // ===== Part 2: No previous snapshot =====
    println!("## Part 2: No previous snapshot\n");
    let first = compute_delta(None, Some(AFTER.as_bytes()))?;
    println!("{}\n", encode_delta(&first, EncodeStyle::Compact)?.unwrap_or_default());

    // ===== Part 3: Identical snapshots =====
    println!("## Part 3: Identical snapshots\n");
    let same = compute_delta(Some(BEFORE.as_bytes()), Some(BEFORE.as_bytes()))?;
    println!("changed: {}", same.is_some());

    Ok(())
}
