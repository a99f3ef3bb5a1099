//! JSON delta engine.
//!
//! Compares two JSON documents and produces a third JSON value describing how
//! the first became the second.
//!
//! ## Entry point
//!
//! ```
//! use jsondelta_core::diff::compute_delta;
//! use serde_json::json;
//!
//! let delta = compute_delta(Some(b"[1,2]".as_slice()), Some(b"[1,2,3.4]".as_slice())).unwrap();
//! assert_eq!(delta, Some(json!([null, null, 3.4])));
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: the engine holds no state between calls; results are freshly
//!   allocated and never alias the inputs' containers.
//! - **Determinism**: object keys are kept sorted, so identical inputs produce
//!   byte-identical encoded deltas.
//! - **NoDiff is not null**: "unchanged" is `None`, a JSON null is `Some(Value::Null)`.
//! - **Descriptive only**: a delta cannot be applied to rebuild the right-hand
//!   document. Removals are reported through the old value.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_delta, diff};
pub use human_summary::{render_human_summary, summarize};
pub use model::{Delta, DeltaEntry, DeltaSummary, Operand, ValueKind};
