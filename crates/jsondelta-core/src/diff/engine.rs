//! Structural delta computation engine.
//!
//! The entry point is [`compute_delta`], which accepts optional raw document
//! bytes for both sides and produces a [`Delta`]. [`diff`] is the recursive
//! comparison over already-decoded values.
//!
//! Removals are reported through the *old* value: a key missing from the
//! right-hand object, a trailing array element only the left-hand array has,
//! and a value that became `null` all appear in the delta as their left-hand
//! value.

use crate::codec::resolve;
use crate::diff::model::{Delta, Operand, ValueKind};
use crate::errors::{DeltaError, ExError, Result};
use serde_json::{Map, Number, Value};
use std::time::Instant;

/// Compute the delta between two optional JSON documents.
///
/// | before  | after   | result                         |
/// |---------|---------|--------------------------------|
/// | absent  | absent  | NoDiff                         |
/// | absent  | present | decoded `after`, in full       |
/// | present | absent  | decoded `before`, in full      |
/// | present | present | [`diff`] of the decoded values |
///
/// When both documents are present, `before` is decoded and checked first.
///
/// # Errors
///
/// - `Decode` — a present document is empty or not valid JSON
/// - `UnsupportedType` — the engine met a value pair with no comparison rule
pub fn compute_delta(
    before: Option<&[u8]>,
    after: Option<&[u8]>,
) -> std::result::Result<Delta, ExError> {
    let start = Instant::now();
    crate::log_op_start!(
        "compute_delta",
        before_present = before.is_some(),
        after_present = after.is_some()
    );

    match resolve_and_diff(before, after) {
        Ok(delta) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            crate::log_op_end!(
                "compute_delta",
                duration_ms = duration_ms,
                changed = delta.is_some()
            );
            Ok(delta)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let err = ExError::from(e).with_op("compute_delta");
            crate::log_op_error!("compute_delta", err.clone(), duration_ms = duration_ms);
            Err(err)
        }
    }
}

fn resolve_and_diff(before: Option<&[u8]>, after: Option<&[u8]>) -> Result<Delta> {
    match (before, after) {
        (None, None) => Ok(None),
        (None, Some(_)) => resolve(after, Operand::After),
        (Some(_), None) => resolve(before, Operand::Before),
        (Some(_), Some(_)) => {
            let left = resolve(before, Operand::Before)?;
            let right = resolve(after, Operand::After)?;
            diff(left.as_ref(), right.as_ref())
        }
    }
}

/// Compare two decoded values.
///
/// An absent operand compares exactly like JSON `null`. Rules, first match wins:
///
/// 1. both null: NoDiff
/// 2. left null: the right value
/// 3. right null: the **left** value
/// 4. different kinds: the right value
/// 5. equal scalars: NoDiff, otherwise the right value
/// 6. arrays: slot-wise delta, `null` marking unchanged slots
/// 7. objects: key-wise delta, unchanged keys omitted
///
/// # Errors
///
/// - `DeltaError::UnsupportedType` — a same-kind pair with no comparison rule
pub fn diff(a: Option<&Value>, b: Option<&Value>) -> Result<Delta> {
    diff_values(a.unwrap_or(&Value::Null), b.unwrap_or(&Value::Null))
}

fn diff_values(a: &Value, b: &Value) -> Result<Delta> {
    match (a, b) {
        (Value::Null, Value::Null) => return Ok(None),
        (Value::Null, _) => return Ok(Some(b.clone())),
        (_, Value::Null) => return Ok(Some(a.clone())),
        _ => {}
    }

    let (left, right) = (ValueKind::of(a), ValueKind::of(b));
    if left != right {
        return Ok(Some(b.clone()));
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => Ok(replaced_unless(x == y, b)),
        (Value::Number(x), Value::Number(y)) => Ok(replaced_unless(numbers_equal(x, y), b)),
        (Value::String(x), Value::String(y)) => Ok(replaced_unless(x == y, b)),
        (Value::Array(x), Value::Array(y)) => diff_arrays(x, y),
        (Value::Object(x), Value::Object(y)) => diff_objects(x, y),
        _ => Err(DeltaError::UnsupportedType { left, right }),
    }
}

fn replaced_unless(equal: bool, b: &Value) -> Delta {
    if equal {
        None
    } else {
        Some(b.clone())
    }
}

// Exact double comparison, no epsilon.
fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => x == y,
    }
}

/// Slot-wise array delta.
///
/// The result has `max(len(a), len(b))` slots. Shared positions hold the
/// recursive delta, with `null` marking "unchanged here". The longer side's
/// tail is copied verbatim. If every slot is `null` the arrays are reported
/// as unchanged.
fn diff_arrays(a: &[Value], b: &[Value]) -> Result<Delta> {
    let mut slots = Vec::with_capacity(a.len().max(b.len()));
    for (left, right) in a.iter().zip(b) {
        slots.push(diff_values(left, right)?.unwrap_or(Value::Null));
    }

    let tail = if a.len() > b.len() {
        &a[b.len()..]
    } else {
        &b[a.len()..]
    };
    slots.extend(tail.iter().cloned());

    if slots.iter().all(Value::is_null) {
        return Ok(None);
    }
    Ok(Some(Value::Array(slots)))
}

/// Key-wise object delta.
///
/// Unchanged keys are omitted. Removed keys carry their left-hand value and
/// added keys their right-hand value. An empty result is NoDiff.
fn diff_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> Result<Delta> {
    let mut changes = Map::new();

    for (key, left) in a {
        match b.get(key) {
            None => {
                changes.insert(key.clone(), left.clone());
            }
            Some(right) => {
                if let Some(change) = diff_values(left, right)? {
                    changes.insert(key.clone(), change);
                }
            }
        }
    }

    for (key, right) in b {
        if !a.contains_key(key) {
            changes.insert(key.clone(), right.clone());
        }
    }

    if changes.is_empty() {
        return Ok(None);
    }
    Ok(Some(Value::Object(changes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn d(a: Value, b: Value) -> Delta {
        diff(Some(&a), Some(&b)).unwrap()
    }

    #[test]
    fn test_null_rules() {
        assert_eq!(d(json!(null), json!(null)), None);
        assert_eq!(d(json!(null), json!("x")), Some(json!("x")));
        assert_eq!(d(json!("x"), json!(null)), Some(json!("x")));
    }

    #[test]
    fn test_absent_operand_behaves_like_null() {
        assert_eq!(diff(None, None).unwrap(), None);
        assert_eq!(diff(None, Some(&json!(null))).unwrap(), None);
        assert_eq!(diff(None, Some(&json!(3.0))).unwrap(), Some(json!(3.0)));
        assert_eq!(diff(Some(&json!(3.0)), None).unwrap(), Some(json!(3.0)));
    }

    #[test]
    fn test_kind_change_is_full_replacement() {
        assert_eq!(d(json!({"a": 1.0}), json!([1.0])), Some(json!([1.0])));
        assert_eq!(d(json!(1.0), json!("1")), Some(json!("1")));
    }

    #[test]
    fn test_integer_and_double_compare_equal() {
        assert_eq!(d(json!(1), json!(1.0)), None);
        assert_eq!(d(json!(0.0), json!(-0.0)), None);
    }

    #[test]
    fn test_array_all_null_tail_collapses() {
        assert_eq!(d(json!([null]), json!([])), None);
    }

    #[test]
    fn test_empty_containers_are_unchanged() {
        assert_eq!(d(json!([]), json!([])), None);
        assert_eq!(d(json!({}), json!({})), None);
    }

    #[test]
    fn test_right_tail_starts_at_shared_length() {
        assert_eq!(d(json!([]), json!([1.0, 2.0])), Some(json!([1.0, 2.0])));
    }
}
