use jsondelta_core::{compute_delta, Delta};

/// Wrap JSON text as a present document
#[allow(dead_code)]
pub fn doc(text: &str) -> Option<&[u8]> {
    Some(text.as_bytes())
}

/// Compute a delta that is expected to succeed
#[allow(dead_code)]
pub fn delta_of(before: Option<&[u8]>, after: Option<&[u8]>) -> Delta {
    compute_delta(before, after).expect("delta computation should succeed")
}
