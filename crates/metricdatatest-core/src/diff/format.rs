//! Reason string rendering

use std::fmt::{Debug, Display, Write};

/// `"<field> not equal:\nexpected: <expected>\nactual: <actual>"`
pub fn not_equal_str(field: impl Display, expected: impl Display, actual: impl Display) -> String {
    format!(
        "{} not equal:\nexpected: {}\nactual: {}",
        field, expected, actual
    )
}

/// Render the leftovers of a multiset match
///
/// Empty when both sides are empty. Elements are rendered with their
/// structural `Debug` form, one per line.
pub fn compare_diff<T: Debug>(extra_expected: &[T], extra_actual: &[T]) -> String {
    let mut out = String::new();
    if !extra_expected.is_empty() {
        out.push_str("missing expected values:\n");
        for v in extra_expected {
            let _ = writeln!(out, "{:?}", v);
        }
    }
    if !extra_actual.is_empty() {
        out.push_str("unexpected additional values:\n");
        for v in extra_actual {
            let _ = writeln!(out, "{:?}", v);
        }
    }
    out
}

/// `"missing attribute <key>"`
pub fn missing_attr_str(key: impl Display) -> String {
    format!("missing attribute {}", key)
}
