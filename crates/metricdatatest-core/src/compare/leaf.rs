//! Data point level comparators
//!
//! Every function returns one reason per differing field, in field order.
//! Mismatches accumulate; nothing short-circuits.

use chrono::{DateTime, Utc};
use metricdatatest_core_types::{
    DataPoint, DefaultEncoder, Exemplar, ExponentialBucket, ExponentialHistogramDataPoint,
    Extrema, HistogramDataPoint, KeyValue, Number, Set, Value,
};

use super::multiset_reason;
use crate::config::Config;
use crate::diff::{equal_slices, not_equal_str};
use crate::errors::ExErrorKind;

/// Nanoseconds since the Unix epoch, as shown in timestamp reasons
pub(crate) fn unix_nano(t: &DateTime<Utc>) -> i64 {
    t.timestamp_nanos_opt().unwrap_or_default()
}

fn equal_attribute_sets(a: &Set, b: &Set, reasons: &mut Vec<String>) {
    if !a.equals(b) {
        reasons.push(not_equal_str(
            "Attributes",
            a.encoded(&DefaultEncoder),
            b.encoded(&DefaultEncoder),
        ));
    }
}

fn equal_times(
    start: (&DateTime<Utc>, &DateTime<Utc>),
    time: (&DateTime<Utc>, &DateTime<Utc>),
    reasons: &mut Vec<String>,
) {
    if start.0 != start.1 {
        reasons.push(not_equal_str(
            "StartTime",
            unix_nano(start.0),
            unix_nano(start.1),
        ));
    }
    if time.0 != time.1 {
        reasons.push(not_equal_str("Time", unix_nano(time.0), unix_nano(time.1)));
    }
}

fn equal_exemplar_lists<N: Number>(
    a: &[Exemplar<N>],
    b: &[Exemplar<N>],
    cfg: Config,
    reasons: &mut Vec<String>,
) {
    let found = multiset_reason("Exemplars not equal", a, b, |x, y| {
        equal_exemplars(x, y, cfg).is_empty()
    });
    reasons.extend(found);
}

fn equal_numbers<N: Number>(field: &str, a: N, b: N, reasons: &mut Vec<String>) {
    if a != b {
        reasons.push(not_equal_str(field, a, b));
    }
}

/// Compare two scalar data points
pub fn equal_data_points<N: Number>(a: &DataPoint<N>, b: &DataPoint<N>, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    equal_attribute_sets(&a.attributes, &b.attributes, &mut reasons);

    if !cfg.ignore_timestamp() {
        equal_times(
            (&a.start_time, &b.start_time),
            (&a.time, &b.time),
            &mut reasons,
        );
    }

    if !cfg.ignore_value() {
        equal_numbers("Value", a.value, b.value, &mut reasons);
    }

    if !cfg.ignore_exemplars() {
        equal_exemplar_lists(&a.exemplars, &b.exemplars, cfg, &mut reasons);
    }
    reasons
}

/// Compare two explicit-bucket histogram points
///
/// Count, bounds, bucket counts, extrema and sum are all part of the value
/// and are skipped together when values are ignored.
pub fn equal_histogram_data_points<N: Number>(
    a: &HistogramDataPoint<N>,
    b: &HistogramDataPoint<N>,
    cfg: Config,
) -> Vec<String> {
    let mut reasons = Vec::new();
    equal_attribute_sets(&a.attributes, &b.attributes, &mut reasons);

    if !cfg.ignore_timestamp() {
        equal_times(
            (&a.start_time, &b.start_time),
            (&a.time, &b.time),
            &mut reasons,
        );
    }

    if !cfg.ignore_value() {
        if a.count != b.count {
            reasons.push(not_equal_str("Count", a.count, b.count));
        }
        if !equal_slices(&a.bounds, &b.bounds) {
            reasons.push(not_equal_str(
                "Bounds",
                format!("{:?}", a.bounds),
                format!("{:?}", b.bounds),
            ));
        }
        if !equal_slices(&a.bucket_counts, &b.bucket_counts) {
            reasons.push(not_equal_str(
                "BucketCounts",
                format!("{:?}", a.bucket_counts),
                format!("{:?}", b.bucket_counts),
            ));
        }
        if !eq_extrema(&a.min, &b.min) {
            reasons.push(not_equal_str("Min", a.min, b.min));
        }
        if !eq_extrema(&a.max, &b.max) {
            reasons.push(not_equal_str("Max", a.max, b.max));
        }
        equal_numbers("Sum", a.sum, b.sum, &mut reasons);
    }

    if !cfg.ignore_exemplars() {
        equal_exemplar_lists(&a.exemplars, &b.exemplars, cfg, &mut reasons);
    }
    reasons
}

/// Compare two exponential histogram points
///
/// Scale, zero count and both bucket runs are compared with the value
/// fields and skipped when values are ignored.
pub fn equal_exponential_histogram_data_points<N: Number>(
    a: &ExponentialHistogramDataPoint<N>,
    b: &ExponentialHistogramDataPoint<N>,
    cfg: Config,
) -> Vec<String> {
    let mut reasons = Vec::new();
    equal_attribute_sets(&a.attributes, &b.attributes, &mut reasons);

    if !cfg.ignore_timestamp() {
        equal_times(
            (&a.start_time, &b.start_time),
            (&a.time, &b.time),
            &mut reasons,
        );
    }

    if !cfg.ignore_value() {
        if a.count != b.count {
            reasons.push(not_equal_str("Count", a.count, b.count));
        }
        if !eq_extrema(&a.min, &b.min) {
            reasons.push(not_equal_str("Min", a.min, b.min));
        }
        if !eq_extrema(&a.max, &b.max) {
            reasons.push(not_equal_str("Max", a.max, b.max));
        }
        equal_numbers("Sum", a.sum, b.sum, &mut reasons);

        if a.scale != b.scale {
            reasons.push(not_equal_str("Scale", a.scale, b.scale));
        }
        if a.zero_count != b.zero_count {
            reasons.push(not_equal_str("ZeroCount", a.zero_count, b.zero_count));
        }

        reasons.extend(equal_exponential_buckets(
            &a.positive_bucket,
            &b.positive_bucket,
            cfg,
        ));
        reasons.extend(equal_exponential_buckets(
            &a.negative_bucket,
            &b.negative_bucket,
            cfg,
        ));
    }

    if !cfg.ignore_exemplars() {
        equal_exemplar_lists(&a.exemplars, &b.exemplars, cfg, &mut reasons);
    }
    reasons
}

/// Compare two bucket runs: offset and ordered counts
///
/// The policy does not apply at this level; callers decide whether buckets
/// are compared at all.
pub fn equal_exponential_buckets(
    a: &ExponentialBucket,
    b: &ExponentialBucket,
    _cfg: Config,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if a.offset != b.offset {
        reasons.push(not_equal_str("Offset", a.offset, b.offset));
    }
    if !equal_slices(&a.counts, &b.counts) {
        reasons.push(not_equal_str(
            "Counts",
            format!("{:?}", a.counts),
            format!("{:?}", b.counts),
        ));
    }
    reasons
}

/// Compare two extrema as a standalone value
pub fn equal_extrema<N: Number>(a: &Extrema<N>, b: &Extrema<N>, _cfg: Config) -> Vec<String> {
    if eq_extrema(a, b) {
        Vec::new()
    } else {
        vec![not_equal_str("Extrema", a, b)]
    }
}

/// Unset equals unset; set equals set with the same value
pub fn eq_extrema<N: Number>(a: &Extrema<N>, b: &Extrema<N>) -> bool {
    match (a.value(), b.value()) {
        (Some(x), Some(y)) => x == y,
        (x, y) => x.is_none() && y.is_none(),
    }
}

/// Compare two exemplars
///
/// Span and trace ids are identity and always compared.
pub fn equal_exemplars<N: Number>(a: &Exemplar<N>, b: &Exemplar<N>, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    if !equal_key_values(&a.filtered_attributes, &b.filtered_attributes) {
        reasons.push(not_equal_str(
            "FilteredAttributes",
            format!("{:?}", a.filtered_attributes),
            format!("{:?}", b.filtered_attributes),
        ));
    }

    if !cfg.ignore_timestamp() && a.time != b.time {
        reasons.push(not_equal_str("Time", unix_nano(&a.time), unix_nano(&b.time)));
    }

    if !cfg.ignore_value() {
        equal_numbers("Value", a.value, b.value, &mut reasons);
    }

    if a.span_id != b.span_id {
        reasons.push(not_equal_str("SpanID", a.span_id, b.span_id));
    }
    if a.trace_id != b.trace_id {
        reasons.push(not_equal_str("TraceID", a.trace_id, b.trace_id));
    }
    reasons
}

/// Ordered equality of two key/value lists
///
/// Same length, and per position the same key, the same type tag and the
/// same value.
///
/// # Panics
///
/// Panics when a value kind outside the known attribute kinds is reached.
pub fn equal_key_values(a: &[KeyValue], b: &[KeyValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (x, y) in a.iter().zip(b) {
        if x.key != y.key {
            return false;
        }
        if x.value.value_type() != y.value.value_type() {
            return false;
        }
        let same = match (&x.value, &y.value) {
            (Value::Bool(p), Value::Bool(q)) => p == q,
            (Value::Int64(p), Value::Int64(q)) => p == q,
            (Value::Float64(p), Value::Float64(q)) => p == q,
            (Value::String(p), Value::String(q)) => p == q,
            (Value::BoolSlice(p), Value::BoolSlice(q)) => equal_slices(p, q),
            (Value::Int64Slice(p), Value::Int64Slice(q)) => equal_slices(p, q),
            (Value::Float64Slice(p), Value::Float64Slice(q)) => equal_slices(p, q),
            (Value::StringSlice(p), Value::StringSlice(q)) => equal_slices(p, q),
            (other, _) => panic!(
                "[{}] unknown attribute value type: {}",
                ExErrorKind::InvariantViolation.code(),
                other.value_type()
            ),
        };
        if !same {
            return false;
        }
    }
    true
}
