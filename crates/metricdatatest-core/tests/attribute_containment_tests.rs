#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use metricdatatest_core::{assert_has_attributes, check_has_attributes, ComparisonError, Datatype};
use metricdatatest_core_types::{Aggregation, KeyValue};

#[test]
fn test_value_mismatch_reason() {
    let dp = data_point("POST", 1i64);
    let err = check_has_attributes(&dp, &[KeyValue::string("method", "GET")]).unwrap_err();

    assert!(matches!(err, ComparisonError::MissingAttributes { .. }));
    assert_eq!(err.reasons(), ["method not equal:\nexpected: GET\nactual: POST"]);
}

#[test]
fn test_missing_key_reason() {
    let dp = data_point("GET", 1.0f64);
    let err = check_has_attributes(&dp, &[KeyValue::string("region", "us")]).unwrap_err();
    assert_eq!(err.reasons(), ["missing attribute region"]);
}

#[test]
fn test_every_key_checked() {
    let dp = data_point("GET", 1i64);
    let reasons = dp.has_attributes(&[
        KeyValue::string("region", "us"),
        KeyValue::string("method", "GET"),
        KeyValue::int64("code", 200),
    ]);
    assert_eq!(
        reasons,
        vec!["missing attribute region", "missing attribute code"]
    );
}

#[test]
fn test_typed_values_compared_by_kind() {
    let dp = metricdatatest_core_types::DataPoint::new(vec![KeyValue::int64("code", 200)], 1i64);
    let reasons = dp.has_attributes(&[KeyValue::string("code", "200")]);
    assert_eq!(reasons, vec!["code not equal:\nexpected: 200\nactual: 200"]);
}

#[test]
fn test_histogram_prefixes_point_index() {
    let h = histogram_i64();
    let reasons = h.has_attributes(&[KeyValue::string("method", "GET")]);
    assert_eq!(
        reasons,
        vec![
            "histogram datapoint 1 attributes:\n",
            "method not equal:\nexpected: GET\nactual: POST",
        ]
    );
}

#[test]
fn test_exponential_histogram_uses_histogram_prefix() {
    let h = exponential_histogram_f64();
    let reasons = h.has_attributes(&[KeyValue::bool("sampled", true)]);
    assert_eq!(
        reasons,
        vec![
            "histogram datapoint 0 attributes:\n",
            "missing attribute sampled",
        ]
    );
}

#[test]
fn test_sum_prefix() {
    let s = sum_i64(&[1, 2]);
    let reasons = s.has_attributes(&[KeyValue::string("method", "PUT")]);
    assert_eq!(reasons.len(), 4);
    assert_eq!(reasons[0], "sum datapoint 0 attributes:\n");
    assert_eq!(reasons[2], "sum datapoint 1 attributes:\n");
}

#[test]
fn test_exemplar_containment() {
    let ex = exemplar(3i64);
    assert!(ex.has_attributes(&[KeyValue::string("user", "alice")]).is_empty());
    assert_eq!(
        ex.has_attributes(&[KeyValue::string("user", "bob")]),
        vec!["user not equal:\nexpected: bob\nactual: alice"]
    );
}

#[test]
fn test_tree_prefixes() {
    let rm = resource_metrics();
    let reasons = rm.has_attributes(&[KeyValue::string("method", "GET")]);
    assert_eq!(
        reasons,
        vec![
            "ResourceMetrics ScopeMetrics 0:\n",
            "ScopeMetrics http Metrics 1:\n",
            "Metric latency:\n",
            "histogram datapoint 1 attributes:\n",
            "method not equal:\nexpected: GET\nactual: POST",
        ]
    );
}

#[test]
fn test_metric_without_data_is_vacuously_contained() {
    let mut m = metric("empty", gauge_f64(&[]));
    m.data = None;
    assert!(m.has_attributes(&[KeyValue::string("method", "GET")]).is_empty());

    let agg: Aggregation = gauge_f64(&[2.0]).into();
    assert!(agg
        .has_attributes(&[KeyValue::string("method", "GET")])
        .is_empty());
}

#[test]
fn test_assert_has_attributes_passes() {
    assert_has_attributes(&resource_metrics().scope_metrics[1], &[KeyValue::string("method", "GET")]);
}

#[test]
#[should_panic(expected = "missing attribute region")]
fn test_assert_has_attributes_panics() {
    assert_has_attributes(&sum_i64(&[1]), &[KeyValue::string("region", "us")]);
}

#[test]
fn test_float_values_compared_bitwise() {
    let dp = metricdatatest_core_types::DataPoint::new(
        vec![
            KeyValue::float64("ratio", 0.0),
            KeyValue::float64("skew", f64::NAN),
        ],
        1i64,
    );
    assert!(dp.has_attributes(&[KeyValue::float64("skew", f64::NAN)]).is_empty());
    assert_eq!(
        dp.has_attributes(&[KeyValue::float64("ratio", -0.0)]),
        vec!["ratio not equal:\nexpected: -0\nactual: 0"]
    );
}
