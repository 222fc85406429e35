#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use metricdatatest_core::errors::ComparisonError;
use metricdatatest_core::logging_facility::test_capture::init_test_capture;
use metricdatatest_core::{
    check_aggregations_equal, check_equal, check_has_attributes, log_op_end, log_op_error,
    log_op_start,
};
use metricdatatest_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ATTR_COUNT, FIELD_DATATYPE, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_REASON_COUNT,
};
use metricdatatest_core_types::KeyValue;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let ends = capture.find(op_name, EVENT_END);
    assert_eq!(ends.len(), 1, "Should have exactly one end event");
    assert_eq!(ends[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code_and_reason_count() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ComparisonError::MissingAttributes {
        datatype: "Gauge[int64]".to_string(),
        reasons: vec!["missing attribute a".to_string(), "missing attribute b".to_string()],
    };
    log_op_error!(op_name, err, duration_ms = 5);

    let errors = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_MISSING_ATTRIBUTES"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("MissingAttributes"));
    assert_eq!(errors[0].field(FIELD_REASON_COUNT), Some("2"));
    assert_eq!(errors[0].field(FIELD_DURATION_MS), Some("5"));
}

#[test]
fn test_check_equal_emits_start_and_end() {
    let capture = init_test_capture();
    let rm = resource_metrics();

    check_equal(&rm, &rm.clone(), &[]).unwrap();

    let ends = capture.find("check_equal", EVENT_END);
    assert!(ends
        .iter()
        .any(|e| e.field(FIELD_DATATYPE) == Some("ResourceMetrics")));
    capture.assert_event_exists("check_equal", EVENT_START);
}

#[test]
fn test_check_equal_failure_emits_end_error() {
    let capture = init_test_capture();
    let expected = exponential_point("GET");
    let mut actual = exponential_point("GET");
    actual.scale = 4;

    check_equal(&expected, &actual, &[]).unwrap_err();

    let errors = capture.find("check_equal", EVENT_END_ERROR);
    let event = errors
        .iter()
        .find(|e| e.field(FIELD_DATATYPE) == Some("ExponentialHistogramDataPoint[float64]"))
        .expect("Should have error event for the compared datatype");
    assert_eq!(event.field(FIELD_ERR_CODE), Some("ERR_NOT_EQUAL"));
    assert_eq!(event.field(FIELD_REASON_COUNT), Some("1"));
}

#[test]
fn test_check_aggregations_equal_logs_aggregation_datatype() {
    let capture = init_test_capture();

    check_aggregations_equal(None, None, &[]).unwrap();

    let ends = capture.find("check_equal", EVENT_END);
    assert!(ends
        .iter()
        .any(|e| e.field(FIELD_DATATYPE) == Some("Aggregation")));
}

#[test]
fn test_check_has_attributes_logs_attr_count() {
    let capture = init_test_capture();
    let h = histogram_i64();

    check_has_attributes(&h, &[KeyValue::string("method", "GET")]).unwrap_err();

    let starts = capture.find("check_has_attributes", EVENT_START);
    assert!(starts.iter().any(|e| {
        e.field(FIELD_DATATYPE) == Some("Histogram[int64]") && e.field(FIELD_ATTR_COUNT) == Some("1")
    }));
    let errors = capture.find("check_has_attributes", EVENT_END_ERROR);
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_MISSING_ATTRIBUTES")));
}
