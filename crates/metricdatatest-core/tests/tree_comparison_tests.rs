#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use metricdatatest_core::{check_equal, compare, compare_aggregations, CompareOption};
use metricdatatest_core_types::{
    Aggregation, ExponentialBucket, Extrema, Gauge, KeyValue, Metrics, Resource, Sum, Temporality,
};

#[test]
fn test_identical_trees_are_equal() {
    let rm = resource_metrics();
    assert!(compare(&rm, &rm.clone(), &[]).is_empty());
}

#[test]
fn test_sum_value_difference_reported_at_tree_level() {
    let expected = resource_metrics();
    let mut actual = resource_metrics();
    actual.scope_metrics[0].metrics[0] = metric("requests", sum_i64(&[6, 7]));

    let reasons = compare(&expected, &actual, &[]);
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].starts_with("ResourceMetrics ScopeMetrics not equal:\n"));
    assert!(reasons[0].contains("missing expected values:\n"));
    assert!(reasons[0].contains("unexpected additional values:\n"));
    assert!(reasons[0].contains("value: 5"));
    assert!(reasons[0].contains("value: 6"));

    assert!(compare(&expected, &actual, &[CompareOption::IgnoreValue]).is_empty());
}

#[test]
fn test_sum_value_difference_pinpointed_at_metric_level() {
    let expected = metric("requests", sum_i64(&[5]));
    let actual = metric("requests", sum_i64(&[6]));

    let reasons = compare(&expected, &actual, &[]);
    assert_eq!(reasons[0], "Metrics Data not equal:");
    assert_eq!(reasons[1], "Sum[int64] not equal:");
    assert!(reasons[2].starts_with("Sum DataPoints not equal:\n"));
    assert_eq!(reasons.len(), 3);
}

#[test]
fn test_children_are_order_independent() {
    let expected = resource_metrics();
    let mut actual = resource_metrics();
    actual.scope_metrics.reverse();
    for sm in &mut actual.scope_metrics {
        sm.metrics.reverse();
    }
    if let Some(Aggregation::HistogramI64(h)) = actual.scope_metrics[1].metrics[0].data.as_mut() {
        h.data_points.reverse();
    }

    assert!(compare(&expected, &actual, &[]).is_empty());
}

#[test]
fn test_duplicate_scope_metrics_counted() {
    let expected = resource_metrics();
    let mut actual = resource_metrics();
    let dup = actual.scope_metrics[0].clone();
    actual.scope_metrics.push(dup);

    let reasons = compare(&expected, &actual, &[]);
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].starts_with(
        "ResourceMetrics ScopeMetrics not equal:\nunexpected additional values:\n"
    ));
    assert!(!reasons[0].contains("missing expected values"));
}

#[test]
fn test_symmetric_detection() {
    let a = resource_metrics();
    let mut b = resource_metrics();
    b.resource = Resource::new(vec![KeyValue::string("service.name", "cart")]);

    assert!(!compare(&a, &b, &[]).is_empty());
    assert!(!compare(&b, &a, &[]).is_empty());
}

#[test]
fn test_timestamps_ignorable() {
    let expected = resource_metrics();
    let mut actual = resource_metrics();
    for sm in &mut actual.scope_metrics {
        for m in &mut sm.metrics {
            match m.data.as_mut() {
                Some(Aggregation::SumI64(s)) => {
                    s.data_points.iter_mut().for_each(|dp| dp.time = ts(99))
                }
                Some(Aggregation::HistogramI64(h)) => h.data_points.iter_mut().for_each(|dp| {
                    dp.start_time = ts(1);
                    dp.exemplars.iter_mut().for_each(|e| e.time = ts(2));
                }),
                _ => {}
            }
        }
    }

    assert!(!compare(&expected, &actual, &[]).is_empty());
    assert!(compare(&expected, &actual, &[CompareOption::IgnoreTimestamp]).is_empty());
}

#[test]
fn test_exemplars_ignorable() {
    let mut expected = histogram_i64();
    let actual = histogram_i64();
    expected.data_points[0].exemplars.push(exemplar(1));

    let reasons = compare(&expected, &actual, &[]);
    assert!(reasons[0].starts_with("Histogram DataPoints not equal:\n"));
    assert!(compare(&expected, &actual, &[CompareOption::IgnoreExemplars]).is_empty());
}

#[test]
fn test_exponential_bucket_counts_are_ordered() {
    let expected = exponential_point("GET");
    let mut actual = exponential_point("GET");
    actual.positive_bucket.counts.reverse();

    assert_eq!(
        compare(&expected, &actual, &[]),
        vec!["Counts not equal:\nexpected: [1, 1, 2]\nactual: [2, 1, 1]"]
    );

    let bucket = ExponentialBucket {
        offset: 3,
        counts: vec![1],
    };
    assert_eq!(
        compare(&bucket, &ExponentialBucket::default(), &[]),
        vec![
            "Offset not equal:\nexpected: 3\nactual: 0",
            "Counts not equal:\nexpected: [1]\nactual: []",
        ]
    );
}

#[test]
fn test_histogram_bounds_are_ordered() {
    let expected = histogram_point("GET");
    let mut actual = histogram_point("GET");
    actual.bounds = vec![100.0, 10.0, 0.0];

    let reasons = compare(&expected, &actual, &[]);
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].starts_with("Bounds not equal:"));
}

#[test]
fn test_extrema_absence_semantics() {
    let mut expected = histogram_point("GET");
    let mut actual = histogram_point("GET");
    expected.max = Extrema::unset();
    actual.max = Extrema::unset();
    assert!(compare(&expected, &actual, &[]).is_empty());

    actual.max = Extrema::new(60);
    assert_eq!(
        compare(&expected, &actual, &[]),
        vec!["Max not equal:\nexpected: unset\nactual: 60"]
    );
}

#[test]
fn test_variant_discrimination_through_metrics() {
    let gauge_i = Metrics::new("m", Gauge::<i64>::default());
    let sum_i = Metrics::new("m", Sum::<i64>::default());
    let sum_f = Metrics::new("m", Sum::<f64>::default());

    let reasons = compare(&gauge_i, &sum_i, &[]);
    assert_eq!(
        reasons,
        vec![
            "Metrics Data not equal:",
            "Aggregation types not equal:\nexpected: Gauge[int64]\nactual: Sum[int64]",
        ]
    );
    assert_eq!(compare(&sum_i, &sum_f, &[]).len(), 2);
}

#[test]
fn test_aggregation_entry_point() {
    let a: Aggregation = Sum::<f64> {
        temporality: Temporality::Delta,
        ..Default::default()
    }
    .into();
    let b: Aggregation = Sum::<f64> {
        temporality: Temporality::Cumulative,
        ..Default::default()
    }
    .into();

    assert!(compare_aggregations(None, None, &[]).is_empty());
    assert_eq!(
        compare_aggregations(Some(&a), Some(&b), &[]),
        vec![
            "Sum[float64] not equal:",
            "Temporality not equal:\nexpected: DeltaTemporality\nactual: CumulativeTemporality",
        ]
    );
}

#[test]
fn test_check_equal_error_lists_every_reason() {
    let expected = metric("requests", sum_i64(&[5])).with_description("served");
    let actual = metric("latency", gauge_f64(&[5.0]));

    let err = check_equal(&expected, &actual, &[]).unwrap_err();
    assert_eq!(err.datatype(), "Metrics");
    assert_eq!(
        err.reasons(),
        [
            "Name not equal:\nexpected: requests\nactual: latency",
            "Description not equal:\nexpected: served\nactual: ",
            "Metrics Data not equal:",
            "Aggregation types not equal:\nexpected: Sum[int64]\nactual: Gauge[float64]",
        ]
    );
    let text = err.to_string();
    assert!(text.starts_with("Metrics not equal:\nName not equal"));
}

#[test]
fn test_nan_attributes_compare_equal_to_themselves() {
    let mut rm = resource_metrics();
    rm.resource = Resource::new(vec![
        KeyValue::string("service.name", "checkout"),
        KeyValue::float64("sample.ratio", f64::NAN),
    ]);
    rm.scope_metrics[0].metrics[0] = metric(
        "requests",
        Sum {
            data_points: vec![metricdatatest_core_types::DataPoint::new(
                vec![KeyValue::float64("ratio", f64::NAN)],
                5i64,
            )],
            temporality: Temporality::Cumulative,
            is_monotonic: true,
        },
    );

    assert!(compare(&rm, &rm.clone(), &[]).is_empty());
}

#[test]
fn test_signed_zero_attributes_differ() {
    let gauge = |ratio: f64| Gauge {
        data_points: vec![metricdatatest_core_types::DataPoint::new(
            vec![KeyValue::float64("ratio", ratio)],
            1.5f64,
        )],
    };
    let expected = metric("heap", gauge(0.0));
    let actual = metric("heap", gauge(-0.0));

    let reasons = compare(&expected, &actual, &[]);
    assert_eq!(reasons[0], "Metrics Data not equal:");
    assert_eq!(reasons[1], "Gauge[float64] not equal:");
    assert!(reasons[2].starts_with("Gauge DataPoints not equal:
"));
}
