//! Comparison Demonstration
//!
//! Builds two small metric trees and prints what the comparator reports.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Reasons pinpoint the differing field at each level
//! 2. Ignore options relax the comparison
//! 3. Attribute containment checks per data point

use metricdatatest_core::logging_facility::{init, Profile};
use metricdatatest_core::{check_equal, check_has_attributes, compare, CompareOption};
use metricdatatest_core_types::{
    DataPoint, Histogram, HistogramDataPoint, KeyValue, Metrics, Resource, ResourceMetrics,
    Scope, ScopeMetrics, Sum, Temporality,
};

fn requests(value: i64) -> Metrics {
    Metrics::new(
        "http.server.requests",
        Sum {
            data_points: vec![
                DataPoint::new(vec![KeyValue::string("method", "GET")], value),
                DataPoint::new(vec![KeyValue::string("method", "POST")], 3),
            ],
            temporality: Temporality::Cumulative,
            is_monotonic: true,
        },
    )
    .with_unit("{request}")
}

fn latency(count: u64) -> Metrics {
    Metrics::new(
        "http.server.duration",
        Histogram::<f64> {
            data_points: vec![HistogramDataPoint {
                attributes: [KeyValue::string("method", "GET")].into_iter().collect(),
                count,
                bounds: vec![5.0, 10.0],
                bucket_counts: vec![count, 0, 0],
                sum: 2.5 * count as f64,
                ..Default::default()
            }],
            temporality: Temporality::Delta,
        },
    )
    .with_unit("ms")
}

fn tree(value: i64, count: u64) -> ResourceMetrics {
    ResourceMetrics {
        resource: Resource::new(vec![KeyValue::string("service.name", "checkout")]),
        scope_metrics: vec![ScopeMetrics {
            scope: Scope::new("demo").with_version("0.1.0"),
            metrics: vec![requests(value), latency(count)],
        }],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);
    println!("=== metricdatatest Comparison Demo ===\n");

    // ===== Part 1: Equal trees =====
    println!("## Part 1: Equal trees\n");
    check_equal(&tree(5, 2), &tree(5, 2), &[])?;
    println!("identical trees compare equal\n");

    // ===== Part 2: Pinpointed differences =====
    println!("## Part 2: Metric level reasons\n");
    for reason in compare(&requests(5), &requests(6), &[]) {
        println!("{}\n", reason);
    }
    for reason in compare(&latency(2), &latency(4), &[]) {
        println!("{}\n", reason);
    }

    // ===== Part 3: Ignore options =====
    println!("## Part 3: Ignoring values\n");
    let strict = compare(&tree(5, 2), &tree(6, 4), &[]);
    let relaxed = compare(&tree(5, 2), &tree(6, 4), &[CompareOption::IgnoreValue]);
    println!("strict: {} reason(s), ignore value: {}\n", strict.len(), relaxed.len());

    // ===== Part 4: Attribute containment =====
    println!("## Part 4: Attribute containment\n");
    match check_has_attributes(&tree(5, 2), &[KeyValue::string("method", "GET")]) {
        Ok(()) => println!("every data point has method=GET"),
        Err(err) => println!("{}", err),
    }

    Ok(())
}
