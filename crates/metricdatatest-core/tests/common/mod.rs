use chrono::{DateTime, TimeZone, Utc};
use metricdatatest_core_types::{
    Aggregation, DataPoint, Exemplar, ExponentialBucket, ExponentialHistogram,
    ExponentialHistogramDataPoint, Extrema, Gauge, Histogram, HistogramDataPoint, KeyValue,
    Metrics, Resource, ResourceMetrics, Scope, ScopeMetrics, SpanId, Sum, Temporality, TraceId,
};

/// Timestamp `secs` seconds after the epoch
#[allow(dead_code)]
pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Data point with `method` attribute and fixed timestamps
#[allow(dead_code)]
pub fn data_point<N: metricdatatest_core_types::Number>(method: &str, value: N) -> DataPoint<N> {
    DataPoint {
        attributes: [KeyValue::string("method", method)].into_iter().collect(),
        start_time: ts(10),
        time: ts(20),
        value,
        exemplars: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn exemplar<N: metricdatatest_core_types::Number>(value: N) -> Exemplar<N> {
    Exemplar {
        filtered_attributes: vec![KeyValue::string("user", "alice")],
        time: ts(15),
        value,
        span_id: SpanId::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]),
        trace_id: TraceId::from_bytes([9; 16]),
    }
}

/// Monotonic cumulative int sum with one point per value
#[allow(dead_code)]
pub fn sum_i64(values: &[i64]) -> Sum<i64> {
    Sum {
        data_points: values.iter().map(|v| data_point("GET", *v)).collect(),
        temporality: Temporality::Cumulative,
        is_monotonic: true,
    }
}

#[allow(dead_code)]
pub fn gauge_f64(values: &[f64]) -> Gauge<f64> {
    Gauge {
        data_points: values.iter().map(|v| data_point("GET", *v)).collect(),
    }
}

#[allow(dead_code)]
pub fn histogram_point(method: &str) -> HistogramDataPoint<i64> {
    HistogramDataPoint {
        attributes: [KeyValue::string("method", method)].into_iter().collect(),
        start_time: ts(10),
        time: ts(20),
        count: 3,
        bounds: vec![0.0, 10.0, 100.0],
        bucket_counts: vec![0, 1, 2, 0],
        min: Extrema::new(4),
        max: Extrema::new(60),
        sum: 114,
        exemplars: vec![exemplar(50)],
    }
}

#[allow(dead_code)]
pub fn histogram_i64() -> Histogram<i64> {
    Histogram {
        data_points: vec![histogram_point("GET"), histogram_point("POST")],
        temporality: Temporality::Delta,
    }
}

#[allow(dead_code)]
pub fn exponential_point(method: &str) -> ExponentialHistogramDataPoint<f64> {
    ExponentialHistogramDataPoint {
        attributes: [KeyValue::string("method", method)].into_iter().collect(),
        start_time: ts(10),
        time: ts(20),
        count: 4,
        min: Extrema::new(0.5),
        max: Extrema::new(8.0),
        sum: 14.5,
        scale: 1,
        zero_count: 0,
        positive_bucket: ExponentialBucket {
            offset: -1,
            counts: vec![1, 1, 2],
        },
        negative_bucket: ExponentialBucket::default(),
        exemplars: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn exponential_histogram_f64() -> ExponentialHistogram<f64> {
    ExponentialHistogram {
        data_points: vec![exponential_point("GET")],
        temporality: Temporality::Cumulative,
    }
}

#[allow(dead_code)]
pub fn metric(name: &str, data: impl Into<Aggregation>) -> Metrics {
    Metrics::new(name, data).with_unit("1")
}

#[allow(dead_code)]
pub fn scope_metrics(name: &str, metrics: Vec<Metrics>) -> ScopeMetrics {
    ScopeMetrics {
        scope: Scope::new(name).with_version("v0.1.0"),
        metrics,
    }
}

/// A two-scope tree covering every aggregation family
#[allow(dead_code)]
pub fn resource_metrics() -> ResourceMetrics {
    ResourceMetrics {
        resource: Resource::new(vec![KeyValue::string("service.name", "checkout")]),
        scope_metrics: vec![
            scope_metrics(
                "http",
                vec![
                    metric("requests", sum_i64(&[5, 7])),
                    metric("latency", histogram_i64()),
                ],
            ),
            scope_metrics(
                "runtime",
                vec![
                    metric("heap", gauge_f64(&[1.5])),
                    metric("alloc", exponential_histogram_f64()),
                ],
            ),
        ],
    }
}
