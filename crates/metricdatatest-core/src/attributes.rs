//! Attribute containment
//!
//! Checks that every data point of a value carries a required subset of
//! attributes. Each missing key yields `missing attribute <key>`; each key
//! present with a different value yields a `<key> not equal` reason.
//! Container levels prefix the reasons of each failing child with its
//! position.

use metricdatatest_core_types::{
    Aggregation, DataPoint, Exemplar, ExponentialHistogram, ExponentialHistogramDataPoint, Gauge,
    Histogram, HistogramDataPoint, KeyValue, Metrics, Number, ResourceMetrics, ScopeMetrics, Set,
    Sum,
};

use crate::diff::{missing_attr_str, not_equal_str};
use crate::errors::ExErrorKind;

fn has_attributes_set(set: &Set, attrs: &[KeyValue]) -> Vec<String> {
    let mut reasons = Vec::new();
    for attr in attrs {
        match set.value(&attr.key) {
            None => reasons.push(missing_attr_str(&attr.key)),
            Some(val) if *val != attr.value => {
                reasons.push(not_equal_str(&attr.key, attr.value.emit(), val.emit()))
            }
            Some(_) => {}
        }
    }
    reasons
}

fn prefixed<T>(
    items: &[T],
    label: impl Fn(usize) -> String,
    check: impl Fn(&T) -> Vec<String>,
) -> Vec<String> {
    let mut reasons = Vec::new();
    for (n, item) in items.iter().enumerate() {
        let found = check(item);
        if !found.is_empty() {
            reasons.push(label(n));
            reasons.extend(found);
        }
    }
    reasons
}

/// Containment against the exemplar's filtered attributes
pub fn has_attributes_exemplar<N: Number>(exemplar: &Exemplar<N>, attrs: &[KeyValue]) -> Vec<String> {
    let set = Set::from(exemplar.filtered_attributes.as_slice());
    has_attributes_set(&set, attrs)
}

pub fn has_attributes_data_point<N: Number>(dp: &DataPoint<N>, attrs: &[KeyValue]) -> Vec<String> {
    has_attributes_set(&dp.attributes, attrs)
}

pub fn has_attributes_histogram_data_point<N: Number>(
    dp: &HistogramDataPoint<N>,
    attrs: &[KeyValue],
) -> Vec<String> {
    has_attributes_set(&dp.attributes, attrs)
}

pub fn has_attributes_exponential_histogram_data_point<N: Number>(
    dp: &ExponentialHistogramDataPoint<N>,
    attrs: &[KeyValue],
) -> Vec<String> {
    has_attributes_set(&dp.attributes, attrs)
}

pub fn has_attributes_gauge<N: Number>(gauge: &Gauge<N>, attrs: &[KeyValue]) -> Vec<String> {
    prefixed(
        &gauge.data_points,
        |n| format!("gauge datapoint {} attributes:\n", n),
        |dp| has_attributes_data_point(dp, attrs),
    )
}

pub fn has_attributes_sum<N: Number>(sum: &Sum<N>, attrs: &[KeyValue]) -> Vec<String> {
    prefixed(
        &sum.data_points,
        |n| format!("sum datapoint {} attributes:\n", n),
        |dp| has_attributes_data_point(dp, attrs),
    )
}

pub fn has_attributes_histogram<N: Number>(
    histogram: &Histogram<N>,
    attrs: &[KeyValue],
) -> Vec<String> {
    prefixed(
        &histogram.data_points,
        |n| format!("histogram datapoint {} attributes:\n", n),
        |dp| has_attributes_histogram_data_point(dp, attrs),
    )
}

pub fn has_attributes_exponential_histogram<N: Number>(
    histogram: &ExponentialHistogram<N>,
    attrs: &[KeyValue],
) -> Vec<String> {
    prefixed(
        &histogram.data_points,
        |n| format!("histogram datapoint {} attributes:\n", n),
        |dp| has_attributes_exponential_histogram_data_point(dp, attrs),
    )
}

/// Dispatch containment over the aggregation shapes
///
/// An absent aggregation has no data points and trivially contains any
/// attributes.
pub fn has_attributes_aggregation(agg: Option<&Aggregation>, attrs: &[KeyValue]) -> Vec<String> {
    let Some(agg) = agg else {
        return Vec::new();
    };
    match agg {
        Aggregation::GaugeI64(g) => has_attributes_gauge(g, attrs),
        Aggregation::GaugeF64(g) => has_attributes_gauge(g, attrs),
        Aggregation::SumI64(s) => has_attributes_sum(s, attrs),
        Aggregation::SumF64(s) => has_attributes_sum(s, attrs),
        Aggregation::HistogramI64(h) => has_attributes_histogram(h, attrs),
        Aggregation::HistogramF64(h) => has_attributes_histogram(h, attrs),
        Aggregation::ExponentialHistogramI64(h) => has_attributes_exponential_histogram(h, attrs),
        Aggregation::ExponentialHistogramF64(h) => has_attributes_exponential_histogram(h, attrs),
        other => {
            tracing::debug!(
                err_code = ExErrorKind::UnknownAggregation.code(),
                aggregation = other.type_name(),
                "unknown aggregation shape"
            );
            vec![format!("unknown aggregation {}", other.type_name())]
        }
    }
}

pub fn has_attributes_metrics(metrics: &Metrics, attrs: &[KeyValue]) -> Vec<String> {
    let found = has_attributes_aggregation(metrics.data.as_ref(), attrs);
    if found.is_empty() {
        return found;
    }
    let mut reasons = vec![format!("Metric {}:\n", metrics.name)];
    reasons.extend(found);
    reasons
}

pub fn has_attributes_scope_metrics(sm: &ScopeMetrics, attrs: &[KeyValue]) -> Vec<String> {
    prefixed(
        &sm.metrics,
        |n| format!("ScopeMetrics {} Metrics {}:\n", sm.scope.name, n),
        |m| has_attributes_metrics(m, attrs),
    )
}

pub fn has_attributes_resource_metrics(rm: &ResourceMetrics, attrs: &[KeyValue]) -> Vec<String> {
    prefixed(
        &rm.scope_metrics,
        |n| format!("ResourceMetrics ScopeMetrics {}:\n", n),
        |sm| has_attributes_scope_metrics(sm, attrs),
    )
}
