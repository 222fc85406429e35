//! Structural comparators for measurement trees
//!
//! Comparators take the expected value first and the actual value second,
//! plus a [`Config`](crate::config::Config) that is threaded unchanged
//! through every level. They return a flat list of reasons; an empty list
//! means the two values are equal under the policy.
//!
//! - [`leaf`]: data points, buckets, extrema, exemplars
//! - [`aggregation`]: the eight aggregation shapes
//! - [`tree`]: metrics, scope metrics, resource metrics

pub mod aggregation;
pub mod leaf;
pub mod tree;

pub use aggregation::{
    equal_aggregations, equal_exponential_histograms, equal_gauges, equal_histograms, equal_sums,
};
pub use leaf::{
    eq_extrema, equal_data_points, equal_exemplars, equal_exponential_buckets,
    equal_exponential_histogram_data_points, equal_extrema, equal_histogram_data_points,
    equal_key_values,
};
pub use tree::{equal_metrics, equal_resource_metrics, equal_scope_metrics};

use std::fmt::Debug;

use crate::diff::{compare_diff, diff_slices};

/// Match two unordered collections and describe the leftovers under `heading`
pub(crate) fn multiset_reason<T, F>(heading: &str, a: &[T], b: &[T], eq: F) -> Option<String>
where
    T: Clone + Debug,
    F: FnMut(&T, &T) -> bool,
{
    let (extra_a, extra_b) = diff_slices(a, b, eq);
    let diff = compare_diff(&extra_a, &extra_b);
    if diff.is_empty() {
        None
    } else {
        Some(format!("{}:\n{}", heading, diff))
    }
}

/// Prefix non-empty `reasons` with `header`
pub(crate) fn with_header(header: String, reasons: Vec<String>) -> Vec<String> {
    if reasons.is_empty() {
        return reasons;
    }
    let mut out = Vec::with_capacity(reasons.len() + 1);
    out.push(header);
    out.extend(reasons);
    out
}
