//! Assertion entry points
//!
//! Every comparable value implements [`Datatype`]. The free functions come
//! in three forms: `compare` returns the raw reasons, `check_*` returns a
//! [`Result`], and `assert_*` panics with every reason at the caller's
//! location.
//!
//! ```
//! use metricdatatest_core::assertion::{assert_equal, compare};
//! use metricdatatest_core::config::CompareOption;
//! use metricdatatest_core_types::{DataPoint, KeyValue};
//!
//! let expected = DataPoint::new(vec![KeyValue::string("method", "GET")], 5i64);
//! let mut actual = expected.clone();
//! actual.value = 6;
//!
//! assert_eq!(
//!     compare(&expected, &actual, &[]),
//!     vec!["Value not equal:\nexpected: 5\nactual: 6"]
//! );
//! assert_equal(&expected, &actual, &[CompareOption::IgnoreValue]);
//! ```

use std::fmt::Debug;

use metricdatatest_core_types::{
    Aggregation, DataPoint, Exemplar, ExponentialBucket, ExponentialHistogram,
    ExponentialHistogramDataPoint, Extrema, Gauge, Histogram, HistogramDataPoint, KeyValue,
    Metrics, Number, ResourceMetrics, ScopeMetrics, Sum,
};

use crate::attributes::{
    has_attributes_aggregation, has_attributes_data_point, has_attributes_exemplar,
    has_attributes_exponential_histogram, has_attributes_exponential_histogram_data_point,
    has_attributes_gauge, has_attributes_histogram, has_attributes_histogram_data_point,
    has_attributes_metrics, has_attributes_resource_metrics, has_attributes_scope_metrics,
    has_attributes_sum,
};
use crate::compare::{
    equal_aggregations, equal_data_points, equal_exemplars, equal_exponential_buckets,
    equal_exponential_histogram_data_points, equal_exponential_histograms, equal_extrema,
    equal_gauges, equal_histogram_data_points, equal_histograms, equal_metrics,
    equal_resource_metrics, equal_scope_metrics, equal_sums,
};
use crate::config::{CompareOption, Config};
use crate::errors::{ComparisonError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

const AGGREGATION: &str = "Aggregation";

/// A value the comparator knows how to check
pub trait Datatype: Debug {
    /// Base name used in failure messages
    const NAME: &'static str;

    /// Full name, including the numeric kind for generic types
    fn type_name() -> String {
        Self::NAME.to_string()
    }

    /// Reasons why `self` (expected) differs from `actual`
    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String>;

    /// Reasons why `self` lacks some of `attrs`
    fn has_attributes(&self, attrs: &[KeyValue]) -> Vec<String>;
}

impl Datatype for ResourceMetrics {
    const NAME: &'static str = "ResourceMetrics";

    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
        equal_resource_metrics(self, actual, cfg)
    }

    fn has_attributes(&self, attrs: &[KeyValue]) -> Vec<String> {
        has_attributes_resource_metrics(self, attrs)
    }
}

impl Datatype for ScopeMetrics {
    const NAME: &'static str = "ScopeMetrics";

    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
        equal_scope_metrics(self, actual, cfg)
    }

    fn has_attributes(&self, attrs: &[KeyValue]) -> Vec<String> {
        has_attributes_scope_metrics(self, attrs)
    }
}

impl Datatype for Metrics {
    const NAME: &'static str = "Metrics";

    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
        equal_metrics(self, actual, cfg)
    }

    fn has_attributes(&self, attrs: &[KeyValue]) -> Vec<String> {
        has_attributes_metrics(self, attrs)
    }
}

impl Datatype for Aggregation {
    const NAME: &'static str = AGGREGATION;

    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
        equal_aggregations(Some(self), Some(actual), cfg)
    }

    fn has_attributes(&self, attrs: &[KeyValue]) -> Vec<String> {
        has_attributes_aggregation(Some(self), attrs)
    }
}

impl Datatype for ExponentialBucket {
    const NAME: &'static str = "ExponentialBucket";

    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
        equal_exponential_buckets(self, actual, cfg)
    }

    fn has_attributes(&self, _attrs: &[KeyValue]) -> Vec<String> {
        Vec::new()
    }
}

impl<N: Number> Datatype for Extrema<N> {
    const NAME: &'static str = "Extrema";

    fn type_name() -> String {
        format!("Extrema[{}]", N::KIND)
    }

    fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
        equal_extrema(self, actual, cfg)
    }

    fn has_attributes(&self, _attrs: &[KeyValue]) -> Vec<String> {
        Vec::new()
    }
}

macro_rules! impl_numeric_datatype {
    ($($ty:ident => $name:literal, $equal:path, $has:path;)*) => {
        $(
            impl<N: Number> Datatype for $ty<N> {
                const NAME: &'static str = $name;

                fn type_name() -> String {
                    format!("{}[{}]", $name, N::KIND)
                }

                fn equal(&self, actual: &Self, cfg: Config) -> Vec<String> {
                    $equal(self, actual, cfg)
                }

                fn has_attributes(&self, attrs: &[KeyValue]) -> Vec<String> {
                    $has(self, attrs)
                }
            }
        )*
    };
}

impl_numeric_datatype! {
    Gauge => "Gauge", equal_gauges, has_attributes_gauge;
    Sum => "Sum", equal_sums, has_attributes_sum;
    Histogram => "Histogram", equal_histograms, has_attributes_histogram;
    ExponentialHistogram => "ExponentialHistogram",
        equal_exponential_histograms, has_attributes_exponential_histogram;
    DataPoint => "DataPoint", equal_data_points, has_attributes_data_point;
    HistogramDataPoint => "HistogramDataPoint",
        equal_histogram_data_points, has_attributes_histogram_data_point;
    ExponentialHistogramDataPoint => "ExponentialHistogramDataPoint",
        equal_exponential_histogram_data_points,
        has_attributes_exponential_histogram_data_point;
    Exemplar => "Exemplar", equal_exemplars, has_attributes_exemplar;
}

/// Reasons why `expected` and `actual` differ under `opts`
pub fn compare<T: Datatype>(expected: &T, actual: &T, opts: &[CompareOption]) -> Vec<String> {
    expected.equal(actual, Config::new(opts))
}

fn finish_equal(datatype: String, reasons: Vec<String>, start: std::time::Instant) -> Result<()> {
    if reasons.is_empty() {
        log_op_end!(
            "check_equal",
            duration_ms = start.elapsed().as_millis() as u64,
            datatype = datatype.as_str()
        );
        return Ok(());
    }

    let err = ComparisonError::NotEqual { datatype, reasons };
    log_op_error!(
        "check_equal",
        err.clone(),
        duration_ms = start.elapsed().as_millis() as u64,
        datatype = err.datatype()
    );
    Err(err)
}

/// Check that `expected` and `actual` are equal under `opts`
///
/// # Errors
///
/// Returns [`ComparisonError::NotEqual`] carrying every reason when they
/// differ.
pub fn check_equal<T: Datatype>(expected: &T, actual: &T, opts: &[CompareOption]) -> Result<()> {
    let datatype = T::type_name();
    log_op_start!("check_equal", datatype = datatype.as_str());
    let start = std::time::Instant::now();

    let reasons = compare(expected, actual, opts);
    finish_equal(datatype, reasons, start)
}

/// Panic unless `expected` and `actual` are equal under `opts`
///
/// # Panics
///
/// Panics with every reason when the values differ.
#[track_caller]
pub fn assert_equal<T: Datatype>(expected: &T, actual: &T, opts: &[CompareOption]) {
    if let Err(err) = check_equal(expected, actual, opts) {
        panic!("{}", err);
    }
}

/// Reasons why two optional aggregations differ under `opts`
pub fn compare_aggregations(
    expected: Option<&Aggregation>,
    actual: Option<&Aggregation>,
    opts: &[CompareOption],
) -> Vec<String> {
    equal_aggregations(expected, actual, Config::new(opts))
}

/// Check two optional aggregations for equality
///
/// # Errors
///
/// Returns [`ComparisonError::NotEqual`] when they differ, including when
/// exactly one side is absent.
pub fn check_aggregations_equal(
    expected: Option<&Aggregation>,
    actual: Option<&Aggregation>,
    opts: &[CompareOption],
) -> Result<()> {
    log_op_start!("check_equal", datatype = AGGREGATION);
    let start = std::time::Instant::now();

    let reasons = compare_aggregations(expected, actual, opts);
    finish_equal(AGGREGATION.to_string(), reasons, start)
}

/// Panic unless the two optional aggregations are equal
///
/// # Panics
///
/// Panics with every reason when the aggregations differ.
#[track_caller]
pub fn assert_aggregations_equal(
    expected: Option<&Aggregation>,
    actual: Option<&Aggregation>,
    opts: &[CompareOption],
) {
    if let Err(err) = check_aggregations_equal(expected, actual, opts) {
        panic!("{}", err);
    }
}

/// Check that every data point of `actual` carries `attrs`
///
/// # Errors
///
/// Returns [`ComparisonError::MissingAttributes`] listing each missing or
/// differing attribute.
pub fn check_has_attributes<T: Datatype>(actual: &T, attrs: &[KeyValue]) -> Result<()> {
    let datatype = T::type_name();
    log_op_start!(
        "check_has_attributes",
        datatype = datatype.as_str(),
        attr_count = attrs.len() as u64
    );
    let start = std::time::Instant::now();

    let reasons = actual.has_attributes(attrs);
    if reasons.is_empty() {
        log_op_end!(
            "check_has_attributes",
            duration_ms = start.elapsed().as_millis() as u64,
            datatype = datatype.as_str()
        );
        return Ok(());
    }

    let err = ComparisonError::MissingAttributes { datatype, reasons };
    log_op_error!(
        "check_has_attributes",
        err.clone(),
        duration_ms = start.elapsed().as_millis() as u64,
        datatype = err.datatype()
    );
    Err(err)
}

/// Panic unless every data point of `actual` carries `attrs`
///
/// # Panics
///
/// Panics listing each missing or differing attribute.
#[track_caller]
pub fn assert_has_attributes<T: Datatype>(actual: &T, attrs: &[KeyValue]) {
    if let Err(err) = check_has_attributes(actual, attrs) {
        panic!("{}", err);
    }
}
