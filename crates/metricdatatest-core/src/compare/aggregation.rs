//! Aggregation dispatch
//!
//! Two aggregations are only compared field by field when they are the same
//! shape over the same numeric kind. Any other pairing yields a single
//! reason naming both shapes.

use metricdatatest_core_types::{
    Aggregation, ExponentialHistogram, Gauge, Histogram, Number, Sum,
};

use super::leaf::{
    equal_data_points, equal_exponential_histogram_data_points, equal_histogram_data_points,
};
use super::{multiset_reason, with_header};
use crate::config::Config;
use crate::diff::not_equal_str;
use crate::errors::ExErrorKind;

const NIL: &str = "<nil>";

/// Compare two optional aggregations
///
/// Both absent is equal. Exactly one absent yields an `Aggregation` reason
/// with `<nil>` for the missing side.
pub fn equal_aggregations(
    a: Option<&Aggregation>,
    b: Option<&Aggregation>,
    cfg: Config,
) -> Vec<String> {
    let (a, b) = match (a, b) {
        (None, None) => return Vec::new(),
        (Some(a), None) => return vec![not_equal_str("Aggregation", format!("{:?}", a), NIL)],
        (None, Some(b)) => return vec![not_equal_str("Aggregation", NIL, format!("{:?}", b))],
        (Some(a), Some(b)) => (a, b),
    };

    if std::mem::discriminant(a) != std::mem::discriminant(b) {
        tracing::debug!(
            expected = a.type_name(),
            actual = b.type_name(),
            "aggregation shapes differ"
        );
        return vec![format!(
            "Aggregation types not equal:\nexpected: {}\nactual: {}",
            a.type_name(),
            b.type_name()
        )];
    }

    match (a, b) {
        (Aggregation::GaugeI64(x), Aggregation::GaugeI64(y)) => {
            with_header("Gauge[int64] not equal:".into(), equal_gauges(x, y, cfg))
        }
        (Aggregation::GaugeF64(x), Aggregation::GaugeF64(y)) => {
            with_header("Gauge[float64] not equal:".into(), equal_gauges(x, y, cfg))
        }
        (Aggregation::SumI64(x), Aggregation::SumI64(y)) => {
            with_header("Sum[int64] not equal:".into(), equal_sums(x, y, cfg))
        }
        (Aggregation::SumF64(x), Aggregation::SumF64(y)) => {
            with_header("Sum[float64] not equal:".into(), equal_sums(x, y, cfg))
        }
        (Aggregation::HistogramI64(x), Aggregation::HistogramI64(y)) => {
            with_header("Histogram not equal:".into(), equal_histograms(x, y, cfg))
        }
        (Aggregation::HistogramF64(x), Aggregation::HistogramF64(y)) => {
            with_header("Histogram not equal:".into(), equal_histograms(x, y, cfg))
        }
        (Aggregation::ExponentialHistogramI64(x), Aggregation::ExponentialHistogramI64(y)) => {
            with_header(
                "ExponentialHistogram not equal:".into(),
                equal_exponential_histograms(x, y, cfg),
            )
        }
        (Aggregation::ExponentialHistogramF64(x), Aggregation::ExponentialHistogramF64(y)) => {
            with_header(
                "ExponentialHistogram not equal:".into(),
                equal_exponential_histograms(x, y, cfg),
            )
        }
        (other, _) => {
            tracing::debug!(
                err_code = ExErrorKind::UnknownAggregation.code(),
                aggregation = other.type_name(),
                "unknown aggregation shape"
            );
            vec![format!("Aggregation of unknown types {}", other.type_name())]
        }
    }
}

/// Compare gauge data points as a multiset
pub fn equal_gauges<N: Number>(a: &Gauge<N>, b: &Gauge<N>, cfg: Config) -> Vec<String> {
    multiset_reason("Gauge DataPoints not equal", &a.data_points, &b.data_points, |x, y| {
        equal_data_points(x, y, cfg).is_empty()
    })
    .into_iter()
    .collect()
}

/// Compare temporality, monotonicity and the data point multiset
pub fn equal_sums<N: Number>(a: &Sum<N>, b: &Sum<N>, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    if a.temporality != b.temporality {
        reasons.push(not_equal_str("Temporality", a.temporality, b.temporality));
    }
    if a.is_monotonic != b.is_monotonic {
        reasons.push(not_equal_str("IsMonotonic", a.is_monotonic, b.is_monotonic));
    }
    reasons.extend(multiset_reason(
        "Sum DataPoints not equal",
        &a.data_points,
        &b.data_points,
        |x, y| equal_data_points(x, y, cfg).is_empty(),
    ));
    reasons
}

pub fn equal_histograms<N: Number>(a: &Histogram<N>, b: &Histogram<N>, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    if a.temporality != b.temporality {
        reasons.push(not_equal_str("Temporality", a.temporality, b.temporality));
    }
    reasons.extend(multiset_reason(
        "Histogram DataPoints not equal",
        &a.data_points,
        &b.data_points,
        |x, y| equal_histogram_data_points(x, y, cfg).is_empty(),
    ));
    reasons
}

pub fn equal_exponential_histograms<N: Number>(
    a: &ExponentialHistogram<N>,
    b: &ExponentialHistogram<N>,
    cfg: Config,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if a.temporality != b.temporality {
        reasons.push(not_equal_str("Temporality", a.temporality, b.temporality));
    }
    reasons.extend(multiset_reason(
        "Histogram DataPoints not equal",
        &a.data_points,
        &b.data_points,
        |x, y| equal_exponential_histogram_data_points(x, y, cfg).is_empty(),
    ));
    reasons
}
