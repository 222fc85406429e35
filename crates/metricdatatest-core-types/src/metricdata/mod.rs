//! Metric data tree
//!
//! ```text
//! ResourceMetrics
//!   └─ ScopeMetrics*
//!        └─ Metrics*
//!             └─ Aggregation (one of 8 shapes)
//!                  └─ data points*
//!                       └─ Exemplar*
//! ```
//!
//! Repeated children are unordered collections: duplicates are legal and
//! count individually. Bucket bounds and bucket counts are ordered.

pub mod number;
pub mod temporality;

pub use number::{Extrema, Number};
pub use temporality::Temporality;

use crate::attribute::{KeyValue, Set};
use crate::ids::{SpanId, TraceId};
use crate::resource::Resource;
use crate::scope::Scope;
use chrono::{DateTime, Utc};

/// All metrics produced for one resource
#[derive(Debug, Clone, Default)]
pub struct ResourceMetrics {
    pub resource: Resource,
    pub scope_metrics: Vec<ScopeMetrics>,
}

/// Metrics recorded by one instrumentation scope
#[derive(Debug, Clone, Default)]
pub struct ScopeMetrics {
    pub scope: Scope,
    pub metrics: Vec<Metrics>,
}

/// A named metric and its aggregated data
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    pub name: String,
    pub description: String,
    pub unit: String,
    pub data: Option<Aggregation>,
}

impl Metrics {
    pub fn new(name: impl Into<String>, data: impl Into<Aggregation>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            unit: String::new(),
            data: Some(data.into()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// Aggregated data of a metric
///
/// Four aggregation kinds, each over two numeric kinds.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Aggregation {
    GaugeI64(Gauge<i64>),
    GaugeF64(Gauge<f64>),
    SumI64(Sum<i64>),
    SumF64(Sum<f64>),
    HistogramI64(Histogram<i64>),
    HistogramF64(Histogram<f64>),
    ExponentialHistogramI64(ExponentialHistogram<i64>),
    ExponentialHistogramF64(ExponentialHistogram<f64>),
}

impl Aggregation {
    /// Concrete shape name, e.g. `Sum[int64]`
    pub fn type_name(&self) -> &'static str {
        match self {
            Aggregation::GaugeI64(_) => "Gauge[int64]",
            Aggregation::GaugeF64(_) => "Gauge[float64]",
            Aggregation::SumI64(_) => "Sum[int64]",
            Aggregation::SumF64(_) => "Sum[float64]",
            Aggregation::HistogramI64(_) => "Histogram[int64]",
            Aggregation::HistogramF64(_) => "Histogram[float64]",
            Aggregation::ExponentialHistogramI64(_) => "ExponentialHistogram[int64]",
            Aggregation::ExponentialHistogramF64(_) => "ExponentialHistogram[float64]",
        }
    }
}

macro_rules! impl_from_aggregation {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Aggregation {
                fn from(value: $ty) -> Self {
                    Aggregation::$variant(value)
                }
            }
        )*
    };
}

impl_from_aggregation! {
    Gauge<i64> => GaugeI64,
    Gauge<f64> => GaugeF64,
    Sum<i64> => SumI64,
    Sum<f64> => SumF64,
    Histogram<i64> => HistogramI64,
    Histogram<f64> => HistogramF64,
    ExponentialHistogram<i64> => ExponentialHistogramI64,
    ExponentialHistogram<f64> => ExponentialHistogramF64,
}

/// Last observed value per attribute set
#[derive(Debug, Clone, Default)]
pub struct Gauge<N> {
    pub data_points: Vec<DataPoint<N>>,
}

/// Arithmetic sum per attribute set
#[derive(Debug, Clone, Default)]
pub struct Sum<N> {
    pub data_points: Vec<DataPoint<N>>,
    pub temporality: Temporality,
    pub is_monotonic: bool,
}

/// Explicit-bucket histogram
#[derive(Debug, Clone, Default)]
pub struct Histogram<N> {
    pub data_points: Vec<HistogramDataPoint<N>>,
    pub temporality: Temporality,
}

/// Base-2 exponential-bucket histogram
#[derive(Debug, Clone, Default)]
pub struct ExponentialHistogram<N> {
    pub data_points: Vec<ExponentialHistogramDataPoint<N>>,
    pub temporality: Temporality,
}

/// A single scalar observation for one attribute set
#[derive(Debug, Clone, Default)]
pub struct DataPoint<N> {
    pub attributes: Set,
    pub start_time: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub value: N,
    pub exemplars: Vec<Exemplar<N>>,
}

impl<N: Number> DataPoint<N> {
    /// A point with epoch timestamps and no exemplars
    pub fn new<I: IntoIterator<Item = KeyValue>>(attrs: I, value: N) -> Self {
        Self {
            attributes: Set::new(attrs),
            start_time: DateTime::default(),
            time: DateTime::default(),
            value,
            exemplars: Vec::new(),
        }
    }
}

/// Explicit-bucket histogram point
///
/// `bounds` are the bucket upper boundaries; `bucket_counts` has one more
/// entry than `bounds`.
#[derive(Debug, Clone, Default)]
pub struct HistogramDataPoint<N> {
    pub attributes: Set,
    pub start_time: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub count: u64,
    pub bounds: Vec<f64>,
    pub bucket_counts: Vec<u64>,
    pub min: Extrema<N>,
    pub max: Extrema<N>,
    pub sum: N,
    pub exemplars: Vec<Exemplar<N>>,
}

/// Exponential-bucket histogram point
#[derive(Debug, Clone, Default)]
pub struct ExponentialHistogramDataPoint<N> {
    pub attributes: Set,
    pub start_time: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub count: u64,
    pub min: Extrema<N>,
    pub max: Extrema<N>,
    pub sum: N,
    pub scale: i32,
    pub zero_count: u64,
    pub positive_bucket: ExponentialBucket,
    pub negative_bucket: ExponentialBucket,
    pub exemplars: Vec<Exemplar<N>>,
}

/// Contiguous run of exponential buckets starting at `offset`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExponentialBucket {
    pub offset: i32,
    pub counts: Vec<u64>,
}

/// A sampled measurement linked to the trace that produced it
#[derive(Debug, Clone, Default)]
pub struct Exemplar<N> {
    /// Attributes recorded with the measurement but dropped from the point
    pub filtered_attributes: Vec<KeyValue>,
    pub time: DateTime<Utc>,
    pub value: N,
    pub span_id: SpanId,
    pub trace_id: TraceId,
}
