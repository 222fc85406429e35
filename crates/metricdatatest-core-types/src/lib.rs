//! Core types shared by the metricdatatest comparator
//!
//! This crate provides the read-only measurement tree that the comparator
//! consumes, plus the constants used by the logging facility:
//!
//! - **Attributes**: Key, Value, KeyValue, Set and the default text encoder
//! - **Identity**: Resource and instrumentation Scope
//! - **Metric data**: ResourceMetrics → ScopeMetrics → Metrics → Aggregation
//! - **Correlation ids**: TraceId and SpanId carried by exemplars
//! - **Schema constants**: Canonical field keys and event names

pub mod attribute;
pub mod ids;
pub mod metricdata;
pub mod resource;
pub mod schema;
pub mod scope;

pub use attribute::{DefaultEncoder, Encoder, Key, KeyValue, Set, Type, Value};
pub use ids::{SpanId, TraceId};
pub use metricdata::{
    Aggregation, DataPoint, Exemplar, ExponentialBucket, ExponentialHistogram,
    ExponentialHistogramDataPoint, Extrema, Gauge, Histogram, HistogramDataPoint, Metrics,
    Number, ResourceMetrics, ScopeMetrics, Sum, Temporality,
};
pub use resource::Resource;
pub use scope::Scope;
