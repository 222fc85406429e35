//! metricdatatest core - structural comparison of metric data trees
//!
//! This crate compares two measurement trees and explains every difference:
//! - Ignore policy for timestamps, values and exemplars
//! - Unordered multiset matching of repeated children
//! - Per-field comparators from exemplars up to resource metrics
//! - Attribute containment checks
//! - Result-returning and panicking assertion entry points
//!
//! ```
//! use metricdatatest_core::{check_equal, CompareOption};
//! use metricdatatest_core_types::{DataPoint, KeyValue, Metrics, Sum, Temporality};
//!
//! let sum = |v: i64| Sum {
//!     data_points: vec![DataPoint::new(vec![KeyValue::string("method", "GET")], v)],
//!     temporality: Temporality::Cumulative,
//!     is_monotonic: true,
//! };
//! let expected = Metrics::new("requests", sum(5));
//! let actual = Metrics::new("requests", sum(6));
//!
//! let err = check_equal(&expected, &actual, &[]).unwrap_err();
//! assert_eq!(err.reasons()[0], "Metrics Data not equal:");
//! assert!(check_equal(&expected, &actual, &[CompareOption::IgnoreValue]).is_ok());
//! ```

pub mod assertion;
pub mod attributes;
pub mod compare;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;

// Re-export commonly used types
pub use assertion::{
    assert_aggregations_equal, assert_equal, assert_has_attributes, check_aggregations_equal,
    check_equal, check_has_attributes, compare, compare_aggregations, Datatype,
};
pub use config::{CompareOption, Config};
pub use errors::{ComparisonError, ExError, ExErrorKind, Result};
