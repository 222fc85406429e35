//! Diff primitives shared by every comparator.
//!
//! ## Matching
//!
//! Repeated children of a measurement tree are unordered multisets. The
//! [`matcher`] pairs elements greedily with a caller supplied equality and
//! returns what is left over on either side.
//!
//! ## Rendering
//!
//! The [`format`] helpers turn leftovers and single-field mismatches into the
//! reason strings that comparators return:
//!
//! ```
//! use metricdatatest_core::diff::{compare_diff, diff_slices, not_equal_str};
//!
//! let (missing, extra) = diff_slices(&[1, 2, 2], &[2, 3], |a, b| a == b);
//! assert_eq!(missing, vec![1, 2]);
//! assert_eq!(extra, vec![3]);
//! assert_eq!(
//!     compare_diff(&missing, &extra),
//!     "missing expected values:\n1\n2\nunexpected additional values:\n3\n"
//! );
//! assert_eq!(
//!     not_equal_str("Unit", "ms", "s"),
//!     "Unit not equal:\nexpected: ms\nactual: s"
//! );
//! ```

pub mod format;
pub mod matcher;

pub use format::{compare_diff, missing_attr_str, not_equal_str};
pub use matcher::{diff_slices, equal_slices};
