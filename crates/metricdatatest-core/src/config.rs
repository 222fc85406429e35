//! Comparison policy
//!
//! A [`Config`] decides which parts of a measurement tree take part in a
//! comparison. Only timestamps, the numeric payload and exemplars can be
//! switched off; attributes and identity fields are always compared.
//!
//! The policy is a small `Copy` value handed to every comparator by value, so
//! concurrent comparisons with different policies never interfere.

use serde::{Deserialize, Serialize};

/// Immutable set of ignore switches
///
/// # Example
/// ```
/// use metricdatatest_core::config::{CompareOption, Config};
///
/// let cfg = Config::new(&[CompareOption::IgnoreTimestamp]);
/// assert!(cfg.ignore_timestamp());
/// assert!(!cfg.ignore_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    ignore_timestamp: bool,
    ignore_exemplars: bool,
    ignore_value: bool,
}

impl Config {
    /// Fold `opts` over the default policy (compare everything)
    pub fn new(opts: &[CompareOption]) -> Self {
        opts.iter().fold(Self::default(), |cfg, opt| opt.apply(cfg))
    }

    /// Skip start times and observation times
    pub fn with_ignore_timestamp(mut self) -> Self {
        self.ignore_timestamp = true;
        self
    }

    /// Skip exemplar collections
    pub fn with_ignore_exemplars(mut self) -> Self {
        self.ignore_exemplars = true;
        self
    }

    /// Skip the numeric payload of data points and exemplars
    ///
    /// For histograms this covers count, sum, extrema and the bucket layout.
    pub fn with_ignore_value(mut self) -> Self {
        self.ignore_value = true;
        self
    }

    pub fn ignore_timestamp(&self) -> bool {
        self.ignore_timestamp
    }

    pub fn ignore_exemplars(&self) -> bool {
        self.ignore_exemplars
    }

    pub fn ignore_value(&self) -> bool {
        self.ignore_value
    }
}

/// A single composable policy switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOption {
    IgnoreTimestamp,
    IgnoreExemplars,
    IgnoreValue,
}

impl CompareOption {
    /// Return `cfg` with this switch turned on
    pub fn apply(self, cfg: Config) -> Config {
        match self {
            CompareOption::IgnoreTimestamp => cfg.with_ignore_timestamp(),
            CompareOption::IgnoreExemplars => cfg.with_ignore_exemplars(),
            CompareOption::IgnoreValue => cfg.with_ignore_value(),
        }
    }
}
