use std::fmt;

/// Numeric kinds a measurement can be recorded in
///
/// Implemented for `i64` and `f64` only. Equality is exact `==`.
pub trait Number:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    /// Name of the numeric kind (`int64` or `float64`)
    const KIND: &'static str;
}

impl Number for i64 {
    const KIND: &'static str = "int64";
}

impl Number for f64 {
    const KIND: &'static str = "float64";
}

/// An optional minimum or maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema<N>(Option<N>);

impl<N: Number> Extrema<N> {
    /// An extrema holding `value`
    pub fn new(value: N) -> Self {
        Self(Some(value))
    }

    /// An extrema that was never recorded
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<N> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl<N> Default for Extrema<N> {
    fn default() -> Self {
        Self(None)
    }
}

impl<N: Number> From<Option<N>> for Extrema<N> {
    fn from(value: Option<N>) -> Self {
        Self(value)
    }
}

impl<N: Number> fmt::Display for Extrema<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("unset"),
        }
    }
}
