use thiserror::Error;

/// Result type alias using ComparisonError
pub type Result<T> = std::result::Result<T, ComparisonError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling in test harnesses and for structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Comparison outcomes
    /// Expected and actual values differ
    NotEqual,
    /// A value lacks some of the required attributes
    MissingAttributes,

    // Contract violations
    /// An aggregation shape outside the known variants reached the dispatcher
    UnknownAggregation,
    /// A closed enumeration was extended without updating its consumers
    InvariantViolation,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotEqual => "ERR_NOT_EQUAL",
            ExErrorKind::MissingAttributes => "ERR_MISSING_ATTRIBUTES",
            ExErrorKind::UnknownAggregation => "ERR_UNKNOWN_AGGREGATION",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus every
/// mismatch reason collected by the comparison that produced it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    datatype: Option<String>,
    message: String,
    reasons: Vec<String>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            datatype: None,
            message: String::new(),
            reasons: Vec::new(),
        }
    }

    /// Set the operation that produced the error
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the name of the compared datatype
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    /// Set the human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach mismatch reasons
    pub fn with_reasons(mut self, reasons: Vec<String>) -> Self {
        self.reasons = reasons;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation name, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the compared datatype, if any
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the mismatch reasons
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(datatype) = &self.datatype {
            write!(f, " (datatype: {})", datatype)?;
        }
        if !self.reasons.is_empty() {
            write!(f, " ({} reasons)", self.reasons.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure of a comparison or containment check
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// Expected and actual values are not equal
    #[error("{datatype} not equal:\n{}", .reasons.join("\n"))]
    NotEqual {
        datatype: String,
        reasons: Vec<String>,
    },

    /// A value does not carry the required attributes
    #[error("{datatype} missing attributes:\n{}", .reasons.join("\n"))]
    MissingAttributes {
        datatype: String,
        reasons: Vec<String>,
    },
}

impl ComparisonError {
    /// Every mismatch reason carried by this error
    pub fn reasons(&self) -> &[String] {
        match self {
            ComparisonError::NotEqual { reasons, .. }
            | ComparisonError::MissingAttributes { reasons, .. } => reasons,
        }
    }

    /// Name of the datatype that was checked
    pub fn datatype(&self) -> &str {
        match self {
            ComparisonError::NotEqual { datatype, .. }
            | ComparisonError::MissingAttributes { datatype, .. } => datatype,
        }
    }
}

impl From<ComparisonError> for ExError {
    fn from(err: ComparisonError) -> Self {
        match err {
            ComparisonError::NotEqual { datatype, reasons } => ExError::new(ExErrorKind::NotEqual)
                .with_op("check_equal")
                .with_message(format!("{} not equal", datatype))
                .with_datatype(datatype)
                .with_reasons(reasons),

            ComparisonError::MissingAttributes { datatype, reasons } => {
                ExError::new(ExErrorKind::MissingAttributes)
                    .with_op("check_has_attributes")
                    .with_message(format!("{} missing attributes", datatype))
                    .with_datatype(datatype)
                    .with_reasons(reasons)
            }
        }
    }
}
