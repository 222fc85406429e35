//! Operation boundary macros
//!
//! Every event carries `component`, `op` and `event` so that captured logs
//! can be filtered per checking operation.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use metricdatatest_core::log_op_start;
/// log_op_start!("check_equal");
/// log_op_start!("check_equal", datatype = "Metrics");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = metricdatatest_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = metricdatatest_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use metricdatatest_core::log_op_end;
/// log_op_end!("check_equal", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = metricdatatest_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = metricdatatest_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation
///
/// `$err` must convert into [`crate::errors::ExError`].
///
/// # Example
///
/// ```
/// # use metricdatatest_core::{log_op_error, errors::ComparisonError};
/// let err = ComparisonError::NotEqual {
///     datatype: "Metrics".to_string(),
///     reasons: vec!["Name not equal:\nexpected: a\nactual: b".to_string()],
/// };
/// log_op_error!("check_equal", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = metricdatatest_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            reason_count = ex_err.reasons().len(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = metricdatatest_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            reason_count = ex_err.reasons().len(),
            $($field)*
        );
    }};
}
