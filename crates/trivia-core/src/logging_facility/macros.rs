//! Canonical logging macros
//!
//! Callers must depend on `tracing` and `trivia-core-types`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use trivia_core::log_op_start;
/// log_op_start!("question_list");
/// log_op_start!("question_list", page = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trivia_core_types::schema::EVENT_START,
        )
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trivia_core_types::schema::EVENT_START,
            $($field)*
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use trivia_core::log_op_end;
/// log_op_end!("question_list", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trivia_core_types::schema::EVENT_END,
            duration_ms = $duration,
        )
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trivia_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        )
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `TrError`.
///
/// ```ignore
/// # use trivia_core::{log_op_error, errors::TriviaError};
/// let err = TriviaError::QuestionNotFound { question_id: 7 };
/// log_op_error!("question_delete", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::TrError;
        let tr_err: TrError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = trivia_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?tr_err.kind(),
            err_code = tr_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::TrError;
        let tr_err: TrError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = trivia_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?tr_err.kind(),
            err_code = tr_err.code(),
            $($field)*
        );
    }};
}
