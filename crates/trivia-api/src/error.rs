//! HTTP error envelope
//!
//! Every failure leaves the service as a fixed status plus
//! `{success: false, error: <status>, message: <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use trivia_core::{Failure, TrError, TrErrorKind};

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn for_failure(failure: Failure) -> Self {
        Self {
            success: false,
            error: failure.status_code(),
            message: failure.message().to_string(),
        }
    }
}

/// A failure on its way out of a handler
///
/// Always carries the structured error; the response keeps a copy in its
/// extensions so the request middleware can log it with the request id.
#[derive(Debug)]
pub struct ApiError {
    cause: TrError,
}

impl ApiError {
    pub fn bad_request() -> Self {
        TrError::new(TrErrorKind::InvalidInput)
            .with_message("Malformed request body")
            .into()
    }

    pub fn not_found() -> Self {
        TrError::new(TrErrorKind::NotFound)
            .with_message("No such resource")
            .into()
    }

    pub fn method_not_allowed() -> Self {
        TrError::new(TrErrorKind::MethodNotAllowed).into()
    }

    pub fn internal() -> Self {
        TrError::new(TrErrorKind::Internal)
            .with_message("Store lock poisoned")
            .into()
    }

    pub fn failure(&self) -> Failure {
        self.cause.failure()
    }

    pub fn cause(&self) -> &TrError {
        &self.cause
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.failure().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<TrError> for ApiError {
    fn from(cause: TrError) -> Self {
        Self { cause }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(ErrorBody::for_failure(self.failure()))).into_response();
        response.extensions_mut().insert(self.cause);
        response
    }
}

/// Log a failed request once its id is known
///
/// Server-side failures log at error level, caller mistakes at debug.
pub(crate) fn log_request_failure(err: &TrError, status: StatusCode) {
    let request_id = err.request_id().map(|id| id.as_str()).unwrap_or_default();
    match err.failure() {
        Failure::Internal | Failure::Unprocessable => tracing::error!(
            status = status.as_u16(),
            request_id,
            err_code = err.code(),
            error = %err,
            "request failed"
        ),
        _ => tracing::debug!(
            status = status.as_u16(),
            request_id,
            err_code = err.code(),
            error = %err,
            "request rejected"
        ),
    }
}
