use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;

use kernel::KernelError;

use crate::response::FailureResponse;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl ErrorStatus {
    pub fn book_not_found() -> Self {
        Self(Report::new(KernelError::NotFound))
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (code, message) = match self.0.current_context() {
            KernelError::Validation(reason) => (StatusCode::BAD_REQUEST, *reason),
            KernelError::NotFound => (StatusCode::NOT_FOUND, "Book not found"),
            KernelError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        (code, Json(FailureResponse::new(message))).into_response()
    }
}
