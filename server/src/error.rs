use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::json;

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

static NOT_FOUND_MESSAGE: &str = "Book not found";
static VALIDATION_MESSAGE: &str = "Title and author are required";

/// Converts an operation failure into the wire contract: 400/404 carry fixed
/// messages, everything else becomes a 500 with the operation's generic
/// message. The underlying report is logged here and never echoed to clients.
#[derive(Debug)]
pub struct ErrorStatus {
    report: Report<KernelError>,
    on_failure: &'static str,
}

impl ErrorStatus {
    pub fn fetching(report: Report<KernelError>) -> Self {
        Self {
            report,
            on_failure: "Error fetching books",
        }
    }

    pub fn adding(report: Report<KernelError>) -> Self {
        Self {
            report,
            on_failure: "Error adding book",
        }
    }

    pub fn updating(report: Report<KernelError>) -> Self {
        Self {
            report,
            on_failure: "Error updating book",
        }
    }

    pub fn deleting(report: Report<KernelError>) -> Self {
        Self {
            report,
            on_failure: "Error deleting book",
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self.report.current_context() {
            KernelError::Validation => (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE),
            KernelError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            KernelError::Timeout | KernelError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.on_failure)
            }
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{:?}", self.report);
        }
        (status, Json(json!({ "message": message }))).into_response()
    }
}
