use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    /// Rejected request payload. Carries the message reported to the client.
    Validation(&'static str),
    NotFound,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(reason) => write!(f, "{reason}"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
