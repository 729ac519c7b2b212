use serde::Serialize;

pub use self::book::*;

mod book;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Envelope for every failure outcome.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    status: ResponseStatus,
    message: &'static str,
}

impl FailureResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message,
        }
    }
}
