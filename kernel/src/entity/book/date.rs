use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Record bookkeeping timestamp, serialized as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookDate(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl BookDate {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}

impl AsRef<OffsetDateTime> for BookDate {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}
