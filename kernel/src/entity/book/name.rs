use serde::{Deserialize, Serialize};

/// Always non-empty for any record held by the catalog; emptiness is
/// rejected at the operation boundary.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookName(String);

impl BookName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<str> for BookName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookName> for String {
    fn from(value: BookName) -> Self {
        value.0
    }
}
