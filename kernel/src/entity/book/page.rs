use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageCount(u32);

impl PageCount {
    pub fn new(count: impl Into<u32>) -> Self {
        Self(count.into())
    }
}

impl AsRef<u32> for PageCount {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReadPage(u32);

impl ReadPage {
    pub fn new(page: impl Into<u32>) -> Self {
        Self(page.into())
    }
}

impl AsRef<u32> for ReadPage {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}
