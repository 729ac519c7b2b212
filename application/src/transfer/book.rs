use kernel::interface::query::BookFilter;
use kernel::prelude::entity::{BookExtra, BookId};

#[derive(Debug)]
pub struct CreateBookDto {
    pub name: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub extra: BookExtra,
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: BookId,
}

#[derive(Debug)]
pub struct GetAllBookDto {
    pub reading: Option<String>,
    pub finished: Option<String>,
    pub name: Option<String>,
}

impl GetAllBookDto {
    /// Resolves the single predicate that applies: `reading` wins over
    /// `finished`, which wins over a non-empty `name`. Flag parameters
    /// decode as "1" = true, anything else = false.
    pub fn into_filter(self) -> BookFilter {
        if let Some(reading) = self.reading {
            BookFilter::Reading(reading == "1")
        } else if let Some(finished) = self.finished {
            BookFilter::Finished(finished == "1")
        } else if let Some(name) = self.name.filter(|name| !name.is_empty()) {
            BookFilter::name_contains(name)
        } else {
            BookFilter::All
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookDto {
    pub id: BookId,
    pub name: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub extra: BookExtra,
}

#[derive(Debug)]
pub struct DeleteBookDto {
    pub id: BookId,
}

/// Outcome marker for a completed update.
#[derive(Debug)]
pub struct BookUpdated;

/// Outcome marker for a completed removal.
#[derive(Debug)]
pub struct BookDeleted;
