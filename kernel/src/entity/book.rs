mod date;
mod extra;
mod id;
mod name;
mod page;

pub use self::{date::*, extra::*, id::*, name::*, page::*};
use destructure::Destructure;

/// One catalog record. `finished` is always derived from the page counters
/// and never taken from the caller.
#[derive(Debug, Clone, PartialEq, Destructure)]
pub struct Book {
    id: BookId,
    name: BookName,
    page_count: PageCount,
    read_page: ReadPage,
    finished: bool,
    extra: BookExtra,
    inserted_at: BookDate,
    updated_at: BookDate,
}

impl Book {
    pub fn new(
        id: BookId,
        name: BookName,
        page_count: PageCount,
        read_page: ReadPage,
        extra: BookExtra,
        inserted_at: BookDate,
        updated_at: BookDate,
    ) -> Self {
        let finished = read_page.as_ref() == page_count.as_ref();
        Self {
            id,
            name,
            page_count,
            read_page,
            finished,
            extra,
            inserted_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &BookName {
        &self.name
    }

    pub fn page_count(&self) -> &PageCount {
        &self.page_count
    }

    pub fn read_page(&self) -> &ReadPage {
        &self.read_page
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn extra(&self) -> &BookExtra {
        &self.extra
    }

    pub fn inserted_at(&self) -> &BookDate {
        &self.inserted_at
    }

    pub fn updated_at(&self) -> &BookDate {
        &self.updated_at
    }
}
