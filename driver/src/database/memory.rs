use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::book::*;

mod book;

/// Process-lifetime storage: one ordered collection behind a single lock.
/// The collection is empty at startup and vanishes with the process.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    books: Arc<Mutex<Vec<Book>>>,
    book: MemoryBookRepository,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<BookStore> for MemoryDatabase {
    async fn transact(&self) -> error_stack::Result<BookStore, KernelError> {
        let guard = Arc::clone(&self.books).lock_owned().await;
        Ok(BookStore(guard))
    }
}

impl DependOnBookQuery<BookStore> for MemoryDatabase {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.book
    }
}

impl DependOnBookModifier<BookStore> for MemoryDatabase {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.book
    }
}

/// Owned guard over the collection. Holding it for the length of a service
/// call keeps each read-modify-write sequence atomic.
pub struct BookStore(OwnedMutexGuard<Vec<Book>>);

impl BookStore {
    pub(in crate::database) fn books(&self) -> &[Book] {
        self.0.as_slice()
    }

    pub(in crate::database) fn books_mut(&mut self) -> &mut Vec<Book> {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for BookStore {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        // Mutations through the guard are in place already; releasing the
        // lock is all that remains.
        Ok(())
    }
}
