use error_stack::Report;

use kernel::interface::query::{BookFilter, BookQuery};
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::BookStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<BookStore> for MemoryBookRepository {
    async fn find_by_id(
        &self,
        con: &mut BookStore,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let found = con.books().iter().find(|book| book.id() == id).cloned();
        Ok(found)
    }

    async fn find_all(
        &self,
        con: &mut BookStore,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let found = con
            .books()
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();
        Ok(found)
    }
}

#[async_trait::async_trait]
impl BookModifier<BookStore> for MemoryBookRepository {
    async fn create(
        &self,
        con: &mut BookStore,
        book: Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.books().iter().any(|stored| stored.id() == book.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("book id already taken: {}", book.id().as_ref())));
        }
        con.books_mut().push(book);
        Ok(())
    }

    async fn update(
        &self,
        con: &mut BookStore,
        book: Book,
    ) -> error_stack::Result<(), KernelError> {
        let books = con.books_mut();
        let index = books
            .iter()
            .position(|stored| stored.id() == book.id())
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        books[index] = book;
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut BookStore,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let books = con.books_mut();
        let index = books
            .iter()
            .position(|stored| stored.id() == book_id)
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        books.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::{BookFilter, BookQuery};
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        Book, BookDate, BookExtra, BookId, BookName, PageCount, ReadPage,
    };
    use kernel::KernelError;

    use crate::database::{MemoryBookRepository, MemoryDatabase};

    fn book(id: &str, name: &str, page_count: u32, read_page: u32, extra: Value) -> Book {
        let Value::Object(fields) = extra else {
            unreachable!()
        };
        let now = BookDate::now();
        Book::new(
            BookId::new(id),
            BookName::new(name),
            PageCount::new(page_count),
            ReadPage::new(read_page),
            BookExtra::new(fields),
            now.clone(),
            now,
        )
    }

    #[tokio::test]
    async fn create_find_update_delete() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let id = BookId::new("FCYAcrMLHBGEpWknzReU");

        let stored = book("FCYAcrMLHBGEpWknzReU", "first", 10, 0, json!({}));
        MemoryBookRepository.create(&mut con, stored.clone()).await?;

        let found = MemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(stored));

        let replaced = book("FCYAcrMLHBGEpWknzReU", "renamed", 10, 10, json!({}));
        MemoryBookRepository
            .update(&mut con, replaced.clone())
            .await?;

        let found = MemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(replaced));

        MemoryBookRepository.delete(&mut con, &id).await?;
        let found = MemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, None);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_a_taken_id() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;

        let stored = book("dup", "first", 1, 0, json!({}));
        MemoryBookRepository.create(&mut con, stored.clone()).await?;

        let err = MemoryBookRepository
            .create(&mut con, stored)
            .await
            .expect_err("duplicate id must be rejected");
        assert!(matches!(err.current_context(), KernelError::Internal));

        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_records() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;

        let err = MemoryBookRepository
            .update(&mut con, book("ghost", "nobody", 1, 0, json!({})))
            .await
            .expect_err("updating a missing record must fail");
        assert!(matches!(err.current_context(), KernelError::NotFound));

        let err = MemoryBookRepository
            .delete(&mut con, &BookId::new("ghost"))
            .await
            .expect_err("deleting a missing record must fail");
        assert!(matches!(err.current_context(), KernelError::NotFound));

        Ok(())
    }

    #[tokio::test]
    async fn find_all_filters_and_preserves_order() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;

        let reading = book("a", "Alpha", 100, 50, json!({"reading": true}));
        let finished = book("b", "Beta", 100, 100, json!({"reading": false}));
        let idle = book("c", "alphabet", 100, 10, json!({}));
        for record in [reading.clone(), finished.clone(), idle.clone()] {
            MemoryBookRepository.create(&mut con, record).await?;
        }

        let all = MemoryBookRepository
            .find_all(&mut con, &BookFilter::All)
            .await?;
        assert_eq!(all, vec![reading.clone(), finished.clone(), idle.clone()]);

        let in_progress = MemoryBookRepository
            .find_all(&mut con, &BookFilter::Reading(true))
            .await?;
        assert_eq!(in_progress, vec![reading.clone()]);

        let done = MemoryBookRepository
            .find_all(&mut con, &BookFilter::Finished(true))
            .await?;
        assert_eq!(done, vec![finished.clone()]);

        let named = MemoryBookRepository
            .find_all(&mut con, &BookFilter::name_contains("ALPHA"))
            .await?;
        assert_eq!(named, vec![reading.clone(), idle.clone()]);

        // Removal keeps the remaining order intact.
        MemoryBookRepository.delete(&mut con, &BookId::new("b")).await?;
        let rest = MemoryBookRepository
            .find_all(&mut con, &BookFilter::All)
            .await?;
        assert_eq!(rest, vec![reading, idle]);

        Ok(())
    }
}
