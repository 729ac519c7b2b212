use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookDate, BookId, BookName, DestructBook, PageCount, ReadPage,
};
use kernel::KernelError;

use crate::transfer::{
    BookDeleted, BookUpdated, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto,
    UpdateBookDto,
};

const NAME_REQUIRED: &str = "name is required";
const READ_PAGE_OVERFLOW: &str = "readPage must not exceed pageCount";

/// Boundary validation in the order the API promises: name first, then the
/// page counters. Runs before any existence check.
fn validate_book_payload(
    name: Option<String>,
    page_count: u32,
    read_page: u32,
) -> error_stack::Result<BookName, KernelError> {
    let name = name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Report::new(KernelError::Validation(NAME_REQUIRED)))?;
    if read_page > page_count {
        return Err(Report::new(KernelError::Validation(READ_PAGE_OVERFLOW)));
    }
    Ok(BookName::new(name))
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookId, KernelError> {
        let name = validate_book_payload(dto.name, dto.page_count, dto.read_page)?;

        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(Uuid::new_v4().simple().to_string());
        let now = BookDate::now();
        let book = Book::new(
            id.clone(),
            name,
            PageCount::new(dto.page_count),
            ReadPage::new(dto.read_page),
            dto.extra,
            now.clone(),
            now,
        );

        self.book_modifier().create(&mut connection, book).await?;
        connection.commit().await?;

        Ok(id)
    }
}

impl<Connection: Transaction, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<Book>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book = self
            .book_query()
            .find_by_id(&mut connection, &dto.id)
            .await?;

        Ok(book)
    }
}

impl<Connection: Transaction, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetAllBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_all(&self, dto: GetAllBookDto) -> error_stack::Result<Vec<Book>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = dto.into_filter();
        let books = self
            .book_query()
            .find_all(&mut connection, &filter)
            .await?;

        Ok(books)
    }
}

impl<Connection: Transaction, T> GetAllBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<BookUpdated, KernelError> {
        // Payload validation answers before the existence check, so a bad
        // payload reports 400 even for an unknown id.
        let name = validate_book_payload(dto.name, dto.page_count, dto.read_page)?;

        let mut connection = self.database_connection().transact().await?;

        let existing = self
            .book_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let DestructBook {
            id,
            extra,
            inserted_at,
            ..
        } = existing.into_destruct();
        let book = Book::new(
            id,
            name,
            PageCount::new(dto.page_count),
            ReadPage::new(dto.read_page),
            extra.merge(dto.extra),
            inserted_at,
            BookDate::now(),
        );

        self.book_modifier().update(&mut connection, book).await?;
        connection.commit().await?;

        Ok(BookUpdated)
    }
}

impl<Connection: Transaction, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<BookDeleted, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.book_modifier()
            .delete(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(BookDeleted)
    }
}

impl<Connection: Transaction, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::service::book::{validate_book_payload, NAME_REQUIRED, READ_PAGE_OVERFLOW};

    #[test]
    fn missing_or_empty_name_is_rejected_first() {
        for name in [None, Some(String::new())] {
            // readPage also overflows here; the name message must win.
            let err = validate_book_payload(name, 10, 20).expect_err("payload must be rejected");
            assert!(
                matches!(err.current_context(), KernelError::Validation(reason) if *reason == NAME_REQUIRED)
            );
        }
    }

    #[test]
    fn read_page_must_not_exceed_page_count() {
        let err = validate_book_payload(Some("Rust".into()), 100, 101)
            .expect_err("payload must be rejected");
        assert!(
            matches!(err.current_context(), KernelError::Validation(reason) if *reason == READ_PAGE_OVERFLOW)
        );
    }

    #[test]
    fn boundary_values_pass() {
        assert!(validate_book_payload(Some("Rust".into()), 100, 100).is_ok());
        assert!(validate_book_payload(Some("Rust".into()), 0, 0).is_ok());
    }
}
