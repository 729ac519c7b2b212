use crate::database::Transaction;
use crate::entity::{Book, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Appends a fresh record. Reports `Internal` if the id is already
    /// taken, which cannot happen for generated ids.
    async fn create(
        &self,
        con: &mut Connection,
        book: Book,
    ) -> error_stack::Result<(), KernelError>;

    /// Replaces the record with the same id. Reports `NotFound` if it is
    /// no longer present.
    async fn update(
        &self,
        con: &mut Connection,
        book: Book,
    ) -> error_stack::Result<(), KernelError>;

    /// Removes the record, keeping the order of the remainder intact.
    async fn delete(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
