use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Book, BookAuthor, BookId, BookTitle};
use crate::KernelError;

/// Mutating statements. `update` and `delete` report the number of rows the
/// statement touched; zero means the addressed id does not exist. Existence
/// is never checked separately from the mutation.
#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Connection: Send;
    async fn create(
        &self,
        con: &mut Self::Connection,
        title: &BookTitle,
        author: &BookAuthor,
    ) -> error_stack::Result<BookId, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Connection,
        book: &Book,
    ) -> error_stack::Result<u64, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        id: &BookId,
    ) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
