use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait GetAllBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let books = self.book_query().get_all(&mut connection).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let title = BookTitle::new(dto.title);
        let author = BookAuthor::new(dto.author);
        let id = self
            .book_modifier()
            .create(&mut connection, &title, &author)
            .await?;

        Ok(BookDto::from(Book::new(id, title, author)))
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let book = Book::new(
            BookId::new(dto.id),
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
        );
        let affected = self.book_modifier().update(&mut connection, &book).await?;
        if affected == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book matched id {}", dto.id)));
        }

        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let id = BookId::new(dto.id);
        let affected = self.book_modifier().delete(&mut connection, &id).await?;
        if affected == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book matched id {}", dto.id)));
        }

        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}
