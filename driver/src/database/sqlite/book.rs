use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

pub struct SqliteBookRepository;

#[async_trait::async_trait]
impl BookQuery for SqliteBookRepository {
    type Connection = PoolConnection<Sqlite>;

    async fn get_all(
        &self,
        con: &mut PoolConnection<Sqlite>,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        SqliteBookInternal::get_all(con).await.convert_error()
    }

    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Sqlite>,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        SqliteBookInternal::find_by_id(con, id).await.convert_error()
    }
}

#[async_trait::async_trait]
impl BookModifier for SqliteBookRepository {
    type Connection = PoolConnection<Sqlite>;

    async fn create(
        &self,
        con: &mut PoolConnection<Sqlite>,
        title: &BookTitle,
        author: &BookAuthor,
    ) -> error_stack::Result<BookId, KernelError> {
        SqliteBookInternal::create(con, title, author)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PoolConnection<Sqlite>,
        book: &Book,
    ) -> error_stack::Result<u64, KernelError> {
        SqliteBookInternal::update(con, book).await.convert_error()
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Sqlite>,
        id: &BookId,
    ) -> error_stack::Result<u64, KernelError> {
        SqliteBookInternal::delete(con, id).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
        )
    }
}

pub(in crate::database) struct SqliteBookInternal;

impl SqliteBookInternal {
    async fn get_all(con: &mut SqliteConnection) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=sqlite
            r#"
            SELECT id, title, author
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(
        con: &mut SqliteConnection,
        id: &BookId,
    ) -> Result<Option<Book>, DriverError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=sqlite
            r#"
            SELECT id, title, author
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Book::from))
    }

    async fn create(
        con: &mut SqliteConnection,
        title: &BookTitle,
        author: &BookAuthor,
    ) -> Result<BookId, DriverError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            INSERT INTO books (title, author)
            VALUES (?, ?)
            "#,
        )
        .bind(title.as_ref())
        .bind(author.as_ref())
        .execute(con)
        .await?;
        Ok(BookId::new(result.last_insert_rowid()))
    }

    async fn update(con: &mut SqliteConnection, book: &Book) -> Result<u64, DriverError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            UPDATE books
            SET title = ?, author = ?
            WHERE id = ?
            "#,
        )
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.id().as_ref())
        .execute(con)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(con: &mut SqliteConnection, id: &BookId) -> Result<u64, DriverError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            DELETE FROM books
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(result.rows_affected())
    }
}
