use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Error, Pool, Sqlite};

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::book::*;

mod book;

static SQLITE_URL: &str = "SQLITE_URL";
static DEFAULT_SQLITE_URL: &str = "sqlite:books.db?mode=rwc";

pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(SQLITE_URL).unwrap_or_else(|_| DEFAULT_SQLITE_URL.to_string());
        Self::connect(&url).await
    }

    pub async fn connect(url: &str) -> error_stack::Result<Self, KernelError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .convert_error()?;

        // WAL keeps concurrent writes from blocking reads on the shared pool
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .convert_error()?;

        migrate(&pool).await?;
        tracing::info!("Connected to SQLite database");

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn migrate(pool: &Pool<Sqlite>) -> error_stack::Result<(), KernelError> {
    // language=sqlite
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .convert_error()?;
    Ok(())
}

#[async_trait::async_trait]
impl DatabaseConnection for SqliteDatabase {
    type Connection = PoolConnection<Sqlite>;
    async fn acquire(&self) -> error_stack::Result<PoolConnection<Sqlite>, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(con)
    }
}

impl DependOnBookQuery for SqliteDatabase {
    type BookQuery = SqliteBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &SqliteBookRepository
    }
}

impl DependOnBookModifier for SqliteDatabase {
    type BookModifier = SqliteBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &SqliteBookRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
