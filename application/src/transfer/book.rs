use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook { id, title, author } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone)]
pub struct UpdateBookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone)]
pub struct DeleteBookDto {
    pub id: i64,
}
