mod author;
mod id;
mod title;

pub use self::{author::*, id::*, title::*};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor) -> Self {
        Self { id, title, author }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn into_destruct(self) -> DestructBook {
        DestructBook {
            id: self.id,
            title: self.title,
            author: self.author,
        }
    }
}

/// Field-wise decomposition of [`Book`], for presenters that consume the
/// entity by value.
pub struct DestructBook {
    pub id: BookId,
    pub title: BookTitle,
    pub author: BookAuthor,
}
