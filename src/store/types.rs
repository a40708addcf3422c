//! Book record types
//!
//! `Book` is the stored record. `NewBook` and `BookPatch` are the
//! already-validated inputs to create and update.

use serde::Serialize;

/// Book identifier, assigned sequentially starting at 1.
pub type BookId = u64;

/// A book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub finished: bool,
}

/// Fields for a book that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub finished: bool,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, finished: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            finished,
        }
    }
}

/// Partial update. `None` means the field was not provided and is left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub finished: Option<bool>,
}

impl BookPatch {
    /// True when no field would be changed
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.finished.is_none()
    }

    /// Apply every provided field to `book`
    pub fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(finished) = self.finished {
            book.finished = finished;
        }
    }
}
