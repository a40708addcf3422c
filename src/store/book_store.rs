//! In-memory book store
//!
//! Ordered list of books plus a monotonic id counter. Ids are never reused,
//! even after the book holding one is deleted.

use std::sync::{Arc, RwLock};

use super::types::{Book, BookId, BookPatch, NewBook};

/// Store handle shared with the HTTP layer
pub type SharedBookStore = Arc<RwLock<BookStore>>;

/// The book list and its id counter
#[derive(Debug)]
pub struct BookStore {
    books: Vec<Book>,
    next_id: BookId,
}

impl BookStore {
    /// Create an empty store. The first book gets id 1.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the startup records
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for book in seed_books() {
            store.create(book);
        }
        store
    }

    /// Wrap the store in a shareable handle
    pub fn into_shared(self) -> SharedBookStore {
        Arc::new(RwLock::new(self))
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Assign the next id and append
    pub fn create(&mut self, fields: NewBook) -> Book {
        let book = Book {
            id: self.allocate_id(),
            title: fields.title,
            author: fields.author,
            finished: fields.finished,
        };
        self.books.push(book.clone());
        book
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Apply a partial update in place and return the updated record
    pub fn update(&mut self, id: BookId, patch: BookPatch) -> Option<Book> {
        let book = self.books.iter_mut().find(|book| book.id == id)?;
        patch.apply_to(book);
        Some(book.clone())
    }

    /// Remove a book, keeping the relative order of the rest
    pub fn delete(&mut self, id: BookId) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(index))
    }

    fn allocate_id(&mut self) -> BookId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Records every process starts with
pub fn seed_books() -> Vec<NewBook> {
    vec![
        NewBook::new("Midnight's Children", "Salman Rushdie", false),
        NewBook::new("Hyperion", "Dan Simmons", true),
        NewBook::new("The Vampire Lestat", "Anne Rice", true),
    ]
}
