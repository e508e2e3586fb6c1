//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record and its JSON wire shape.
//! - Generate fresh opaque identifiers.
//!
//! # Invariants
//! - `id` is non-empty and never reassigned after creation.
//! - `isbn` is free text; hyphens delimit segments but are not enforced.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque book identifier.
///
/// Kept as a plain string so persisted ids from older files load unchanged.
pub type BookId = String;

/// Validation errors for book invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Identifier is empty or whitespace-only.
    EmptyId,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "book id cannot be empty"),
        }
    }
}

impl Error for BookValidationError {}

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identifier, unique within one store.
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Catalog code made of hyphen-delimited segments.
    pub isbn: String,
}

impl Book {
    /// Creates a new book with a freshly generated identifier.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_book_id(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Creates a book with a caller-provided identifier.
    ///
    /// Used by import paths and tests where identity already exists.
    ///
    /// # Errors
    /// - Returns `BookValidationError::EmptyId` when `id` is blank.
    pub fn with_id(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Result<Self, BookValidationError> {
        let book = Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        };
        book.validate()?;
        Ok(book)
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.id.trim().is_empty() {
            return Err(BookValidationError::EmptyId);
        }
        Ok(())
    }
}

/// Generates a fresh identifier: 16 random bytes as 32 lowercase hex chars.
pub fn generate_book_id() -> BookId {
    Uuid::new_v4().simple().to_string()
}
