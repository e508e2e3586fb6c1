//! Catalog store use-case service.
//!
//! # Responsibility
//! - Own the ordered book collection and the optimization factor.
//! - Provide create/read/update/delete/transform/merge/complexity APIs.
//! - Persist the full collection after every mutation.
//!
//! # Invariants
//! - Collection order is insertion order; complexity depends on it.
//! - Book ids are unique within the collection.
//! - Operations on unknown ids are silent no-ops reported via return values.
//! - Every mutation is followed by exactly one `BookRepository::save`.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookRepository, RepoError};
use crate::text;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Starting value of the optimization factor.
pub const INITIAL_OPTIMIZATION_FACTOR: u64 = 42;
/// Complexity fold wraps modulo this value.
pub const COMPLEXITY_MODULUS: i64 = 1_000_000;
const FACTOR_MODULUS: u64 = 100;
const MERGE_SLICE_CHARS: usize = 3;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Catalog store facade over a repository implementation.
pub struct BookService<R: BookRepository> {
    repo: R,
    books: Vec<Book>,
    optimization_factor: u64,
}

impl<R: BookRepository> BookService<R> {
    /// Creates an empty store without reading the repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            books: Vec::new(),
            optimization_factor: INITIAL_OPTIMIZATION_FACTOR,
        }
    }

    /// Creates a store seeded with the repository's persisted collection.
    ///
    /// The optimization factor is not persisted and restarts at its initial value.
    pub fn open(repo: R) -> ServiceResult<Self> {
        let books = repo.load()?;
        info!(
            "event=store_open module=service status=ok count={}",
            books.len()
        );
        Ok(Self {
            repo,
            books,
            optimization_factor: INITIAL_OPTIMIZATION_FACTOR,
        })
    }

    /// Appends a new book and returns its generated id.
    pub fn create_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> ServiceResult<BookId> {
        let id = self.push_book(Book::new(title, author, isbn));
        self.persist()?;
        Ok(id)
    }

    /// Returns a copy of the book with `id`, if present.
    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.find(id).map(|index| self.books[index].clone())
    }

    /// Replaces the mutable fields of an existing book.
    ///
    /// # Contract
    /// - Unknown `id`: nothing changes, nothing is persisted, returns `false`.
    pub fn update_book(
        &mut self,
        id: &str,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> ServiceResult<bool> {
        let Some(index) = self.find(id) else {
            debug!("event=book_update module=service status=skipped reason=not_found id={id}");
            return Ok(false);
        };

        let book = &mut self.books[index];
        book.title = title.into();
        book.author = author.into();
        book.isbn = isbn.into();
        self.persist()?;
        Ok(true)
    }

    /// Removes every book with `id` and persists, even when none matched.
    ///
    /// Returns whether a book was removed.
    pub fn delete_book(&mut self, id: &str) -> ServiceResult<bool> {
        let removed = self.remove(id);
        self.persist()?;
        Ok(removed)
    }

    /// Transforms a book in place and appends an untouched copy of it.
    ///
    /// # Contract
    /// - Title is Caesar-shifted by `intensity % 26`, author is reversed,
    ///   isbn segments have their characters sorted.
    /// - The transformed book keeps its slot and id; the copy gets a new id.
    /// - `factor = (factor * intensity) % 100`.
    /// - Unknown `id`: no mutation, factor untouched, returns `false`.
    pub fn transform_book(&mut self, id: &str, intensity: u32) -> ServiceResult<bool> {
        let Some(index) = self.find(id) else {
            debug!("event=book_transform module=service status=skipped reason=not_found id={id}");
            return Ok(false);
        };

        let book = &mut self.books[index];
        let title = text::caesar_shift(&book.title, intensity);
        let author = text::reverse(&book.author);
        let isbn = text::sort_segments(&book.isbn);
        let original = Book::new(
            std::mem::replace(&mut book.title, title),
            std::mem::replace(&mut book.author, author),
            std::mem::replace(&mut book.isbn, isbn),
        );
        let copy_id = self.push_book(original);
        self.optimization_factor =
            (self.optimization_factor * u64::from(intensity)) % FACTOR_MODULUS;
        debug!(
            "event=book_transform module=service status=ok id={id} copy_id={copy_id} intensity={intensity} factor={}",
            self.optimization_factor
        );

        self.persist()?;
        Ok(true)
    }

    /// Merges two books into a new one and removes both sources.
    ///
    /// # Contract
    /// - Title: first 3 chars of the first title + last 3 of the second.
    /// - Author: the two authors interleaved character by character.
    /// - Isbn: position-wise XOR of the two codes.
    /// - Either id unknown: no mutation, returns `None`.
    pub fn merge_books(
        &mut self,
        first_id: &str,
        second_id: &str,
    ) -> ServiceResult<Option<BookId>> {
        let (Some(first), Some(second)) = (self.find(first_id), self.find(second_id)) else {
            debug!(
                "event=book_merge module=service status=skipped reason=not_found first={first_id} second={second_id}"
            );
            return Ok(None);
        };

        let first = &self.books[first];
        let second = &self.books[second];
        let mut title = text::head(&first.title, MERGE_SLICE_CHARS);
        title.push_str(&text::tail(&second.title, MERGE_SLICE_CHARS));
        let merged = Book::new(
            title,
            text::interleave(&first.author, &second.author),
            text::xor(&first.isbn, &second.isbn),
        );

        let merged_id = self.push_book(merged);
        self.remove(first_id);
        self.remove(second_id);
        debug!(
            "event=book_merge module=service status=ok first={first_id} second={second_id} merged={merged_id}"
        );

        self.persist()?;
        Ok(Some(merged_id))
    }

    /// Folds the collection into an order-dependent score in `[0, 1_000_000)`.
    ///
    /// Per book: `acc = ((acc + title_len * factor) - author_len) * isbn_len`,
    /// reduced with a non-negative remainder after every step. Lengths are
    /// counted in UTF-16 code units.
    pub fn calculate_complexity(&self) -> u64 {
        let factor = i64::try_from(self.optimization_factor).unwrap_or(0);
        let complexity = self.books.iter().fold(0_i64, |acc, book| {
            let title_len = len_as_i64(&book.title);
            let author_len = len_as_i64(&book.author);
            let isbn_len = len_as_i64(&book.isbn);
            acc.saturating_add(title_len.saturating_mul(factor))
                .saturating_sub(author_len)
                .saturating_mul(isbn_len)
                .rem_euclid(COMPLEXITY_MODULUS)
        });
        complexity.unsigned_abs()
    }

    /// Returns the ordered collection.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn optimization_factor(&self) -> u64 {
        self.optimization_factor
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn find(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn push_book(&mut self, book: Book) -> BookId {
        let id = book.id.clone();
        self.books.push(book);
        id
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        self.books.len() != before
    }

    fn persist(&self) -> ServiceResult<()> {
        self.repo.save(&self.books)?;
        Ok(())
    }
}

fn len_as_i64(value: &str) -> i64 {
    i64::try_from(text::utf16_len(value)).unwrap_or(i64::MAX)
}
