//! Book repository contracts plus JSON-file and in-memory implementations.
//!
//! # Responsibility
//! - Persist the ordered book collection as one JSON array.
//! - Load it back field-for-field in the same order.
//!
//! # Invariants
//! - File writes go to a sibling temp file first, then rename over the target.
//! - Loaded books must pass `Book::validate()` and carry unique ids.

use crate::model::book::{Book, BookValidationError};
use log::{debug, error};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const TEMP_FILE_SUFFIX: &str = "tmp";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence.
#[derive(Debug)]
pub enum RepoError {
    Io { path: PathBuf, source: io::Error },
    Serialization(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at `{}`: {source}", path.display()),
            Self::Serialization(err) => write!(f, "book serialization failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Full-state persistence contract for the catalog.
pub trait BookRepository {
    /// Loads the persisted collection in stored order.
    fn load(&self) -> RepoResult<Vec<Book>>;
    /// Replaces the persisted collection with `books`.
    fn save(&self, books: &[Book]) -> RepoResult<()>;
}

/// Repository storing the collection as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(TEMP_FILE_SUFFIX);
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: io::Error) -> RepoError {
        RepoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write_snapshot(&self, books: &[Book]) -> RepoResult<()> {
        let temp_path = self.temp_path();
        let file = fs::File::create(&temp_path).map_err(|err| self.io_error(&temp_path, err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, books)?;
        writer
            .flush()
            .map_err(|err| self.io_error(&temp_path, err))?;
        drop(writer);
        fs::rename(&temp_path, &self.path).map_err(|err| self.io_error(&self.path, err))
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> RepoResult<Vec<Book>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=books_load module=repo status=ok path={} count=0 reason=missing_file",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(&self.path, err)),
        };

        let books: Vec<Book> = serde_json::from_slice(&raw)?;
        validate_collection(&books)?;
        debug!(
            "event=books_load module=repo status=ok path={} count={}",
            self.path.display(),
            books.len()
        );
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> RepoResult<()> {
        let started_at = Instant::now();
        match self.write_snapshot(books) {
            Ok(()) => {
                debug!(
                    "event=books_save module=repo status=ok path={} count={} duration_ms={}",
                    self.path.display(),
                    books.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=books_save module=repo status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Repository keeping the last saved snapshot in memory.
///
/// Counts saves so callers can assert that a mutation was persisted.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    snapshot: RefCell<Vec<Book>>,
    save_count: Cell<usize>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose first `load` returns `books`.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            snapshot: RefCell::new(books),
            save_count: Cell::new(0),
        }
    }

    /// Returns a copy of the last saved collection.
    pub fn snapshot(&self) -> Vec<Book> {
        self.snapshot.borrow().clone()
    }

    /// Number of `save` calls observed so far.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl BookRepository for MemoryBookRepository {
    fn load(&self) -> RepoResult<Vec<Book>> {
        let books = self.snapshot();
        validate_collection(&books)?;
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> RepoResult<()> {
        *self.snapshot.borrow_mut() = books.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

fn validate_collection(books: &[Book]) -> RepoResult<()> {
    let mut seen = HashSet::with_capacity(books.len());
    for book in books {
        book.validate()?;
        if !seen.insert(book.id.as_str()) {
            return Err(RepoError::InvalidData(format!(
                "duplicate book id `{}`",
                book.id
            )));
        }
    }
    Ok(())
}
