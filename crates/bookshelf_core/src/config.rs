//! Runtime configuration for embedders and the driver executable.
//!
//! Plain structs with defaults; no config files and no environment lookups.

use crate::logging::{default_log_level, LogTarget};
use crate::repo::book_repo::JsonFileBookRepository;
use crate::service::book_service::{BookService, ServiceResult};
use std::path::PathBuf;

/// Default persisted catalog file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "books.json";

/// Core configuration: where the catalog lives and how to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// JSON file rewritten after every mutation.
    pub data_file: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    pub log_target: LogTarget,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level().to_string(),
            log_target: LogTarget::Console,
        }
    }
}

impl CoreConfig {
    /// Builds the file repository for `data_file`.
    pub fn repository(&self) -> JsonFileBookRepository {
        JsonFileBookRepository::new(self.data_file.clone())
    }

    /// Opens a catalog store backed by `data_file`, loading existing books.
    pub fn open_service(&self) -> ServiceResult<BookService<JsonFileBookRepository>> {
        BookService::open(self.repository())
    }

    /// Creates an empty catalog store that writes to `data_file`.
    ///
    /// Existing file contents are never read; the first mutation overwrites them.
    pub fn fresh_service(&self) -> BookService<JsonFileBookRepository> {
        BookService::new(self.repository())
    }
}
