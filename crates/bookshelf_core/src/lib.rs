//! Core domain logic for the Bookshelf catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod text;
pub mod workflow;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::book::{generate_book_id, Book, BookId, BookValidationError};
pub use repo::book_repo::{
    BookRepository, JsonFileBookRepository, MemoryBookRepository, RepoError, RepoResult,
};
pub use service::book_service::{BookService, ServiceError, ServiceResult};
pub use workflow::{run_workflow, WorkflowConfig, WorkflowReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
