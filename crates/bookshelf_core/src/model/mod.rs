//! Catalog domain model.
//!
//! # Responsibility
//! - Define the one explicit record shape persisted by the catalog store.
//!
//! # Invariants
//! - Every book is identified by a non-empty `BookId`.
//! - Identifiers are unique within one store at any instant.

pub mod book;
