//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the full-state persistence contract used by the catalog service.
//! - Isolate file format and filesystem details from service logic.
//!
//! # Invariants
//! - `save` always replaces the whole persisted collection.
//! - `load` rejects invalid persisted state instead of masking it.

pub mod book_repo;
