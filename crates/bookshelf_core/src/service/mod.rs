//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory catalog and orchestrate repository persistence.
//! - Keep callers decoupled from storage details.

pub mod book_service;
