//! Shared domain primitives for the task manager backend.
//!
//! Holds the types every other crate agrees on (identifiers, timestamps)
//! and the domain-level error taxonomy. Contains no I/O.

pub mod error;
pub mod types;
