//! Blueprint Core - Domain entities, services, and traits.
//!
//! This crate contains the exam blueprint business logic, including the
//! weight engine that splits an exam's questions across categories.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod blueprint;
pub mod constants;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
