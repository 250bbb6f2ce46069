//! SQLite storage implementation for the exam blueprint.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `blueprint-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The blueprint repository (categories and NEC references)
//! - Default seed data
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!   core (domain, weight engine)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod blueprint;
pub mod db;
pub mod errors;
pub mod schema;
pub mod seed;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from blueprint-core for convenience
pub use blueprint_core::errors::{DatabaseError, Error, Result};
