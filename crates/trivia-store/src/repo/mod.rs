//! Repository layer
//!
//! Bridges the trivia-core store capability to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteStore;
