//! Trivia Store - SQLite persistence and seed import
//!
//! Provides:
//! - SQLite schema with an embedded migrations framework
//! - `SqliteStore`, the durable `QuestionStore` implementation
//! - Seed format v0 parser and importer for categories and questions

pub mod db;
pub mod errors;
mod hashing;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
