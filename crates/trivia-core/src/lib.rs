//! Trivia Core - question query and selection kernel
//!
//! This crate holds everything that has real logic in the trivia service:
//! - Question and Category models, and validation of new questions
//! - The `QuestionStore` capability plus an in-memory implementation
//! - Pagination, case-insensitive search, category narrowing
//! - Exclusion-aware uniform quiz selection
//! - The error facility (`TriviaError` / `TrError`) and logging facility
//!
//! Persistence and transport live in `trivia-store` and `trivia-api`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;

// Re-export commonly used types
pub use errors::{Failure, Result, TrError, TrErrorKind, TriviaError};
pub use model::{Category, NewQuestion, Question, QuestionDraft};
pub use ops::{MemoryStore, QuestionStore, StoreResult};
pub use queries::{CategoryFilter, PageNumber, QUESTIONS_PER_PAGE};
