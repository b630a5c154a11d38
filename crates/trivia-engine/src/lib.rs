//! Trivia Engine - Orchestration layer
//!
//! Turns client intents into store reads and mutations plus the pure core
//! transforms, and shapes the results into response envelopes.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult, QuizCategory};
