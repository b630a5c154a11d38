//! Command orchestration layer.
//!
//! Provides the query and command entry points that coordinate between
//! core logic and the injected store.

pub mod engine_command;
pub mod engine_query;
pub mod envelope;
