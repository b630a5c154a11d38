//! Subcommands and the helpers they share

pub mod categories;
pub mod questions;
pub mod quiz;
pub mod seed;
pub mod serve;

use serde::Serialize;
use std::path::Path;
use trivia_store::SqliteStore;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the database, creating and migrating it when needed
pub fn open_store(db: &Path) -> Result<SqliteStore, Box<dyn std::error::Error>> {
    Ok(SqliteStore::open(db)?)
}

/// Print an envelope as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
