//! Seed parser with validation
//!
//! Parses YAML and validates schema version, category uniqueness, question
//! fields and category references

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use trivia_core::model::DIFFICULTY_RANGE;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    parse_seed_file_with_db(path, None)
}

/// Parse a seed file from a path, resolving category references against the
/// database as well as the seed itself
pub fn parse_seed_file_with_db(path: &Path, conn: Option<&Connection>) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str_with_db(&content, conn)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    parse_seed_str_with_db(content, None)
}

/// Parse a seed from a string with optional database context
pub fn parse_seed_str_with_db(content: &str, conn: Option<&Connection>) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed, conn)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0, conn: Option<&Connection>) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut category_ids = HashSet::new();
    for category in &seed.categories {
        if !category_ids.insert(category.id) {
            return Err(seed_validation(&format!(
                "Duplicate category id {}",
                category.id
            )));
        }
        if category.kind.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Category {} has an empty type",
                category.id
            )));
        }
    }

    for (index, question) in seed.questions.iter().enumerate() {
        if question.question.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Question #{} has empty question text",
                index + 1
            )));
        }
        if question.answer.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Question #{} has an empty answer",
                index + 1
            )));
        }
        if !DIFFICULTY_RANGE.contains(&question.difficulty) {
            return Err(seed_validation(&format!(
                "Question #{} has difficulty {} outside {}..={}",
                index + 1,
                question.difficulty,
                DIFFICULTY_RANGE.start(),
                DIFFICULTY_RANGE.end()
            )));
        }
        if !category_ids.contains(&question.category)
            && !category_in_db(conn, question.category)?
        {
            return Err(seed_validation(&format!(
                "Question #{} references non-existent category {}",
                index + 1,
                question.category
            )));
        }
    }

    Ok(())
}

fn category_in_db(conn: Option<&Connection>, id: i64) -> Result<bool> {
    let Some(conn) = conn else {
        return Ok(false);
    };
    let found = conn
        .query_row("SELECT 1 FROM categories WHERE id = ?1", [id], |_| Ok(()))
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}
