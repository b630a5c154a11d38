//! Seed importer orchestration
//!
//! Applies a validated seed to SQLite inside one transaction and records its
//! digest so the same seed is applied at most once

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::{insert_question_on, upsert_category_on};
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parse_seed_file_with_db, parse_seed_str_with_db};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use trivia_core::{Category, NewQuestion};

/// Outcome of a seed import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedImportReport {
    /// Canonical digest of the seed
    pub digest: String,
    /// Categories created or relabeled
    pub categories: usize,
    /// Questions added
    pub questions: usize,
    /// True when the digest was already recorded and nothing was written
    pub already_applied: bool,
}

/// Import a seed file into the database
///
/// This is the main entry point for seed import. It:
/// 1. Parses and validates the seed YAML (category references may point at
///    categories already stored)
/// 2. Computes the seed digest and stops if it was imported before
/// 3. Upserts categories and inserts questions within a transaction
/// 4. Records the digest in `seed_imports`
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<SeedImportReport> {
    let seed = parse_seed_file_with_db(path, Some(&*conn))?;
    apply_seed(&seed, conn)
}

/// Import a seed held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<SeedImportReport> {
    let seed = parse_seed_str_with_db(content, Some(&*conn))?;
    apply_seed(&seed, conn)
}

fn apply_seed(seed: &SeedV0, conn: &mut Connection) -> Result<SeedImportReport> {
    let digest = compute_seed_digest(seed)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let seen = tx
        .query_row(
            "SELECT 1 FROM seed_imports WHERE digest = ?1",
            [&digest],
            |_| Ok(()),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if seen.is_some() {
        tracing::info!(digest = %digest, "seed already imported, skipping");
        return Ok(SeedImportReport {
            digest,
            categories: 0,
            questions: 0,
            already_applied: true,
        });
    }

    for category in &seed.categories {
        upsert_category_on(&tx, &Category::new(category.id, category.kind.clone()))?;
    }

    for question in &seed.questions {
        insert_question_on(
            &tx,
            NewQuestion {
                question: question.question.clone(),
                answer: question.answer.clone(),
                category: question.category,
                difficulty: question.difficulty,
            },
        )?;
    }

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO seed_imports (digest, imported_at, category_count, question_count)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            digest,
            now,
            seed.categories.len() as i64,
            seed.questions.len() as i64
        ],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        digest = %digest,
        categories = seed.categories.len(),
        questions = seed.questions.len(),
        "seed imported"
    );

    Ok(SeedImportReport {
        digest,
        categories: seed.categories.len(),
        questions: seed.questions.len(),
        already_applied: false,
    })
}
