//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds so re-imports can be detected

use crate::errors::{serialization_error, Result};
use crate::seed::format_v0::{SeedCategory, SeedQuestion, SeedV0};
use crate::hashing::sha256_hex;
use serde::Serialize;

/// Canonical representation of a seed for digest calculation
///
/// Categories are sorted by id; question order is kept because it decides
/// the ids questions receive.
#[derive(Debug, Serialize)]
struct CanonicalSeed<'a> {
    schema_version: u32,
    categories: Vec<&'a SeedCategory>,
    questions: &'a [SeedQuestion],
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let mut categories: Vec<&SeedCategory> = seed.categories.iter().collect();
    categories.sort();

    let canonical = CanonicalSeed {
        schema_version: seed.schema_version,
        categories,
        questions: &seed.questions,
    };

    let json =
        serde_json::to_string(&canonical).map_err(|e| serialization_error("seed_digest", e))?;

    Ok(sha256_hex(json.as_bytes()))
}
