//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import:
//!
//! ```yaml
//! schema_version: 0
//! categories:
//!   - id: 1
//!     type: Science
//! questions:
//!   - question: "What is the heaviest organ in the human body?"
//!     answer: "The Liver"
//!     category: 1
//!     difficulty: 4
//! ```

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Categories to create or relabel
    #[serde(default)]
    pub categories: Vec<SeedCategory>,

    /// Questions to add, in order
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// Category definition in seed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeedCategory {
    /// Category id (stable across imports)
    pub id: i64,

    /// Display label
    #[serde(rename = "type")]
    pub kind: String,
}

/// Question definition in seed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    /// Id of a category in this seed or already stored
    pub category: i64,
    pub difficulty: i32,
}
