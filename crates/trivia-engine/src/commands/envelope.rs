//! Response envelopes for every client intent.
//!
//! All types are plain serializable data. Field names are the public JSON
//! contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trivia_core::{Category, Question};

/// `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// One page of the unfiltered question listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionListing {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of every stored question
    pub total_questions: usize,
    /// Category id to label
    pub categories: BTreeMap<i64, String>,
}

/// One page of search matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// One page of a single category's questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuestions {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Label of the requested category
    pub current_category: String,
}

/// Next quiz question; serializes as `{}` once the quiz is exhausted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDraw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// Successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedQuestion {
    pub success: bool,
    pub deleted: i64,
    pub total_questions: usize,
}

/// Successful insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedQuestion {
    pub success: bool,
    pub question: Question,
    pub total_questions: usize,
}
