//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for every read-only intent.
//! It takes a shared store reference and never mutates it. Each query loads
//! what it needs from the store once, runs the pure core transforms and
//! applies the signaling rules (empty listing page and zero search matches
//! are NotFound, an unresolved category is BadRequest).

use std::collections::HashSet;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use trivia_core::model::NumberInput;
use trivia_core::queries::{
    category_map, next_quiz_question, paginate, questions_in_category, resolve_category, search,
    CategoryFilter,
};
use trivia_core::{log_op_end, log_op_error, log_op_start};
use trivia_core::{
    PageNumber, Question, QuestionStore, StoreResult, TrError, TriviaError, QUESTIONS_PER_PAGE,
};

use crate::commands::envelope::{
    CategoryListing, CategoryQuestions, QuestionListing, QuizDraw, SearchResults,
};

/// Category selector sent with a quiz request, `{id, type}`
///
/// `id` may arrive as an integer or a numeric string; `0` selects every
/// category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<NumberInput>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Selector for one category id (`0` for all)
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(NumberInput::Int(id)),
            kind: None,
        }
    }

    fn filter(&self) -> StoreResult<CategoryFilter> {
        let raw = self.id.as_ref().ok_or_else(|| TriviaError::MissingField {
            field: "quiz_category.id".to_string(),
        })?;
        let id = raw.as_i64().ok_or_else(|| TriviaError::InvalidField {
            field: "quiz_category.id".to_string(),
            reason: "quiz_category.id must be an integer".to_string(),
        })?;
        Ok(CategoryFilter::from_id(Some(id)))
    }
}

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// All categories, ascending by id.
    CategoryList,
    /// One page of every question.
    QuestionList { page: PageNumber },
    /// One page of questions whose text contains `term`, case-insensitively.
    ///
    /// `term: None` means the client sent no `searchTerm`.
    QuestionSearch {
        term: Option<String>,
        page: PageNumber,
    },
    /// One page of a single category's questions.
    CategoryQuestions { category_id: i64, page: PageNumber },
    /// Draw the next quiz question not in `previous_questions`.
    QuizNext {
        previous_questions: Vec<i64>,
        quiz_category: Option<QuizCategory>,
    },
}

/// Result of applying an engine query.
///
/// Serializes as the bare envelope of whichever variant it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineQueryResult {
    CategoryList(CategoryListing),
    QuestionList(QuestionListing),
    QuestionSearch(SearchResults),
    CategoryQuestions(CategoryQuestions),
    QuizNext(QuizDraw),
}

/// Apply a read-only query against the store.
///
/// `rng` is only consulted by `QuizNext`.
///
/// # Errors
/// * `EmptyPage` / `NoSearchMatches` - NotFound class
/// * `MissingField`, `InvalidField`, `MissingQuizCategory`,
///   `CategoryNotFound` - BadRequest class
/// * store failures, unchanged (Internal class)
pub fn apply_engine_query(
    query: EngineQuery,
    store: &dyn QuestionStore,
    rng: &mut dyn RngCore,
) -> StoreResult<EngineQueryResult> {
    match query {
        EngineQuery::CategoryList => run_logged("category_list", || {
            let categories = store.list_categories()?;
            Ok(EngineQueryResult::CategoryList(CategoryListing {
                success: true,
                categories,
            }))
        }),

        EngineQuery::QuestionList { page } => run_logged("question_list", || {
            let all = store.list_questions()?;
            let categories = store.list_categories()?;

            let questions = page_of(&all, page);
            if questions.is_empty() {
                return Err(TriviaError::EmptyPage { page: page.get() }.into());
            }

            Ok(EngineQueryResult::QuestionList(QuestionListing {
                success: true,
                questions,
                total_questions: all.len(),
                categories: category_map(&categories),
            }))
        }),

        EngineQuery::QuestionSearch { term, page } => run_logged("question_search", || {
            let term = term.ok_or_else(|| TriviaError::MissingField {
                field: "searchTerm".to_string(),
            })?;
            let all = store.list_questions()?;

            let matches: Vec<Question> = search(&term, &all).into_iter().cloned().collect();
            if matches.is_empty() {
                return Err(TriviaError::NoSearchMatches { term }.into());
            }

            Ok(EngineQueryResult::QuestionSearch(SearchResults {
                success: true,
                questions: page_of(&matches, page),
                total_questions: all.len(),
            }))
        }),

        EngineQuery::CategoryQuestions { category_id, page } => {
            run_logged("category_questions", || {
                let categories = store.list_categories()?;
                let category = resolve_category(category_id, &categories)?;
                let all = store.list_questions()?;

                let selected: Vec<Question> = questions_in_category(category, &all)
                    .into_iter()
                    .cloned()
                    .collect();

                Ok(EngineQueryResult::CategoryQuestions(CategoryQuestions {
                    success: true,
                    questions: page_of(&selected, page),
                    total_questions: all.len(),
                    current_category: category.kind.clone(),
                }))
            })
        }

        EngineQuery::QuizNext {
            previous_questions,
            quiz_category,
        } => run_logged("quiz_next", || {
            let filter = quiz_category
                .as_ref()
                .ok_or(TriviaError::MissingQuizCategory)?
                .filter()?;
            let excluded: HashSet<i64> = previous_questions.into_iter().collect();
            let all = store.list_questions()?;

            let question = next_quiz_question(filter, &excluded, &all, &mut *rng).cloned();
            tracing::debug!(
                excluded_len = excluded.len(),
                exhausted = question.is_none(),
                "quiz draw"
            );

            Ok(EngineQueryResult::QuizNext(QuizDraw { question }))
        }),
    }
}

/// Attach the engine op unless a lower layer already named one
pub(crate) fn tag_op(err: TrError, op: &str) -> TrError {
    if err.op().is_some() {
        err
    } else {
        err.with_op(op)
    }
}

fn page_of(items: &[Question], page: PageNumber) -> Vec<Question> {
    paginate(items, page.get(), QUESTIONS_PER_PAGE).to_vec()
}

/// Run one query body between start and end/error events
fn run_logged<F>(op: &'static str, body: F) -> StoreResult<EngineQueryResult>
where
    F: FnOnce() -> StoreResult<EngineQueryResult>,
{
    log_op_start!(op);
    let start = std::time::Instant::now();

    let result = body().map_err(|e| tag_op(e, op));

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}
