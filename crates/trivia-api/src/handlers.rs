//! Route handlers
//!
//! Each handler decodes its inputs, hands one engine query or command to
//! the state and returns the resulting envelope. Undecodable bodies are
//! BadRequest; undecodable or negative path ids are NotFound; an
//! undecodable query string selects the first page.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use trivia_core::{PageNumber, QuestionDraft};
use trivia_engine::{
    EngineCommand, EngineCommandResult, EngineQuery, EngineQueryResult, QuizCategory,
};

use crate::error::ApiError;
use crate::state::AppState;

/// `?page=N`; anything unparseable falls back to the first page
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<String>,
}

impl PageParams {
    fn page(&self) -> PageNumber {
        PageNumber::from_raw(self.page.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        ApiError::bad_request()
    })
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    match id {
        Ok(Path(id)) if id >= 0 => Ok(id),
        Ok(Path(id)) => {
            tracing::debug!(id, "rejected negative path id");
            Err(ApiError::not_found())
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected path id");
            Err(ApiError::not_found())
        }
    }
}

fn page_param(params: Result<Query<PageParams>, QueryRejection>) -> PageNumber {
    match params {
        Ok(Query(params)) => params.page(),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "ignored query string");
            PageNumber::FIRST
        }
    }
}

/// `GET /categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    state.query(EngineQuery::CategoryList).map(Json)
}

/// `GET /questions`
pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    state
        .query(EngineQuery::QuestionList {
            page: page_param(params),
        })
        .map(Json)
}

/// `POST /questions`
pub async fn add_question(
    State(state): State<AppState>,
    body: Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<Json<EngineCommandResult>, ApiError> {
    let draft = json_body(body)?;
    state.command(EngineCommand::QuestionAdd(draft)).map(Json)
}

/// `DELETE /questions/:id`
pub async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<EngineCommandResult>, ApiError> {
    let question_id = path_id(id)?;
    state
        .command(EngineCommand::QuestionDelete { question_id })
        .map(Json)
}

/// `POST /questions/search`
pub async fn search_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let body = json_body(body)?;
    state
        .query(EngineQuery::QuestionSearch {
            term: body.search_term,
            page: page_param(params),
        })
        .map(Json)
}

/// `GET /categories/:id/questions`
pub async fn category_questions(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let category_id = path_id(id)?;
    state
        .query(EngineQuery::CategoryQuestions {
            category_id,
            page: page_param(params),
        })
        .map(Json)
}

/// `POST /quizzes`
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let body = json_body(body)?;
    state
        .query(EngineQuery::QuizNext {
            previous_questions: body.previous_questions.unwrap_or_default(),
            quiz_category: body.quiz_category,
        })
        .map(Json)
}

/// Unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
