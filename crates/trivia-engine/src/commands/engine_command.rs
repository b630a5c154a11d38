//! Engine-level mutating commands.
//!
//! Validation and lookup failures keep their class (BadRequest/NotFound).
//! Anything else that goes wrong once a mutation has been accepted is
//! reported as Unprocessable, with the store failure kept as the source.

use serde::Serialize;
use trivia_core::ops::question_ops;
use trivia_core::{log_op_end, log_op_error, log_op_start};
use trivia_core::{QuestionDraft, QuestionStore, StoreResult};

use crate::commands::engine_query::tag_op;
use crate::commands::envelope::{CreatedQuestion, DeletedQuestion};

/// Engine-level commands that mutate the store.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Validate and insert a new question.
    QuestionAdd(QuestionDraft),
    /// Remove a question by id.
    QuestionDelete { question_id: i64 },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineCommandResult {
    QuestionAdd(CreatedQuestion),
    QuestionDelete(DeletedQuestion),
}

/// Apply a mutating command against the store.
///
/// # Errors
/// * `MissingField` / `InvalidField` / `CategoryNotFound` - BadRequest class
/// * `QuestionNotFound` - NotFound class
/// * any store failure - wrapped as `Unprocessable`
pub fn apply_engine_command(
    cmd: EngineCommand,
    store: &mut dyn QuestionStore,
) -> StoreResult<EngineCommandResult> {
    match cmd {
        EngineCommand::QuestionAdd(draft) => {
            log_op_start!("question_add");
            let start = std::time::Instant::now();

            let result = (|| -> StoreResult<EngineCommandResult> {
                let question = question_ops::add_question(&mut *store, &draft)?;
                let total_questions = store.count_questions()?;
                Ok(EngineCommandResult::QuestionAdd(CreatedQuestion {
                    success: true,
                    question,
                    total_questions,
                }))
            })()
            .map_err(|e| tag_op(e.into_unprocessable("question_add"), "question_add"));

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(EngineCommandResult::QuestionAdd(created)) => log_op_end!(
                    "question_add",
                    duration_ms = elapsed,
                    question_id = created.question.id
                ),
                Ok(_) => log_op_end!("question_add", duration_ms = elapsed),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("question_add", e_clone, duration_ms = elapsed);
                }
            }
            result
        }

        EngineCommand::QuestionDelete { question_id } => {
            log_op_start!("question_delete", question_id = question_id);
            let start = std::time::Instant::now();

            let result = (|| -> StoreResult<EngineCommandResult> {
                question_ops::delete_question(&mut *store, question_id)?;
                let total_questions = store.count_questions()?;
                Ok(EngineCommandResult::QuestionDelete(DeletedQuestion {
                    success: true,
                    deleted: question_id,
                    total_questions,
                }))
            })()
            .map_err(|e| {
                tag_op(
                    e.into_unprocessable("question_delete"),
                    "question_delete",
                )
            });

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => log_op_end!("question_delete", duration_ms = elapsed),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!(
                        "question_delete",
                        e_clone,
                        duration_ms = elapsed,
                        question_id = question_id
                    );
                }
            }
            result
        }
    }
}
