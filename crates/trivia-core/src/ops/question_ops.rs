use super::store::{QuestionStore, StoreResult};
use crate::errors::{Result, TriviaError};
use crate::model::{NewQuestion, NumberInput, Question, QuestionDraft, DIFFICULTY_RANGE};

/// Validate raw add-question input field by field
///
/// Fields are checked in the order question, answer, category, difficulty
/// and the first failure is reported with the field's name. Presence is
/// checked separately from value, so `difficulty: 0` is an out-of-range
/// value rather than a missing field.
///
/// # Errors
/// * `MissingField` - a field is absent or null
/// * `InvalidField` - text is blank, a number is not an integer, or the
///   difficulty is outside `DIFFICULTY_RANGE`
pub fn validate_draft(draft: &QuestionDraft) -> Result<NewQuestion> {
    let question = required_text("question", draft.question.as_deref())?;
    let answer = required_text("answer", draft.answer.as_deref())?;
    let category = required_integer("category", draft.category.as_ref())?;
    let difficulty = required_integer("difficulty", draft.difficulty.as_ref())?;

    let difficulty = i32::try_from(difficulty)
        .ok()
        .filter(|d| DIFFICULTY_RANGE.contains(d))
        .ok_or_else(|| TriviaError::InvalidField {
            field: "difficulty".to_string(),
            reason: format!(
                "difficulty must be between {} and {}",
                DIFFICULTY_RANGE.start(),
                DIFFICULTY_RANGE.end()
            ),
        })?;

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

fn required_text(field: &str, value: Option<&str>) -> Result<String> {
    let value = value.ok_or_else(|| TriviaError::MissingField {
        field: field.to_string(),
    })?;
    if value.trim().is_empty() {
        return Err(TriviaError::InvalidField {
            field: field.to_string(),
            reason: format!("{} cannot be empty", field),
        });
    }
    Ok(value.to_string())
}

fn required_integer(field: &str, value: Option<&NumberInput>) -> Result<i64> {
    let value = value.ok_or_else(|| TriviaError::MissingField {
        field: field.to_string(),
    })?;
    value.as_i64().ok_or_else(|| TriviaError::InvalidField {
        field: field.to_string(),
        reason: format!("{} must be an integer", field),
    })
}

/// Validate and store a new question
///
/// # Errors
/// * Validation errors from `validate_draft`
/// * `CategoryNotFound` - the category id does not reference a stored category
/// * Store failures, unchanged
pub fn add_question<S>(store: &mut S, draft: &QuestionDraft) -> StoreResult<Question>
where
    S: QuestionStore + ?Sized,
{
    let new_question = validate_draft(draft)?;

    if store.get_category(new_question.category)?.is_none() {
        return Err(TriviaError::CategoryNotFound {
            category_id: new_question.category,
        }
        .into());
    }

    store.insert_question(new_question)
}

/// Delete a question by id
///
/// # Errors
/// * `QuestionNotFound` - no question has this id
/// * Store failures, unchanged
pub fn delete_question<S>(store: &mut S, question_id: i64) -> StoreResult<()>
where
    S: QuestionStore + ?Sized,
{
    if store.delete_question(question_id)? {
        Ok(())
    } else {
        Err(TriviaError::QuestionNotFound { question_id }.into())
    }
}
