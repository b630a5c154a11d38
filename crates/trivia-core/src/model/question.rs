use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted difficulty ordinals
pub const DIFFICULTY_RANGE: RangeInclusive<i32> = 1..=5;

/// A stored trivia question
///
/// Serializes as `{id, question, answer, category, difficulty}`, which is
/// also the shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier
    pub id: i64,

    /// Question text
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Id of the owning category
    pub category: i64,

    /// Difficulty ordinal within `DIFFICULTY_RANGE`
    pub difficulty: i32,
}

/// Validated content for a question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach the identifier assigned by the store
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_serializes_flat() {
        let q = Question {
            id: 3,
            question: "What is 2+2?".to_string(),
            answer: "4".to_string(),
            category: 1,
            difficulty: 1,
        };

        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "question": "What is 2+2?",
                "answer": "4",
                "category": 1,
                "difficulty": 1
            })
        );
    }

    #[test]
    fn test_into_question_keeps_content() {
        let new = NewQuestion {
            question: "Capital of France?".to_string(),
            answer: "Paris".to_string(),
            category: 2,
            difficulty: 2,
        };
        let q = new.clone().into_question(11);
        assert_eq!(q.id, 11);
        assert_eq!(q.question, new.question);
        assert_eq!(q.category, 2);
    }
}
