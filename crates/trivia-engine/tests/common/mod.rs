use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::errors::{TrError, TrErrorKind};
use trivia_core::model::NumberInput;
use trivia_core::{
    Category, MemoryStore, NewQuestion, Question, QuestionDraft, QuestionStore, StoreResult,
};

/// Store with Math(1) and Geography(2) and the two reference questions
#[allow(dead_code)]
pub fn reference_store() -> MemoryStore {
    let mut store =
        MemoryStore::with_categories([Category::new(1, "Math"), Category::new(2, "Geography")]);
    store.insert_question_with_id(question(1, "What is 2+2?", "4", 1, 1));
    store.insert_question_with_id(question(2, "Capital of France?", "Paris", 2, 2));
    store
}

#[allow(dead_code)]
pub fn question(id: i64, text: &str, answer: &str, category: i64, difficulty: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

#[allow(dead_code)]
pub fn draft(text: &str, answer: &str, category: i64, difficulty: i64) -> QuestionDraft {
    QuestionDraft {
        question: Some(text.to_string()),
        answer: Some(answer.to_string()),
        category: Some(NumberInput::Int(category)),
        difficulty: Some(NumberInput::Int(difficulty)),
    }
}

#[allow(dead_code)]
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Which store calls should fail
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Reads,
    Writes,
}

/// Wraps a store and fails the selected class of calls with a persistence error
#[allow(dead_code)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_on: FailOn,
}

#[allow(dead_code)]
impl FailingStore {
    pub fn new(inner: MemoryStore, fail_on: FailOn) -> Self {
        Self { inner, fail_on }
    }

    fn check(&self, class: FailOn) -> StoreResult<()> {
        if self.fail_on == class {
            Err(TrError::new(TrErrorKind::Persistence)
                .with_op("sqlite")
                .with_message("database is locked"))
        } else {
            Ok(())
        }
    }
}

impl QuestionStore for FailingStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.check(FailOn::Reads)?;
        self.inner.list_questions()
    }

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        self.check(FailOn::Reads)?;
        self.inner.get_question(id)
    }

    fn insert_question(&mut self, question: NewQuestion) -> StoreResult<Question> {
        self.check(FailOn::Writes)?;
        self.inner.insert_question(question)
    }

    fn delete_question(&mut self, id: i64) -> StoreResult<bool> {
        self.check(FailOn::Writes)?;
        self.inner.delete_question(id)
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check(FailOn::Reads)?;
        self.inner.list_categories()
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        self.check(FailOn::Reads)?;
        self.inner.get_category(id)
    }

    fn upsert_category(&mut self, category: Category) -> StoreResult<()> {
        self.check(FailOn::Writes)?;
        self.inner.upsert_category(category)
    }
}
