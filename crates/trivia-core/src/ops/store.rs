use std::collections::BTreeMap;

use crate::errors::{TrError, TrErrorKind};
use crate::model::{Category, NewQuestion, Question};

/// Result type for store access, using the canonical error facility
pub type StoreResult<T> = std::result::Result<T, TrError>;

/// Persistent collection of questions and categories
///
/// Every engine operation receives the store explicitly. Listings come back
/// in storage order (ascending id). Implementations report their own
/// failures as `TrError`s of kind `Persistence` (or `Io`/`Serialization`).
pub trait QuestionStore {
    /// All questions, ascending by id
    fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// One question by id
    fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Number of stored questions
    fn count_questions(&self) -> StoreResult<usize> {
        Ok(self.list_questions()?.len())
    }

    /// Store a validated question and return it with its assigned id
    fn insert_question(&mut self, question: NewQuestion) -> StoreResult<Question>;

    /// Remove a question; `false` when no question had that id
    fn delete_question(&mut self, id: i64) -> StoreResult<bool>;

    /// All categories, ascending by id
    fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// One category by id
    fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Create or relabel a category
    fn upsert_category(&mut self, category: Category) -> StoreResult<()>;
}

/// In-memory store backed by ordered maps
///
/// Ids are handed out from a monotonically increasing counter and never
/// reused, matching an autoincrement column.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            questions: BTreeMap::new(),
            categories: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-seeded with categories
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut store = Self::new();
        for category in categories {
            store.categories.insert(category.id, category);
        }
        store
    }

    /// Insert a question with a fixed id, bypassing id assignment.
    ///
    /// Used to reproduce stored fixtures; the id counter moves past `id`.
    pub fn insert_question_with_id(&mut self, question: Question) {
        self.next_id = self.next_id.max(question.id + 1);
        self.questions.insert(question.id, question);
    }
}

impl QuestionStore for MemoryStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn count_questions(&self) -> StoreResult<usize> {
        Ok(self.questions.len())
    }

    fn insert_question(&mut self, question: NewQuestion) -> StoreResult<Question> {
        if !self.categories.contains_key(&question.category) {
            return Err(TrError::new(TrErrorKind::Persistence)
                .with_op("insert_question")
                .with_entity_id(question.category.to_string())
                .with_message("FOREIGN KEY constraint failed"));
        }

        let id = self.next_id;
        self.next_id += 1;
        let stored = question.into_question(id);
        self.questions.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete_question(&mut self, id: i64) -> StoreResult<bool> {
        Ok(self.questions.remove(&id).is_some())
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    fn upsert_category(&mut self, category: Category) -> StoreResult<()> {
        self.categories.insert(category.id, category);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(category: i64) -> NewQuestion {
        NewQuestion {
            question: "What is 2+2?".to_string(),
            answer: "4".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn test_new_store() {
        let store = MemoryStore::new();
        assert_eq!(store.count_questions().unwrap(), 0);
        assert!(store.list_categories().unwrap().is_empty());
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = MemoryStore::with_categories([Category::new(1, "Math")]);

        let a = store.insert_question(new_question(1)).unwrap();
        let b = store.insert_question(new_question(1)).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.get_question(2).unwrap(), Some(b));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = MemoryStore::with_categories([Category::new(1, "Math")]);
        let a = store.insert_question(new_question(1)).unwrap();
        assert!(store.delete_question(a.id).unwrap());

        let b = store.insert_question(new_question(1)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_insert_rejects_unknown_category() {
        let mut store = MemoryStore::new();
        let err = store.insert_question(new_question(9)).unwrap_err();
        assert_eq!(err.kind(), TrErrorKind::Persistence);
    }

    #[test]
    fn test_delete_missing_returns_false() {
        let mut store = MemoryStore::new();
        assert!(!store.delete_question(42).unwrap());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut store = MemoryStore::with_categories([Category::new(1, "Math")]);
        store.insert_question_with_id(new_question(1).into_question(7));
        store.insert_question_with_id(new_question(1).into_question(3));

        let ids: Vec<i64> = store.list_questions().unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3, 7]);

        let next = store.insert_question(new_question(1)).unwrap();
        assert_eq!(next.id, 8);
    }
}
