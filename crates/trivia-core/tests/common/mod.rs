use trivia_core::{Category, MemoryStore, NewQuestion, Question, QuestionStore};

/// Empty store with the Math and Geography categories
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::with_categories([Category::new(1, "Math"), Category::new(2, "Geography")])
}

/// Store holding the two reference questions:
/// `{1, "What is 2+2?", "4", 1, 1}` and `{2, "Capital of France?", "Paris", 2, 2}`
#[allow(dead_code)]
pub fn two_question_store() -> MemoryStore {
    let mut store = new_store();
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

/// Insert `count` questions into `category`, returning them in insertion order
#[allow(dead_code)]
pub fn fill_category(store: &mut MemoryStore, category: i64, count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| {
            store
                .insert_question(NewQuestion {
                    question: format!("Question {} in category {}", i, category),
                    answer: format!("Answer {}", i),
                    category,
                    difficulty: 1 + (i % 5) as i32,
                })
                .unwrap()
        })
        .collect()
}
