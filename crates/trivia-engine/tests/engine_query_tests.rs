mod common;

use common::{question, reference_store, rng};
use serde_json::json;
use trivia_core::{Failure, MemoryStore, PageNumber, QuestionStore, TrErrorKind};
use trivia_engine::commands::envelope::QuizDraw;
use trivia_engine::{apply_engine_query, EngineQuery, EngineQueryResult, QuizCategory};

fn run(query: EngineQuery, store: &dyn QuestionStore) -> EngineQueryResult {
    apply_engine_query(query, store, &mut rng()).unwrap()
}

fn run_err(query: EngineQuery, store: &dyn QuestionStore) -> trivia_core::TrError {
    apply_engine_query(query, store, &mut rng()).unwrap_err()
}

fn big_store(count: i64) -> MemoryStore {
    let mut store = reference_store();
    for id in 3..3 + count {
        store.insert_question_with_id(question(id, &format!("Filler {}", id), "x", 1, 1));
    }
    store
}

#[test]
fn test_category_list_envelope() {
    let result = run(EngineQuery::CategoryList, &reference_store());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": true,
            "categories": [
                {"id": 1, "type": "Math"},
                {"id": 2, "type": "Geography"}
            ]
        })
    );
}

#[test]
fn test_question_list_first_page() {
    let result = run(
        EngineQuery::QuestionList {
            page: PageNumber::FIRST,
        },
        &reference_store(),
    );

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": true,
            "questions": [
                {"id": 1, "question": "What is 2+2?", "answer": "4", "category": 1, "difficulty": 1},
                {"id": 2, "question": "Capital of France?", "answer": "Paris", "category": 2, "difficulty": 2}
            ],
            "total_questions": 2,
            "categories": {"1": "Math", "2": "Geography"}
        })
    );
}

#[test]
fn test_question_list_pages_by_ten() {
    let store = big_store(20); // 22 questions

    let EngineQueryResult::QuestionList(page3) = run(
        EngineQuery::QuestionList {
            page: PageNumber::new(3),
        },
        &store,
    ) else {
        panic!("expected a question listing");
    };
    assert_eq!(page3.questions.len(), 2);
    assert_eq!(page3.total_questions, 22);
}

#[test]
fn test_question_list_empty_page_is_not_found() {
    let err = run_err(
        EngineQuery::QuestionList {
            page: PageNumber::new(2),
        },
        &reference_store(),
    );
    assert_eq!(err.kind(), TrErrorKind::EmptyPage);
    assert_eq!(err.failure(), Failure::NotFound);
}

#[test]
fn test_question_list_on_empty_store_is_not_found() {
    let err = run_err(
        EngineQuery::QuestionList {
            page: PageNumber::FIRST,
        },
        &MemoryStore::new(),
    );
    assert_eq!(err.failure(), Failure::NotFound);
}

#[test]
fn test_search_is_case_insensitive_and_counts_everything() {
    let result = run(
        EngineQuery::QuestionSearch {
            term: Some("CAPITAL".to_string()),
            page: PageNumber::FIRST,
        },
        &reference_store(),
    );

    let EngineQueryResult::QuestionSearch(found) = result else {
        panic!("expected search results");
    };
    assert_eq!(found.questions, vec![question(2, "Capital of France?", "Paris", 2, 2)]);
    assert_eq!(found.total_questions, 2);
}

#[test]
fn test_search_without_matches_is_not_found() {
    let err = run_err(
        EngineQuery::QuestionSearch {
            term: Some("volcano".to_string()),
            page: PageNumber::FIRST,
        },
        &reference_store(),
    );
    assert_eq!(err.kind(), TrErrorKind::NoMatches);
    assert_eq!(err.failure(), Failure::NotFound);
}

#[test]
fn test_search_without_term_is_bad_request() {
    let err = run_err(
        EngineQuery::QuestionSearch {
            term: None,
            page: PageNumber::FIRST,
        },
        &reference_store(),
    );
    assert_eq!(err.failure(), Failure::BadRequest);
    assert_eq!(err.field(), Some("searchTerm"));
}

#[test]
fn test_search_past_last_page_is_empty_success() {
    let result = run(
        EngineQuery::QuestionSearch {
            term: Some("".to_string()),
            page: PageNumber::new(5),
        },
        &reference_store(),
    );
    let EngineQueryResult::QuestionSearch(found) = result else {
        panic!("expected search results");
    };
    assert!(found.questions.is_empty());
}

#[test]
fn test_category_questions() {
    let result = run(
        EngineQuery::CategoryQuestions {
            category_id: 2,
            page: PageNumber::FIRST,
        },
        &reference_store(),
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": true,
            "questions": [
                {"id": 2, "question": "Capital of France?", "answer": "Paris", "category": 2, "difficulty": 2}
            ],
            "total_questions": 2,
            "current_category": "Geography"
        })
    );
}

#[test]
fn test_category_without_questions_is_empty_success() {
    let mut store = reference_store();
    store
        .upsert_category(trivia_core::Category::new(3, "Art"))
        .unwrap();

    let result = run(
        EngineQuery::CategoryQuestions {
            category_id: 3,
            page: PageNumber::FIRST,
        },
        &store,
    );
    let EngineQueryResult::CategoryQuestions(listing) = result else {
        panic!("expected category questions");
    };
    assert!(listing.questions.is_empty());
    assert_eq!(listing.current_category, "Art");
}

#[test]
fn test_unknown_category_is_bad_request() {
    let err = run_err(
        EngineQuery::CategoryQuestions {
            category_id: 1000,
            page: PageNumber::FIRST,
        },
        &reference_store(),
    );
    assert_eq!(err.failure(), Failure::BadRequest);
    assert_eq!(err.entity_id(), Some("1000"));
    assert_eq!(err.op(), Some("category_questions"));
}

#[test]
fn test_quiz_without_category_is_bad_request() {
    let err = run_err(
        EngineQuery::QuizNext {
            previous_questions: vec![],
            quiz_category: None,
        },
        &reference_store(),
    );
    assert_eq!(err.kind(), TrErrorKind::MissingQuizCategory);
    assert_eq!(err.failure(), Failure::BadRequest);
}

#[test]
fn test_quiz_in_category_after_asking_one_is_empty() {
    let result = run(
        EngineQuery::QuizNext {
            previous_questions: vec![1],
            quiz_category: Some(QuizCategory::with_id(1)),
        },
        &reference_store(),
    );
    assert_eq!(result, EngineQueryResult::QuizNext(QuizDraw { question: None }));
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({}));
}

#[test]
fn test_quiz_all_categories_returns_remaining_question() {
    let result = run(
        EngineQuery::QuizNext {
            previous_questions: vec![1],
            quiz_category: Some(QuizCategory::with_id(0)),
        },
        &reference_store(),
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "question": {"id": 2, "question": "Capital of France?", "answer": "Paris", "category": 2, "difficulty": 2}
        })
    );
}

#[test]
fn test_quiz_unknown_category_is_exhausted_not_error() {
    let result = run(
        EngineQuery::QuizNext {
            previous_questions: vec![],
            quiz_category: Some(QuizCategory::with_id(99)),
        },
        &reference_store(),
    );
    assert_eq!(result, EngineQueryResult::QuizNext(QuizDraw { question: None }));
}

#[test]
fn test_quiz_play_through_visits_each_question_once() {
    let store = big_store(8);
    let mut rng = rng();
    let mut asked = Vec::new();

    loop {
        let result = apply_engine_query(
            EngineQuery::QuizNext {
                previous_questions: asked.clone(),
                quiz_category: Some(QuizCategory::with_id(0)),
            },
            &store,
            &mut rng,
        )
        .unwrap();
        let EngineQueryResult::QuizNext(QuizDraw { question }) = result else {
            panic!("expected a quiz draw");
        };
        match question {
            Some(q) => {
                assert!(!asked.contains(&q.id), "question {} repeated", q.id);
                asked.push(q.id);
            }
            None => break,
        }
    }

    asked.sort();
    assert_eq!(asked, (1..=10).collect::<Vec<i64>>());
}
