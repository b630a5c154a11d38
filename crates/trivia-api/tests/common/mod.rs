use trivia_api::{build_router, AppState};
use trivia_core::{Category, MemoryStore, Question};

/// Math(1) and Geography(2) with the two reference questions
#[allow(dead_code)]
pub fn reference_store() -> MemoryStore {
    let mut store =
        MemoryStore::with_categories([Category::new(1, "Math"), Category::new(2, "Geography")]);
    store.insert_question_with_id(Question {
        id: 1,
        question: "What is 2+2?".to_string(),
        answer: "4".to_string(),
        category: 1,
        difficulty: 1,
    });
    store.insert_question_with_id(Question {
        id: 2,
        question: "Capital of France?".to_string(),
        answer: "Paris".to_string(),
        category: 2,
        difficulty: 2,
    });
    store
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
#[allow(dead_code)]
pub async fn spawn_test_server(state: AppState) -> String {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

#[allow(dead_code)]
pub async fn spawn_reference_server() -> String {
    spawn_test_server(AppState::new(reference_store())).await
}
