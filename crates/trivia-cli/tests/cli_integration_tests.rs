//! CLI integration tests
//!
//! Drive the `trivia` binary against a temporary database.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SEED: &str = r#"
schema_version: 0
categories:
  - id: 1
    type: Math
  - id: 2
    type: Geography
questions:
  - question: "What is 2+2?"
    answer: "4"
    category: 1
    difficulty: 1
  - question: "Capital of France?"
    answer: "Paris"
    category: 2
    difficulty: 2
"#;

fn setup(temp_dir: &TempDir) -> PathBuf {
    let seed_path = temp_dir.path().join("seed.yaml");
    fs::write(&seed_path, SEED).unwrap();
    let db_path = temp_dir.path().join("trivia.db");

    let output = run(&db_path, &["seed", "import", seed_path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "seed import failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    db_path
}

fn run(db_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trivia"))
        .arg("--db")
        .arg(db_path)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_seed_import_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let seed_path = temp_dir.path().join("seed.yaml");
    let output = run(&db_path, &["seed", "import", seed_path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Already imported"), "stdout: {}", stdout);

    let listing = stdout_json(&run(&db_path, &["questions", "list"]));
    assert_eq!(listing["total_questions"], 2);
}

#[test]
fn test_categories_list() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let body = stdout_json(&run(&db_path, &["categories", "list"]));
    assert_eq!(
        body,
        json!({
            "success": true,
            "categories": [{"id": 1, "type": "Math"}, {"id": 2, "type": "Geography"}]
        })
    );
}

#[test]
fn test_search_and_by_category() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let found = stdout_json(&run(&db_path, &["questions", "search", "CAPITAL"]));
    assert_eq!(found["questions"][0]["answer"], "Paris");

    let math = stdout_json(&run(&db_path, &["questions", "by-category", "1"]));
    assert_eq!(math["current_category"], "Math");
    assert_eq!(math["questions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_failures_exit_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let output = run(&db_path, &["questions", "search", "volcano"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));

    let output = run(&db_path, &["questions", "delete", "999"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_add_delete_and_quiz() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let created = stdout_json(&run(
        &db_path,
        &[
            "questions",
            "add",
            "--question",
            "Largest ocean?",
            "--answer",
            "Pacific",
            "--category",
            "2",
            "--difficulty",
            "2",
        ],
    ));
    assert_eq!(created["total_questions"], 3);
    let id = created["question"]["id"].as_i64().unwrap();

    let deleted = stdout_json(&run(&db_path, &["questions", "delete", &id.to_string()]));
    assert_eq!(deleted["deleted"], id);
    assert_eq!(deleted["total_questions"], 2);

    let math = stdout_json(&run(&db_path, &["questions", "by-category", "1"]));
    let math_id = math["questions"][0]["id"].as_i64().unwrap().to_string();

    let draw = stdout_json(&run(
        &db_path,
        &["quiz", "next", "--category", "1", "--previous", &math_id],
    ));
    assert_eq!(draw, json!({}));

    let draw = stdout_json(&run(
        &db_path,
        &["quiz", "next", "--previous", &math_id],
    ));
    assert_eq!(draw["question"]["answer"], "Paris");
}

#[test]
fn test_invalid_add_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let output = run(
        &db_path,
        &[
            "questions",
            "add",
            "--question",
            "Q?",
            "--answer",
            "A",
            "--category",
            "1",
            "--difficulty",
            "9",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("difficulty"));
}
