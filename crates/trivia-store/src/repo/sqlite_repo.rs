//! SQLite repository implementation
//!
//! `SqliteStore` owns one connection and implements `QuestionStore` over the
//! `questions` and `categories` tables.

use crate::errors::{from_rusqlite, Result};
use crate::{db, migrations};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use trivia_core::{Category, NewQuestion, Question, QuestionStore, StoreResult};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Durable question store backed by a SQLite database
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file, configure it and apply migrations
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a migrated in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection, configuring and migrating it
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Borrow the underlying connection mutably (for transactions)
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

/// Insert a question on any connection or transaction
pub(crate) fn insert_question_on(conn: &Connection, question: NewQuestion) -> Result<Question> {
    conn.execute(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            question.question,
            question.answer,
            question.category,
            question.difficulty
        ],
    )
    .map_err(from_rusqlite)?;

    let id = conn.last_insert_rowid();
    Ok(question.into_question(id))
}

/// Create or relabel a category on any connection or transaction
pub(crate) fn upsert_category_on(conn: &Connection, category: &Category) -> Result<()> {
    conn.execute(
        "INSERT INTO categories (id, type) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET type = excluded.type",
        rusqlite::params![category.id, category.kind],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

impl QuestionStore for SqliteStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS))
            .map_err(from_rusqlite)?;
        let questions = stmt
            .query_map([], question_from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(questions)
    }

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
                [id],
                question_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn count_questions(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn insert_question(&mut self, question: NewQuestion) -> StoreResult<Question> {
        insert_question_on(&self.conn, question)
    }

    fn delete_question(&mut self, id: i64) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")
            .map_err(from_rusqlite)?;
        let categories = stmt
            .query_map([], category_from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(categories)
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        self.conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                [id],
                category_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn upsert_category(&mut self, category: Category) -> StoreResult<()> {
        upsert_category_on(&self.conn, &category)
    }
}
