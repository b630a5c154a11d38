//! Quiz command
//!
//! Usage: trivia quiz next [--category ID] [--previous 1,2,3]

use clap::{Args, Subcommand};
use std::path::Path;
use trivia_engine::{apply_engine_query, EngineQuery, QuizCategory};

use super::{open_store, print_json, CmdResult};

#[derive(Debug, Args)]
pub struct QuizArgs {
    #[command(subcommand)]
    pub command: QuizCommand,
}

#[derive(Debug, Subcommand)]
pub enum QuizCommand {
    /// Draw the next question; prints {} when none is left
    Next(NextArgs),
}

#[derive(Debug, Args)]
pub struct NextArgs {
    /// Category id, 0 for all categories
    #[arg(long, default_value_t = 0)]
    pub category: i64,

    /// Ids of questions already asked
    #[arg(long, value_delimiter = ',')]
    pub previous: Vec<i64>,
}

/// Execute quiz command
pub fn execute(args: QuizArgs, db: &Path) -> CmdResult {
    let store = open_store(db)?;
    match args.command {
        QuizCommand::Next(next) => {
            let query = EngineQuery::QuizNext {
                previous_questions: next.previous,
                quiz_category: Some(QuizCategory::with_id(next.category)),
            };
            let result = apply_engine_query(query, &store, &mut rand::thread_rng())?;
            print_json(&result)
        }
    }
}
