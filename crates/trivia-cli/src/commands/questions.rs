//! Question commands
//!
//! Usage:
//!   trivia questions list [--page N]
//!   trivia questions search <TERM> [--page N]
//!   trivia questions by-category <ID> [--page N]
//!   trivia questions add --question Q --answer A --category C --difficulty D
//!   trivia questions delete <ID>

use clap::{Args, Subcommand};
use std::path::Path;
use trivia_core::model::NumberInput;
use trivia_core::{PageNumber, QuestionDraft};
use trivia_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineQuery,
};

use super::{open_store, print_json, CmdResult};

#[derive(Debug, Args)]
pub struct QuestionsArgs {
    #[command(subcommand)]
    pub command: QuestionsCommand,
}

#[derive(Debug, Args)]
pub struct PageArg {
    /// Page number, 10 questions per page
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Subcommand)]
pub enum QuestionsCommand {
    /// List one page of every question
    List(PageArg),
    /// Case-insensitive search in question text
    Search {
        term: String,
        #[command(flatten)]
        page: PageArg,
    },
    /// List one page of a category's questions
    ByCategory {
        category_id: i64,
        #[command(flatten)]
        page: PageArg,
    },
    /// Add a question
    Add(AddArgs),
    /// Delete a question by id
    Delete { question_id: i64 },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub question: String,
    #[arg(long)]
    pub answer: String,
    #[arg(long)]
    pub category: i64,
    #[arg(long)]
    pub difficulty: i64,
}

impl From<AddArgs> for QuestionDraft {
    fn from(args: AddArgs) -> Self {
        QuestionDraft {
            question: Some(args.question),
            answer: Some(args.answer),
            category: Some(NumberInput::Int(args.category)),
            difficulty: Some(NumberInput::Int(args.difficulty)),
        }
    }
}

/// Execute questions command
pub fn execute(args: QuestionsArgs, db: &Path) -> CmdResult {
    let mut store = open_store(db)?;
    let mut rng = rand::thread_rng();

    let query = match args.command {
        QuestionsCommand::List(page) => EngineQuery::QuestionList {
            page: PageNumber::new(page.page),
        },
        QuestionsCommand::Search { term, page } => EngineQuery::QuestionSearch {
            term: Some(term),
            page: PageNumber::new(page.page),
        },
        QuestionsCommand::ByCategory { category_id, page } => EngineQuery::CategoryQuestions {
            category_id,
            page: PageNumber::new(page.page),
        },
        QuestionsCommand::Add(add) => {
            let result =
                apply_engine_command(EngineCommand::QuestionAdd(add.into()), &mut store)?;
            return print_json(&result);
        }
        QuestionsCommand::Delete { question_id } => {
            let result =
                apply_engine_command(EngineCommand::QuestionDelete { question_id }, &mut store)?;
            return print_json(&result);
        }
    };

    let result = apply_engine_query(query, &store, &mut rng)?;
    print_json(&result)
}
