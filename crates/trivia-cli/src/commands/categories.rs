//! Category commands
//!
//! Usage: trivia categories list

use clap::{Args, Subcommand};
use std::path::Path;
use trivia_engine::{apply_engine_query, EngineQuery};

use super::{open_store, print_json, CmdResult};

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List every category
    List,
}

/// Execute categories command
pub fn execute(args: CategoriesArgs, db: &Path) -> CmdResult {
    let store = open_store(db)?;
    match args.command {
        CategoriesCommand::List => {
            let result =
                apply_engine_query(EngineQuery::CategoryList, &store, &mut rand::thread_rng())?;
            print_json(&result)
        }
    }
}
