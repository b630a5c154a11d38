//! Trivia CLI
//!
//! Command-line interface for the trivia service: run the HTTP API, import
//! seeds and run every engine intent against the local database.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia - question bank and quiz service", long_about = None)]
struct Cli {
    /// SQLite database path
    #[arg(long, env = "TRIVIA_DB", default_value = ".trivia/trivia.db", global = true)]
    db: PathBuf,

    /// Log profile: dev or prod
    #[arg(long, env = "TRIVIA_LOG", default_value = "dev", global = true)]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve(commands::serve::ServeArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Category operations
    Categories(commands::categories::CategoriesArgs),
    /// Question operations
    Questions(commands::questions::QuestionsArgs),
    /// Quiz operations
    Quiz(commands::quiz::QuizArgs),
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let profile = match cli.log.parse::<Profile>() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    logging_facility::init(profile);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &cli.db),
        Commands::Seed(args) => commands::seed::execute(args, &cli.db),
        Commands::Categories(args) => commands::categories::execute(args, &cli.db),
        Commands::Questions(args) => commands::questions::execute(args, &cli.db),
        Commands::Quiz(args) => commands::quiz::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
