//! Seed import command
//!
//! Usage: trivia seed import <PATH>

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use trivia_store::seed::{import_seed, SeedImportReport};

use super::{open_store, CmdResult};

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file (or every .yaml/.yml file in a directory)
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs, db: &Path) -> CmdResult {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, db),
    }
}

fn execute_import(args: ImportArgs, db: &Path) -> CmdResult {
    let mut store = open_store(db)?;

    let seed_files = if args.path.is_dir() {
        // Sorted for determinism
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let report = import_seed(&seed_file, store.connection_mut())?;
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SeedImportReport) {
    if report.already_applied {
        println!("Already imported (digest: {})", report.digest);
    } else {
        println!(
            "Imported {} categories, {} questions (digest: {})",
            report.categories, report.questions, report.digest
        );
    }
}
