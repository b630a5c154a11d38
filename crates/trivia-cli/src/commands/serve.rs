//! Serve command
//!
//! Usage: trivia serve [--bind <ADDR>]

use clap::Args;
use std::path::Path;
use trivia_api::AppState;

use super::{open_store, CmdResult};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,
}

/// Execute serve command
pub fn execute(args: ServeArgs, db: &Path) -> CmdResult {
    let store = open_store(db)?;
    let state = AppState::new(store);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&args.bind).await?;
        tracing::info!(db = %db.display(), "serving trivia database");
        trivia_api::serve(listener, state).await
    })?;

    Ok(())
}
