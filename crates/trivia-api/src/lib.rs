//! Trivia API - HTTP boundary for the trivia engine
//!
//! Maps each route to one engine query or command, renders successes as
//! their JSON envelopes and failures as `{success: false, error, message}`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use router::build_router;
pub use state::AppState;

/// Serve the API on an already-bound listener until the process stops
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "trivia api listening");
    axum::serve(listener, build_router(state)).await
}
