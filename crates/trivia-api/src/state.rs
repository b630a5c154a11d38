//! Shared application state
//!
//! One store behind one mutex: every request sees a single consistent
//! snapshot and mutations are serialized.

use std::sync::{Arc, Mutex};

use trivia_core::QuestionStore;
use trivia_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineCommandResult, EngineQuery,
    EngineQueryResult,
};

use crate::error::ApiError;

type SharedStore = Arc<Mutex<Box<dyn QuestionStore + Send>>>;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: QuestionStore + Send + 'static,
    {
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// Run a read-only query under the store lock
    pub fn query(&self, query: EngineQuery) -> Result<EngineQueryResult, ApiError> {
        let store = self.store.lock().map_err(|_| {
            tracing::error!("store mutex poisoned");
            ApiError::internal()
        })?;
        let mut rng = rand::thread_rng();
        Ok(apply_engine_query(query, &**store, &mut rng)?)
    }

    /// Run a mutating command under the store lock
    pub fn command(&self, cmd: EngineCommand) -> Result<EngineCommandResult, ApiError> {
        let mut store = self.store.lock().map_err(|_| {
            tracing::error!("store mutex poisoned");
            ApiError::internal()
        })?;
        Ok(apply_engine_command(cmd, &mut **store)?)
    }
}
