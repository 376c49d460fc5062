//! Shared application state.

use std::sync::Arc;

use crate::executor::{Executor, ExecutorConfig};

/// State handed to every request handler. The executor is the only shared
/// piece and it is read-only, so cloning is cheap and lock-free.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<Executor>,
}

impl AppState {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Executor::new(ExecutorConfig::default()))
    }
}
