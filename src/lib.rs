//! Codebox - multi-language code execution sandbox.
//!
//! Takes untrusted source code, a target language and a test-input string,
//! runs the submission in an ephemeral workspace under a wall-clock timeout
//! and returns the program's output or a structured failure. No execution
//! artifact survives a request.

#[cfg(not(unix))]
compile_error!("codebox only runs on Unix hosts.");

pub mod engine;
pub mod error;
pub mod executor;
pub mod harness;
pub mod language;
pub mod response;
pub mod server;
pub mod state;
pub mod workspace;

pub use error::ExecError;
pub use executor::{ExecuteRequest, Executor, ExecutorConfig};
pub use language::Language;
pub use response::ExecuteResponse;
pub use state::AppState;
pub use workspace::Workspace;
