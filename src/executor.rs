//! Request orchestration: validate, stage, run, normalize, clean up.

use std::io;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Semaphore;
use tracing::info;

use crate::engine;
use crate::error::ExecError;
use crate::harness;
use crate::language::{Language, LanguageProfile};
use crate::response::{self, ExecuteResponse};
use crate::workspace::Workspace;

/// One code submission. `testInput` follows the fixed grammar
/// `nums = [<int,...>], target = <int>`. Absent fields default to empty so
/// validation is a controlled failure, not a deserialization reject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub test_input: String,
}

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Wall-clock budget per submission in milliseconds.
    pub timeout_ms: u64,
    /// Maximum concurrent executions; waiters queue on a semaphore.
    pub max_concurrency: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            max_concurrency: 16,
        }
    }
}

/// Runs submissions end to end. Shared read-only across requests; the
/// semaphore is the only coordination point.
pub struct Executor {
    config: ExecutorConfig,
    permits: Semaphore,
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Executor {
        let permits = Semaphore::new(config.max_concurrency.max(1));
        Executor { config, permits }
    }

    /// Run one submission: validate, acquire a workspace, render the
    /// harness, execute under the timeout, normalize. The workspace is
    /// released on every path out of here, `Err` included.
    pub async fn execute(&self, req: &ExecuteRequest) -> Result<ExecuteResponse, ExecError> {
        if req.code.is_empty() || req.language.is_empty() {
            return Err(ExecError::Validation);
        }

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "execution slots closed"))?;

        let mut workspace = Workspace::acquire()?;

        // The unsupported-language check runs after acquire, so even this
        // path exercises release.
        let profile = match Language::parse(&req.language).and_then(Language::profile) {
            Some(profile) => profile,
            None => {
                workspace.release();
                return Err(ExecError::UnsupportedLanguage);
            }
        };

        let result = self.run_staged(&workspace, profile, req).await;
        workspace.release();
        result
    }

    async fn run_staged(
        &self,
        workspace: &Workspace,
        profile: &LanguageProfile,
        req: &ExecuteRequest,
    ) -> Result<ExecuteResponse, ExecError> {
        let source = harness::render(profile, &req.code, &req.test_input);
        workspace.write_source(profile.filename, &source)?;

        let command = profile.command(workspace.dir());
        info!(language = %profile.language, "executing submission");

        let timeout = Duration::from_millis(self.config.timeout_ms);
        let outcome = engine::run(&command, workspace.dir(), timeout).await?;
        Ok(response::normalize(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> Executor {
        Executor::new(ExecutorConfig::default())
    }

    fn request(code: &str, language: &str) -> ExecuteRequest {
        ExecuteRequest {
            code: code.to_string(),
            language: language.to_string(),
            test_input: "nums = [2,7,11,15], target = 9".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_code_is_a_validation_error() {
        let err = executor().execute(&request("", "python")).await.unwrap_err();
        assert!(matches!(err, ExecError::Validation));
    }

    #[tokio::test]
    async fn missing_language_is_a_validation_error() {
        let err = executor().execute(&request("print(1)", "")).await.unwrap_err();
        assert!(matches!(err, ExecError::Validation));
    }

    #[tokio::test]
    async fn unknown_language_is_unsupported() {
        let err = executor()
            .execute(&request("puts 1", "ruby"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecError::UnsupportedLanguage));
    }

    #[tokio::test]
    async fn c_is_unsupported_despite_its_filename_mapping() {
        let err = executor()
            .execute(&request("int main() { return 0; }", "c"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecError::UnsupportedLanguage));
    }

    #[test]
    fn request_fields_default_when_absent() {
        let req: ExecuteRequest = serde_json::from_str("{}").unwrap();
        assert!(req.code.is_empty());
        assert!(req.language.is_empty());
        assert!(req.test_input.is_empty());
    }

    #[test]
    fn test_input_uses_the_camel_case_wire_name() {
        let req: ExecuteRequest =
            serde_json::from_str(r#"{"testInput": "nums = [1], target = 1"}"#).unwrap();
        assert_eq!(req.test_input, "nums = [1], target = 1");
    }
}
