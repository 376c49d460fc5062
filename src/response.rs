//! Shaping raw process outcomes into the wire response.

use serde::Serialize;
use serde_json::{json, Value};

use crate::engine::ExecutionOutcome;

/// Reply returned to the caller: raw stdout on success, a human-readable
/// message (plus optional detail) on any failure category.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExecuteResponse {
    Success {
        output: String,
    },
    Failure {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
}

impl ExecuteResponse {
    pub fn failure(error: impl Into<String>) -> ExecuteResponse {
        ExecuteResponse::Failure {
            error: error.into(),
            details: None,
        }
    }

    pub fn failure_with_details(error: impl Into<String>, details: Value) -> ExecuteResponse {
        ExecuteResponse::Failure {
            error: error.into(),
            details: Some(details),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecuteResponse::Success { .. })
    }
}

/// Map an execution outcome to the response shape.
///
/// Success requires a zero exit and a silent stderr; stdout is passed
/// through verbatim (empty stdout is a valid result, not an error) and
/// trimming is the caller's business. Failure messages prefer captured
/// stderr, then a process-level description, then a generic fallback.
/// Timeouts are reported distinctly so callers can tell "ran and failed"
/// from "never finished".
pub fn normalize(outcome: ExecutionOutcome) -> ExecuteResponse {
    if outcome.timed_out {
        return ExecuteResponse::failure_with_details(
            "Execution timed out",
            json!({ "timedOut": true }),
        );
    }

    if outcome.exit_code == Some(0) && outcome.stderr.is_empty() {
        return ExecuteResponse::Success {
            output: outcome.stdout,
        };
    }

    let error = if !outcome.stderr.is_empty() {
        outcome.stderr
    } else if let Some(code) = outcome.exit_code {
        format!("Command failed with exit code {code}")
    } else if let Some(signal) = outcome.signal {
        format!("Command terminated by signal {signal}")
    } else {
        "Execution error".to_string()
    };

    ExecuteResponse::failure_with_details(
        error,
        json!({ "exitCode": outcome.exit_code, "timedOut": false }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(stdout: &str, stderr: &str, exit_code: Option<i32>) -> ExecutionOutcome {
        ExecutionOutcome {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
            signal: None,
            timed_out: false,
        }
    }

    #[test]
    fn clean_exit_passes_stdout_through_verbatim() {
        let resp = normalize(outcome("[0,1]\n", "", Some(0)));
        match resp {
            ExecuteResponse::Success { output } => assert_eq!(output, "[0,1]\n"),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn empty_stdout_is_still_a_success() {
        assert!(normalize(outcome("", "", Some(0))).is_success());
    }

    #[test]
    fn stderr_takes_priority_as_the_message() {
        let resp = normalize(outcome("", "SyntaxError: invalid syntax", Some(1)));
        match resp {
            ExecuteResponse::Failure { error, details } => {
                assert_eq!(error, "SyntaxError: invalid syntax");
                assert!(details.is_some());
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn noisy_stderr_fails_even_with_a_zero_exit() {
        let resp = normalize(outcome("partial", "warning: boom", Some(0)));
        assert!(!resp.is_success());
    }

    #[test]
    fn silent_nonzero_exit_reports_the_code() {
        let resp = normalize(outcome("", "", Some(2)));
        match resp {
            ExecuteResponse::Failure { error, .. } => {
                assert_eq!(error, "Command failed with exit code 2");
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn signal_death_reports_the_signal() {
        let mut o = outcome("", "", None);
        o.signal = Some(9);
        match normalize(o) {
            ExecuteResponse::Failure { error, .. } => {
                assert_eq!(error, "Command terminated by signal 9");
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn timeout_is_reported_distinctly() {
        let mut o = outcome("some partial output", "", None);
        o.timed_out = true;
        match normalize(o) {
            ExecuteResponse::Failure { error, details } => {
                assert_eq!(error, "Execution timed out");
                assert_eq!(details.unwrap()["timedOut"], true);
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn serialization_shapes() {
        let ok = ExecuteResponse::Success {
            output: "[0,1]\n".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "output": "[0,1]\n" })
        );

        let err = ExecuteResponse::failure("Unsupported language");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "error": "Unsupported language" })
        );
    }
}
