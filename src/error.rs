//! Error taxonomy for the execute operation.

use thiserror::Error;

/// Failures that short-circuit the pipeline before an outcome exists.
/// Compile, runtime and timeout failures are data, not errors: they travel
/// inside [`crate::engine::ExecutionOutcome`] and are shaped by the
/// normalizer.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The request is missing `code` or `language`. No workspace is created.
    #[error("Code and language are required")]
    Validation,

    /// The language is not in the registry. The workspace is created and
    /// released defensively but no process runs.
    #[error("Unsupported language")]
    UnsupportedLanguage,

    /// Filesystem or process-spawn failure unrelated to user code.
    #[error("Server error")]
    Internal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(ExecError::Validation.to_string(), "Code and language are required");
        assert_eq!(ExecError::UnsupportedLanguage.to_string(), "Unsupported language");
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ExecError::Internal(io).to_string(), "Server error");
    }
}
