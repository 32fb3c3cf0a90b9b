//! Batch driver error types.

use std::path::PathBuf;

/// Errors that stop a whole test-case file from being checked.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid list of test cases
    #[error("invalid test cases in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BatchError::Io {
            path: PathBuf::from("cases.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read cases.json: missing");

        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = BatchError::Json {
            path: PathBuf::from("cases.json"),
            source,
        };
        assert!(err.to_string().starts_with("invalid test cases in cases.json: "));
    }
}
