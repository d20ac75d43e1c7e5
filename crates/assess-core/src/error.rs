//! Error types for the assessment engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Response to question {question_id} out of range: {value} not in 1..={scale_max}")]
    Validation {
        question_id: String,
        value: i64,
        scale_max: u8,
    },

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Category mismatch: expected {expected}, got {actual}")]
    CategoryMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Bad respondent input; callers surface these as a client error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Input that does not fit the loaded configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownQuestion(_) | Error::Configuration(_) | Error::CategoryMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = Error::Validation {
            question_id: "O1".to_string(),
            value: 9,
            scale_max: 5,
        };
        assert!(err.is_validation());
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("O1"));

        assert!(Error::UnknownQuestion("X9".to_string()).is_configuration());
        assert!(!Error::Io("disk".to_string()).is_configuration());
    }
}
