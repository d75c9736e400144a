use crate::dataset::DatasetError;
use geodex_core::{
    config::ConfigError,
    db::{QueryError, query::INTERNAL_ERROR_MESSAGE},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
/// Public error with a stable kind; the message is safe to show callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(ErrorKind::Internal, INTERNAL_ERROR_MESSAGE)
    }

    /// Whether the caller can fix the request and retry.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        matches!(self.kind, ErrorKind::BadRequest)
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Validation(err) => Self::new(ErrorKind::BadRequest, err.to_string()),
            QueryError::Internal(err) => {
                tracing::error!(error = %err.display_with_class(), "query failed");
                Self::internal()
            }
        }
    }
}

impl From<DatasetError> for Error {
    fn from(err: DatasetError) -> Self {
        tracing::error!(error = %err, "dataset unavailable");
        Self::internal()
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "configuration rejected");
        Self::internal()
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    BadRequest,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadRequest => "bad_request",
            Self::Internal => "internal",
        };

        f.write_str(label)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use geodex_core::{
        db::{ValidationError, predicate::BoundingBoxError},
        error::InternalError,
    };

    #[test]
    fn validation_errors_keep_their_message() {
        let err = Error::from(QueryError::from(ValidationError::from(
            BoundingBoxError::Inverted,
        )));

        assert!(err.is_bad_request());
        assert_eq!(
            err.message,
            "Invalid bbox: min values must not exceed max values"
        );
    }

    #[test]
    fn internal_errors_are_masked() {
        let err = Error::from(QueryError::from(InternalError::query_invariant(
            "page size must be positive",
        )));

        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn dataset_errors_are_masked() {
        let err = Error::from(
            crate::dataset::from_json_str("not json").expect_err("invalid json"),
        );

        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, "Internal server error");
    }
}
