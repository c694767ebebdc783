//! Error types module
//!
//! Unified error taxonomy for the service. Workflow code maps every
//! collaborator failure into exactly one `AppError` variant; the API layer
//! turns the variant into a status code and envelope without ever exposing
//! the underlying cause to the client.

use std::io;

use serde::Serialize;
use sqlx::Error as SqlxError;

use crate::messages;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected client errors (validation, auth, conflict)
    Debug,
    /// Error level - for unexpected failures
    Error,
}

/// One field-level validation failure, serialized into the `errors` list of
/// the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("user already exists")]
    Conflict,

    #[error("user not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("no video file in request")]
    MissingFile,

    #[error("file type not accepted: {0}")]
    InvalidFileType(String),

    #[error("file size {size} exceeds cap of {max} bytes")]
    FileSizeExceeded { size: u64, max: u64 },

    #[error("database error: {0}")]
    Database(#[source] SqlxError),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("mail transport error: {0}")]
    Mail(String),

    #[error("password hashing error: {0}")]
    Hashing(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Hashing(err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl AppError {
    /// HTTP status code the API layer answers with.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::Validation(_)
            | AppError::MissingFile
            | AppError::InvalidFileType(_)
            | AppError::FileSizeExceeded { .. } => 400,
            AppError::Unauthorized | AppError::IncorrectPassword => 401,
            AppError::NotFound => 404,
            AppError::Conflict => 409,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Mail(_)
            | AppError::Hashing(_)
            | AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message. The unexpected group collapses to one generic
    /// string; the cause stays in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => messages::VALIDATION_ERROR,
            AppError::Conflict => messages::USER_ALREADY_EXISTS,
            AppError::NotFound => messages::USER_NOT_FOUND,
            AppError::Unauthorized => messages::UNAUTHORIZED,
            AppError::IncorrectPassword => messages::INCORRECT_PASSWORD,
            AppError::MissingFile => messages::VIDEO_FILE_MISSING,
            AppError::InvalidFileType(_) => messages::INVALID_FILE_TYPE,
            AppError::FileSizeExceeded { .. } => messages::FILE_SIZE_EXCEEDED,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Mail(_)
            | AppError::Hashing(_)
            | AppError::Internal(_) => messages::UNEXPECTED_ERROR,
        }
    }

    /// Field-level errors for the envelope, when the variant carries them.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        if self.http_status_code() >= 500 {
            LogLevel::Error
        } else {
            LogLevel::Debug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(AppError::Validation(vec![]).http_status_code(), 400);
        assert_eq!(AppError::MissingFile.http_status_code(), 400);
        assert_eq!(
            AppError::InvalidFileType("image/png".into()).http_status_code(),
            400
        );
        assert_eq!(
            AppError::FileSizeExceeded {
                size: 7_000_000,
                max: 6_291_456
            }
            .http_status_code(),
            400
        );
        assert_eq!(AppError::Unauthorized.http_status_code(), 401);
        assert_eq!(AppError::IncorrectPassword.http_status_code(), 401);
        assert_eq!(AppError::NotFound.http_status_code(), 404);
        assert_eq!(AppError::Conflict.http_status_code(), 409);
        assert_eq!(AppError::Internal("boom".into()).http_status_code(), 500);
        assert_eq!(AppError::Storage("s3 down".into()).http_status_code(), 500);
    }

    #[test]
    fn unexpected_group_shares_one_client_message() {
        for err in [
            AppError::Database(SqlxError::PoolClosed),
            AppError::Storage("put failed".into()),
            AppError::Mail("relay refused".into()),
            AppError::Hashing("bad cost".into()),
            AppError::Internal("boom".into()),
        ] {
            assert_eq!(err.client_message(), messages::UNEXPECTED_ERROR);
            assert_eq!(err.log_level(), LogLevel::Error);
        }
    }

    #[test]
    fn client_errors_log_at_debug() {
        assert_eq!(AppError::Conflict.log_level(), LogLevel::Debug);
        assert_eq!(AppError::Unauthorized.log_level(), LogLevel::Debug);
        assert_eq!(AppError::Validation(vec![]).log_level(), LogLevel::Debug);
    }

    #[test]
    fn field_errors_only_on_validation() {
        let errs = vec![FieldError::new("email", messages::INVALID_EMAIL)];
        let err = AppError::Validation(errs.clone());
        assert_eq!(err.field_errors(), Some(errs.as_slice()));
        assert_eq!(AppError::Conflict.field_errors(), None);
    }
}
