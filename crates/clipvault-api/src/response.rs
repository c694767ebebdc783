//! Response envelope shared by every API route.
//!
//! The web client drives its UI off this shape: `code` is 1 on success and
//! 0 on failure, `message` is one of the strings in
//! [`clipvault_core::messages`], `token` appears at the top level on login
//! success only, and `errors` carries field-level validation failures.
//! Absent optionals are omitted from the JSON, not serialized as null.

use clipvault_core::error::FieldError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u8,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: message.into(),
            token: None,
            data: None,
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
            token: None,
            data: None,
            errors: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }
}
