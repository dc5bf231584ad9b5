//! Errors produced by the field rules

use derive_more::Display;
use thiserror::Error;

use crate::field::FieldId;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    InvalidFormat,
    LengthOutOfRange,
    CriteriaNotMet,
    Mismatch,
}

/// A rejected field, with the message shown to the user next to it.
///
/// Every error is recoverable: it only prevents the registration payload
/// from being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: FieldId,
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    pub fn new(field: FieldId, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of running one rule: the normalized value or the error
pub type FieldOutcome = Result<String, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let error = ValidationError::new(
            FieldId::PasswordConfirm,
            ErrorKind::Mismatch,
            "Passwords do not match.",
        );

        assert_eq!(error.to_string(), "Passwords do not match.");
        assert_eq!(error.field(), FieldId::PasswordConfirm);
        assert_eq!(error.kind(), ErrorKind::Mismatch);
    }
}
