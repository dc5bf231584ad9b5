//! Rules for the plain text fields

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ValidationConfig;
use crate::error::{ErrorKind, FieldOutcome, ValidationError};
use crate::field::FieldId;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("Failed to compile name regex"));

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Failed to compile username regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("Failed to compile email regex")
});

/// Letters and spaces only, at least one character
pub fn validate_name(name: &str) -> FieldOutcome {
    if !NAME_REGEX.is_match(name) {
        return Err(ValidationError::new(
            FieldId::Name,
            ErrorKind::InvalidFormat,
            "Name must contain only letters and spaces.",
        ));
    }
    Ok(name.to_owned())
}

/// Letters and digits only, length within the configured bounds
pub fn validate_username(config: &ValidationConfig, username: &str) -> FieldOutcome {
    if !config.username_length().contains(&username.chars().count()) {
        return Err(ValidationError::new(
            FieldId::Username,
            ErrorKind::LengthOutOfRange,
            format!(
                "Username must be between {} and {} characters long.",
                config.username_min_length, config.username_max_length
            ),
        ));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::new(
            FieldId::Username,
            ErrorKind::InvalidFormat,
            "Username must contain only letters and numbers.",
        ));
    }
    Ok(username.to_owned())
}

/// Local part, `@`, then dot separated labels. Returns the address lower-cased.
pub fn validate_email(email: &str) -> FieldOutcome {
    let normalized = email.to_lowercase();

    if !EMAIL_REGEX.is_match(&normalized) {
        return Err(ValidationError::new(
            FieldId::Email,
            ErrorKind::InvalidFormat,
            "Invalid email address.",
        ));
    }
    Ok(normalized)
}
