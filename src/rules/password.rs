//! Rules for the password and its confirmation

use crate::config::ValidationConfig;
use crate::criteria::check_password_criteria;
use crate::error::{ErrorKind, FieldOutcome, ValidationError};
use crate::field::FieldId;

/// Accepts the password when every strength criterion passes
pub fn validate_password(config: &ValidationConfig, password: &str) -> FieldOutcome {
    let missing: Vec<String> = check_password_criteria(config, password)
        .into_iter()
        .filter(|result| !result.valid)
        .map(|result| result.criterion.describe(config))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::new(
            FieldId::Password,
            ErrorKind::CriteriaNotMet,
            format!(
                "Password does not meet the criteria, it needs {}.",
                missing.join(", ")
            ),
        ));
    }
    Ok(password.to_owned())
}

/// Both entries must be identical. Returns the password.
pub fn validate_password_confirm(password: &str, password_confirm: &str) -> FieldOutcome {
    if password != password_confirm {
        return Err(ValidationError::new(
            FieldId::PasswordConfirm,
            ErrorKind::Mismatch,
            "Passwords do not match.",
        ));
    }
    Ok(password.to_owned())
}
