//! Submit-time validation of the whole form.

use std::fmt;

use futures::{executor::block_on, future, join};
use log::{debug, info};
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::error::{FieldOutcome, ValidationError};
use crate::field::{FieldId, FormSnapshot};
use crate::rules;

/// Normalized values of a fully valid form.
///
/// Only [`validate_signup`] builds one. It is meant to be handed to
/// whatever performs the actual registration, then dropped.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    name: String,
    username: String,
    email: String,
    password: String,
}

impl RegistrationPayload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Lower-cased
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of logs
impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Runs every field rule and builds the registration payload.
///
/// The name, username and email rules and the password chain (criteria,
/// then confirmation) are polled together and all of them complete
/// before a decision is made. When several fields fail, the error of the
/// first field in declaration order is returned, whatever order the
/// rules finished in.
pub async fn validate_signup(
    config: &ValidationConfig,
    snapshot: &FormSnapshot,
) -> Result<RegistrationPayload, ValidationError> {
    let name = future::ready(rules::validate_name(snapshot.get(FieldId::Name)));
    let username = future::ready(rules::validate_username(
        config,
        snapshot.get(FieldId::Username),
    ));
    let email = future::ready(rules::validate_email(snapshot.get(FieldId::Email)));
    let password = async {
        rules::validate_password(config, snapshot.get(FieldId::Password)).and_then(|password| {
            rules::validate_password_confirm(&password, snapshot.get(FieldId::PasswordConfirm))
        })
    };

    let (name, username, email, password) = join!(name, username, email, password);
    debug!(
        "Validation pass: name={} username={} email={} password={}",
        name.is_ok(),
        username.is_ok(),
        email.is_ok(),
        password.is_ok()
    );

    let result = assemble(name, username, email, password);
    match &result {
        Ok(payload) => info!("Signup accepted for {}", payload.username),
        Err(error) => info!("Signup rejected on {}: {}", error.field(), error),
    }
    result
}

/// [`validate_signup`] driven to completion on the current thread
pub fn validate_signup_blocking(
    config: &ValidationConfig,
    snapshot: &FormSnapshot,
) -> Result<RegistrationPayload, ValidationError> {
    block_on(validate_signup(config, snapshot))
}

fn assemble(
    name: FieldOutcome,
    username: FieldOutcome,
    email: FieldOutcome,
    password: FieldOutcome,
) -> Result<RegistrationPayload, ValidationError> {
    // Fields are evaluated in the order written, so the first `?` to fail wins
    Ok(RegistrationPayload {
        name: name?,
        username: username?,
        email: email?,
        password: password?,
    })
}
