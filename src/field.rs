//! Form fields and the snapshot of their current values.

use std::collections::BTreeMap;

use derive_more::Display;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// One input of the signup form.
///
/// Declaration order matters: when several fields fail at once, the
/// aggregator reports the one declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display)]
pub enum FieldId {
    #[display("name")]
    Name,
    #[display("username")]
    Username,
    #[display("email")]
    Email,
    #[display("password")]
    Password,
    #[display("password-confirm")]
    PasswordConfirm,
}

impl FieldId {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Username => "Username",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::PasswordConfirm => "Confirm password",
        }
    }

    /// Whether the value must be masked when displayed
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::PasswordConfirm)
    }
}

/// Current value of every field, as read from the form.
///
/// Values are trimmed on the way in, so every rule sees trimmed input.
/// A field that was never set reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`FormSnapshot::set`]
    pub fn with(mut self, field: FieldId, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: &str) {
        self.values.insert(field, value.trim().to_owned());
    }

    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// True when no field is empty
    pub fn is_complete(&self) -> bool {
        FieldId::iter().all(|field| !self.get(field).is_empty())
    }
}

impl<'a> FromIterator<(FieldId, &'a str)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (FieldId, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |snapshot, (field, value)| snapshot.with(field, value))
    }
}
