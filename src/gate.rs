//! Live submit gate, recomputed on every input change.
//!
//! Cheaper than the full validation: it only checks that every field is
//! filled, that the password meets the criteria and that the confirmation
//! matches. Name, username and email formats are left to submit time.

use derive_more::Display;
use log::debug;

use crate::config::ValidationConfig;
use crate::criteria::{all_criteria_met, check_password_criteria, CriterionResult};
use crate::field::{FieldId, FormSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum GateState {
    #[default]
    Disabled,
    Enabled,
}

impl GateState {
    pub fn is_enabled(self) -> bool {
        self == GateState::Enabled
    }
}

#[derive(Debug)]
struct CachedCriteria {
    password: String,
    results: Vec<CriterionResult>,
}

#[derive(Debug)]
pub struct FormValidityGate {
    config: ValidationConfig,
    state: GateState,
    cached: Option<CachedCriteria>,
}

impl FormValidityGate {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            state: GateState::Disabled,
            cached: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Criteria for `password`, reusing the last evaluation when the
    /// password did not change
    pub fn criteria(&mut self, password: &str) -> &[CriterionResult] {
        if self
            .cached
            .as_ref()
            .is_some_and(|cached| cached.password != password)
        {
            self.cached = None;
        }

        let config = &self.config;
        let cached = self.cached.get_or_insert_with(|| CachedCriteria {
            password: password.to_owned(),
            results: check_password_criteria(config, password),
        });
        &cached.results
    }

    /// Recomputes the state from the current field values
    pub fn update(&mut self, snapshot: &FormSnapshot) -> GateState {
        let password = snapshot.get(FieldId::Password);
        let criteria_met = all_criteria_met(self.criteria(password));

        let next = if snapshot.is_complete()
            && criteria_met
            && password == snapshot.get(FieldId::PasswordConfirm)
        {
            GateState::Enabled
        } else {
            GateState::Disabled
        };

        if next != self.state {
            debug!("Submit gate {} -> {}", self.state, next);
        }
        self.state = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const STRONG: &str = "Secret1!";

    fn complete_form() -> FormSnapshot {
        FormSnapshot::new()
            .with(FieldId::Name, "Jane Doe")
            .with(FieldId::Username, "janedoe")
            .with(FieldId::Email, "jane@mail.com")
            .with(FieldId::Password, STRONG)
            .with(FieldId::PasswordConfirm, STRONG)
    }

    fn gate() -> FormValidityGate {
        FormValidityGate::new(ValidationConfig::default())
    }

    #[test]
    fn test_starts_disabled() {
        assert_eq!(gate().state(), GateState::Disabled);
    }

    #[test]
    fn test_enabled_for_complete_form() {
        let mut gate = gate();
        assert_eq!(gate.update(&complete_form()), GateState::Enabled);
        assert!(gate.state().is_enabled());
    }

    #[test]
    fn test_any_empty_field_disables() {
        for field in FieldId::iter() {
            let mut gate = gate();
            gate.update(&complete_form());

            let snapshot = complete_form().with(field, "  ");
            assert_eq!(
                gate.update(&snapshot),
                GateState::Disabled,
                "Gate stayed enabled with empty {}",
                field
            );
        }
    }

    #[test]
    fn test_weak_password_disables() {
        let snapshot = complete_form()
            .with(FieldId::Password, "secret12")
            .with(FieldId::PasswordConfirm, "secret12");
        assert_eq!(gate().update(&snapshot), GateState::Disabled);
    }

    #[test]
    fn test_mismatch_disables() {
        let snapshot = complete_form().with(FieldId::PasswordConfirm, "Secret2!");
        assert_eq!(gate().update(&snapshot), GateState::Disabled);
    }

    #[test]
    fn test_formats_are_not_checked() {
        let snapshot = complete_form()
            .with(FieldId::Name, "R2D2")
            .with(FieldId::Username, "x")
            .with(FieldId::Email, "not-an-email");
        assert_eq!(gate().update(&snapshot), GateState::Enabled);
    }

    #[test]
    fn test_enabled_iff_all_conditions_hold() {
        let names = ["", "Jane"];
        let usernames = ["", "jd"];
        let emails = ["", "j@d.io"];
        let passwords = ["", "weak", STRONG];
        let confirms = ["", "weak", STRONG, "Secret2!"];

        let mut gate = gate();
        for name in names {
            for username in usernames {
                for email in emails {
                    for password in passwords {
                        for confirm in confirms {
                            let snapshot = FormSnapshot::new()
                                .with(FieldId::Name, name)
                                .with(FieldId::Username, username)
                                .with(FieldId::Email, email)
                                .with(FieldId::Password, password)
                                .with(FieldId::PasswordConfirm, confirm);

                            let expected = !name.is_empty()
                                && !username.is_empty()
                                && !email.is_empty()
                                && password == STRONG
                                && confirm == password;

                            assert_eq!(
                                gate.update(&snapshot).is_enabled(),
                                expected,
                                "Unexpected gate state for {:?}",
                                snapshot
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_criteria_are_cached_per_password() {
        let mut gate = gate();
        let first = gate.criteria("weak").to_vec();
        assert_eq!(gate.criteria("weak"), first.as_slice());

        let strong = gate.criteria(STRONG).to_vec();
        assert!(all_criteria_met(&strong));
        assert!(!all_criteria_met(gate.criteria("weak")));
    }
}
