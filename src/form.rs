//! Event handling for the signup form.
//!
//! Connects presenter events (input, focus, submit) to the gate, the
//! criteria evaluator and the aggregator, and renders their results.

use crate::aggregator::{validate_signup_blocking, RegistrationPayload};
use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::field::FieldId;
use crate::gate::{FormValidityGate, GateState};
use crate::presenter::Presenter;

pub struct SignupForm<P: Presenter> {
    config: ValidationConfig,
    gate: FormValidityGate,
    presenter: P,
}

impl<P: Presenter> SignupForm<P> {
    /// Wraps `presenter` and renders the initial, disabled, submit state
    pub fn new(config: ValidationConfig, mut presenter: P) -> Self {
        let gate = FormValidityGate::new(config);
        presenter.set_submit_enabled(gate.state().is_enabled());
        Self {
            config,
            gate,
            presenter,
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Called after `field` changed. Refreshes the criteria display when
    /// the password changed, then the submit button.
    pub fn on_field_input(&mut self, field: FieldId) -> GateState {
        let snapshot = self.presenter.form_snapshot();

        if field == FieldId::Password {
            let criteria = self.gate.criteria(snapshot.get(FieldId::Password));
            self.presenter.render_password_criteria(criteria);
        }

        let state = self.gate.update(&snapshot);
        self.presenter.set_submit_enabled(state.is_enabled());
        state
    }

    pub fn on_password_focus(&mut self) {
        self.presenter.set_password_criteria_visible(true);
    }

    pub fn on_password_blur(&mut self) {
        self.presenter.set_password_criteria_visible(false);
    }

    /// Runs the full validation and renders its outcome.
    ///
    /// Previous errors are cleared first. On failure exactly one error is
    /// rendered. The gate state is not consulted: a form the gate lets
    /// through can still be rejected here.
    pub fn submit(&mut self) -> Result<RegistrationPayload, ValidationError> {
        self.presenter.clear_field_errors();

        let snapshot = self.presenter.form_snapshot();
        let outcome = validate_signup_blocking(&self.config, &snapshot);

        match &outcome {
            Ok(payload) => self.presenter.render_registration_success(payload),
            Err(error) => self.presenter.render_field_error(error.field(), error.message()),
        }
        outcome
    }

    pub fn dismiss_success(&mut self) {
        self.presenter.dismiss_success();
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
