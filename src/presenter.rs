//! Contract between the validation core and whatever displays the form.

use crate::aggregator::RegistrationPayload;
use crate::criteria::CriterionResult;
use crate::field::{FieldId, FormSnapshot};

/// Display side of the signup form.
///
/// Error targets are addressed by [`FieldId`], so the core never needs to
/// know how the form is laid out.
pub trait Presenter {
    /// Current value of every field. Values must be trimmed.
    fn form_snapshot(&self) -> FormSnapshot;

    /// Shows `message` next to `field`, replacing any previous message
    fn render_field_error(&mut self, field: FieldId, message: &str);

    fn clear_field_errors(&mut self);

    fn render_registration_success(&mut self, payload: &RegistrationPayload);

    /// Marks each criterion indicator as met or not
    fn render_password_criteria(&mut self, criteria: &[CriterionResult]);

    fn set_password_criteria_visible(&mut self, visible: bool);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn dismiss_success(&mut self) {}
}
