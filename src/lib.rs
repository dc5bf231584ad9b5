//! Signup form validation.
//!
//! Per-field rules, password strength criteria, submit-time aggregation
//! of every rule into a registration payload, and the live gate that
//! enables the submit button.

pub mod aggregator;
pub mod config;
pub mod criteria;
pub mod error;
pub mod field;
pub mod form;
pub mod gate;
pub mod presenter;
pub mod rules;

pub use aggregator::{validate_signup, validate_signup_blocking, RegistrationPayload};
pub use config::{ConfigError, ValidationConfig};
pub use criteria::{check_password_criteria, Criterion, CriterionResult};
pub use error::{ErrorKind, FieldOutcome, ValidationError};
pub use field::{FieldId, FormSnapshot};
pub use form::SignupForm;
pub use gate::{FormValidityGate, GateState};
pub use presenter::Presenter;
