//! Per-field validation rules.
//!
//! Every rule is a pure function returning the normalized value or the
//! error tagged with its field. Input is expected to be trimmed already.

mod password;
mod text;

pub use password::{validate_password, validate_password_confirm};
pub use text::{validate_email, validate_name, validate_username};
