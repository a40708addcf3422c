//! Validation of book payloads
//!
//! Create and update bodies are checked against a per-field rule table
//! before anything in the store is touched.

mod errors;
mod rules;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use rules::{FieldKind, FieldRule, BOOK_RULES, MIN_TEXT_LEN};
pub use validator::{validate_create, validate_update};
