//! Payload validator for book create/update requests
//!
//! Validation semantics:
//! - Fields are checked in rule order; the first violation is returned
//! - Unknown properties are ignored
//! - `null` is treated the same as an absent property
//! - No coercion: `"true"` is not a boolean, `123` is not a string. Stricter
//!   than a casting schema library, which would accept both.
//!
//! The validator never touches the store. Callers validate first and
//! mutate only on success.

use serde_json::{Map, Value};

use crate::store::{BookPatch, NewBook};

use super::errors::{ValidationError, ValidationResult};
use super::rules::{BookField, FieldKind, FieldRule, BOOK_RULES};

/// Whether a payload is creating a book or patching one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

/// A field value that passed its rule
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Validate a create payload. `finished` defaults to false.
pub fn validate_create(payload: &Value) -> ValidationResult<NewBook> {
    let fields = check_fields(payload, Mode::Create)?;

    Ok(NewBook {
        title: fields.title.ok_or(ValidationError::Required("title"))?,
        author: fields.author.ok_or(ValidationError::Required("author"))?,
        finished: fields.finished.unwrap_or(false),
    })
}

/// Validate an update payload. At least one known field must be present.
pub fn validate_update(payload: &Value) -> ValidationResult<BookPatch> {
    let patch = check_fields(payload, Mode::Update)?;

    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }

    Ok(patch)
}

fn check_fields(payload: &Value, mode: Mode) -> ValidationResult<BookPatch> {
    let obj = as_object(payload)?;
    let mut patch = BookPatch::default();

    for rule in &BOOK_RULES {
        match (rule.field, check_field(rule, obj.get(rule.name), mode)?) {
            (_, None) => {}
            (BookField::Title, Some(FieldValue::Text(text))) => patch.title = Some(text),
            (BookField::Author, Some(FieldValue::Text(text))) => patch.author = Some(text),
            (BookField::Finished, Some(FieldValue::Flag(flag))) => patch.finished = Some(flag),
            // rule kind and target field disagree; only reachable by a bad rule table
            (_, Some(FieldValue::Text(_))) => return Err(ValidationError::NotABoolean(rule.name)),
            (_, Some(FieldValue::Flag(_))) => return Err(ValidationError::NotAString(rule.name)),
        }
    }

    Ok(patch)
}

fn as_object(payload: &Value) -> ValidationResult<&Map<String, Value>> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

/// Check one field against its rule.
///
/// Returns `Ok(None)` when the field is absent and allowed to be.
fn check_field(
    rule: &FieldRule,
    value: Option<&Value>,
    mode: Mode,
) -> ValidationResult<Option<FieldValue>> {
    let required = mode == Mode::Create && rule.required_on_create;
    let value = value.filter(|v| !v.is_null());

    match rule.kind {
        FieldKind::Text { min_len } => {
            let Some(value) = value else {
                return if required {
                    Err(ValidationError::Required(rule.name))
                } else {
                    Ok(None)
                };
            };

            let text = value
                .as_str()
                .ok_or(ValidationError::NotAString(rule.name))?;

            if required && text.is_empty() {
                return Err(ValidationError::Required(rule.name));
            }

            if text.chars().count() < min_len {
                return Err(ValidationError::TooShort {
                    field: rule.name,
                    message: rule.too_short,
                });
            }

            Ok(Some(FieldValue::Text(text.to_string())))
        }
        FieldKind::Flag => match value {
            None if required => Err(ValidationError::Required(rule.name)),
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(FieldValue::Flag(*flag))),
            Some(_) => Err(ValidationError::NotABoolean(rule.name)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Create
    // =========================================================================

    #[test]
    fn test_create_valid() {
        let book = validate_create(&json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "finished": true
        }))
        .unwrap();

        assert_eq!(book, NewBook::new("Dune", "Frank Herbert", true));
    }

    #[test]
    fn test_create_finished_defaults_to_false() {
        let book = validate_create(&json!({"title": "Dune", "author": "Frank Herbert"})).unwrap();
        assert!(!book.finished);

        let book = validate_create(&json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "finished": null
        }))
        .unwrap();
        assert!(!book.finished);
    }

    #[test]
    fn test_create_title_too_short() {
        let err = validate_create(&json!({"title": "Hi", "author": "Frank Herbert"})).unwrap_err();
        assert_eq!(err.to_string(), "Title too short");
    }

    #[test]
    fn test_create_author_too_short() {
        let err = validate_create(&json!({"title": "Dune", "author": "FH"})).unwrap_err();
        assert_eq!(err.to_string(), "Author name too short");
    }

    #[test]
    fn test_create_missing_fields() {
        let err = validate_create(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::Required("title"));

        let err = validate_create(&json!({"title": "Dune"})).unwrap_err();
        assert_eq!(err, ValidationError::Required("author"));
    }

    #[test]
    fn test_create_empty_and_null_are_missing() {
        let err = validate_create(&json!({"title": "", "author": "Frank Herbert"})).unwrap_err();
        assert_eq!(err, ValidationError::Required("title"));

        let err = validate_create(&json!({"title": null, "author": "Frank Herbert"})).unwrap_err();
        assert_eq!(err, ValidationError::Required("title"));
    }

    #[test]
    fn test_create_reports_first_violation() {
        // Both fields are bad; title is checked first
        let err = validate_create(&json!({"title": "Hi", "author": "X"})).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { field: "title", .. }));
    }

    #[test]
    fn test_create_no_coercion() {
        let err = validate_create(&json!({"title": 1984, "author": "George Orwell"})).unwrap_err();
        assert_eq!(err, ValidationError::NotAString("title"));

        let err = validate_create(&json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "finished": "yes"
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::NotABoolean("finished"));
    }

    #[test]
    fn test_create_ignores_unknown_fields() {
        let book = validate_create(&json!({
            "id": 42,
            "title": "Dune",
            "author": "Frank Herbert",
            "rating": 5
        }))
        .unwrap();
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn test_create_rejects_non_object() {
        assert_eq!(
            validate_create(&json!(["Dune"])).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // three characters, more than three bytes
        let book = validate_create(&json!({"title": "Ēnā", "author": "Frank Herbert"})).unwrap();
        assert_eq!(book.title, "Ēnā");
    }

    // =========================================================================
    // Update
    // =========================================================================

    #[test]
    fn test_update_partial() {
        let patch = validate_update(&json!({"finished": false})).unwrap();
        assert_eq!(
            patch,
            BookPatch {
                finished: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_empty_payload() {
        assert_eq!(
            validate_update(&json!({})).unwrap_err(),
            ValidationError::EmptyUpdate
        );
        assert_eq!(
            validate_update(&json!({"title": null, "rating": 3})).unwrap_err(),
            ValidationError::EmptyUpdate
        );
    }

    #[test]
    fn test_update_short_values_rejected() {
        let err = validate_update(&json!({"title": "Hi"})).unwrap_err();
        assert_eq!(err.to_string(), "Title too short");

        // An empty string is a provided value and fails the length rule
        let err = validate_update(&json!({"author": ""})).unwrap_err();
        assert_eq!(err.to_string(), "Author name too short");
    }

    #[test]
    fn test_update_type_checked() {
        let err = validate_update(&json!({"finished": 1})).unwrap_err();
        assert_eq!(err, ValidationError::NotABoolean("finished"));
    }
}
