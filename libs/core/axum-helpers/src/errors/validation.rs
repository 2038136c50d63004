//! Validation error formatting shared by extractors and domain errors.

use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Flatten validator output into a field-to-message map.
///
/// Each failing field maps to its first error's message, falling back to
/// the validator code when no message was attached. This is the API's
/// 400 wire shape:
///
/// ```json
/// { "name": "Name is required" }
/// ```
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                })
                .unwrap_or_else(|| "invalid value".to_string());
            (field.to_string(), message)
        })
        .collect()
}
