//! Form validation. Pure: raw draft in, trimmed request or per-field errors out.

use super::entities::{BusinessRequest, Draft, Field};
use std::collections::BTreeMap;
use std::fmt;

/// Minimum trimmed length for every field, in UTF-16 code units.
pub const MIN_FIELD_CHARS: usize = 2;

/// Field -> human-readable message. Ordered so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Removes the error for `field`. Returns true if one was recorded.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates both fields independently; both errors may be reported at once.
pub fn validate(draft: &Draft) -> Result<BusinessRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in Field::ALL {
        if let Some(message) = check_field(field, draft.get(field)) {
            errors.insert(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(BusinessRequest::new(
        trim_field(&draft.name).to_string(),
        trim_field(&draft.location).to_string(),
    ))
}

/// Strips Unicode whitespace and the byte-order mark from both ends.
fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn check_field(field: Field, raw: &str) -> Option<String> {
    let trimmed = trim_field(raw);
    if trimmed.is_empty() {
        Some(format!("{} is required", field.label()))
    } else if trimmed.encode_utf16().count() < MIN_FIELD_CHARS {
        Some(format!(
            "{} must be at least {} characters",
            field.label(),
            MIN_FIELD_CHARS
        ))
    } else {
        None
    }
}
