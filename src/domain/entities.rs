//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP or terminal types here; adapters map into these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::DomainError;

/// Upper bound of the rating scale (inclusive).
pub const MAX_RATING: f64 = 5.0;

/// Editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Location,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Name, Field::Location];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Location => "location",
        }
    }

    /// Human label used in prompts and validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Business name",
            Field::Location => "Location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub location: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Location => self.location = value,
        }
    }
}

/// Validated, trimmed input for the full fetch.
///
/// Only [`crate::domain::validate`] constructs one; fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRequest {
    name: String,
    location: String,
}

impl BusinessRequest {
    pub(crate) fn new(name: String, location: String) -> Self {
        Self { name, location }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Business presence data returned by the full fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResult {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: u64,
    pub headline: String,
    pub created_at: DateTime<Utc>,
}

impl BusinessResult {
    /// Copy of this result with only the headline replaced.
    pub fn with_headline(&self, headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            ..self.clone()
        }
    }

    /// Rejects payloads whose rating is outside `[0, MAX_RATING]` or not a number.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(DomainError::MalformedResponse(format!(
                "rating {} outside 0..={}",
                self.rating, MAX_RATING
            )));
        }
        Ok(())
    }
}

/// Response of the headline regeneration call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadlineUpdate {
    pub headline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BusinessResult {
        BusinessResult {
            name: "Cake & Co".into(),
            location: "Mumbai".into(),
            rating: 4.5,
            reviews: 128,
            headline: "Best Cakes in Mumbai".into(),
            created_at: "2024-01-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{
            "name": "Cake & Co",
            "location": "Mumbai",
            "rating": 4.5,
            "reviews": 128,
            "headline": "Best Cakes in Mumbai",
            "createdAt": "2024-01-01T10:00:00Z"
        }"#;
        let parsed: BusinessResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_negative_reviews_rejected_by_type() {
        let json = r#"{"name":"A","location":"B","rating":1,"reviews":-3,
            "headline":"h","createdAt":"2024-01-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<BusinessResult>(json).is_err());
    }

    #[test]
    fn test_with_headline_keeps_siblings() {
        let before = sample();
        let after = before.with_headline("Mumbai's #1 Bakery");
        assert_eq!(after.headline, "Mumbai's #1 Bakery");
        assert_eq!(after.name, before.name);
        assert_eq!(after.location, before.location);
        assert_eq!(after.rating, before.rating);
        assert_eq!(after.reviews, before.reviews);
        assert_eq!(after.created_at, before.created_at);
        // source record untouched
        assert_eq!(before.headline, "Best Cakes in Mumbai");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(sample().check_invariants().is_ok());
        let mut r = sample();
        r.rating = 5.0;
        assert!(r.check_invariants().is_ok());
        r.rating = 5.1;
        assert!(r.check_invariants().is_err());
        r.rating = -0.5;
        assert!(r.check_invariants().is_err());
    }

    #[test]
    fn test_field_names_and_labels() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::Location.as_str(), "location");
        assert_eq!(Field::Name.label(), "Business name");
    }

    #[test]
    fn test_draft_get_set() {
        let mut draft = Draft::default();
        draft.set(Field::Location, "Delhi".into());
        assert_eq!(draft.get(Field::Location), "Delhi");
        assert_eq!(draft.get(Field::Name), "");
    }
}
