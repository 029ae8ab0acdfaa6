//! Core domain layer. No external I/O dependencies.
//!
//! Entities and validation rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod validation;

pub use entities::{BusinessRequest, BusinessResult, Draft, Field, HeadlineUpdate, MAX_RATING};
pub use errors::DomainError;
pub use validation::{validate, ValidationErrors, MIN_FIELD_CHARS};
