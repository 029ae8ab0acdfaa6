//! Infrastructure adapters. Implement ports.
//!
//! Remote business-data service and terminal UI. Map errors to DomainError.

pub mod business;
pub mod ui;
