//! biz-dash: local business insights (rating, reviews, AI headline) with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
