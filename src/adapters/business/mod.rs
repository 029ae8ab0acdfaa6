//! Business-data adapters. Implement BusinessDataPort.
//!
//! HTTP adapter for the real service and a mock adapter for offline use.

pub mod http_adapter;
pub mod mock_adapter;

pub use http_adapter::{encode_query_value, HttpBusinessAdapter};
pub use mock_adapter::MockBusinessAdapter;
