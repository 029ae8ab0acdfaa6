//! Inbound ports. UI (adapter) calls into the application.

use crate::domain::{BusinessRequest, DomainError};
use crate::usecases::OperationOutcome;

/// Input port: the interactive front end drives the use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}

/// Receives validated requests from the form.
///
/// Failures never surface here; they land in the session state.
#[async_trait::async_trait]
pub trait SubmitPort: Send + Sync {
    async fn submit_full_request(&self, request: BusinessRequest) -> OperationOutcome;
}
