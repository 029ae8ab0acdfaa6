//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{BusinessRequest, BusinessResult, DomainError, HeadlineUpdate};

/// Remote business-data service. Opaque: the application only sees typed results.
#[async_trait::async_trait]
pub trait BusinessDataPort: Send + Sync {
    /// Fetch rating, review count and headline for a validated request.
    async fn fetch_business_data(
        &self,
        request: &BusinessRequest,
    ) -> Result<BusinessResult, DomainError>;

    /// Ask the service for a fresh headline for an already known business.
    ///
    /// `name` and `location` come from the held result, not from the form draft.
    async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<HeadlineUpdate, DomainError>;
}
