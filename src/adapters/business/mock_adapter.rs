//! Mock business-data adapter for running without the remote service.
//!
//! Returns deterministic data derived from the business name.

use crate::domain::{BusinessRequest, BusinessResult, DomainError, HeadlineUpdate};
use crate::ports::BusinessDataPort;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

const HEADLINE_TEMPLATES: &[&str] = &[
    "Why {name} Is {location}'s Best-Kept Secret",
    "{name}: {location}'s Favourite Local Spot",
    "Discover {name} - Loved by Locals in {location}",
    "Top-Rated in {location}: See Why Everyone Visits {name}",
    "{name} Brings Something Special to {location}",
];

/// Mock adapter.
///
/// Rating and review count are stable for a given name; headlines rotate
/// through a fixed set on every call. Simulates network latency.
pub struct MockBusinessAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    next_headline: AtomicUsize,
}

impl MockBusinessAdapter {
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            next_headline: AtomicUsize::new(0),
        }
    }

    fn headline(&self, name: &str, location: &str) -> String {
        let idx = self.next_headline.fetch_add(1, Ordering::Relaxed) % HEADLINE_TEMPLATES.len();
        HEADLINE_TEMPLATES[idx]
            .replace("{name}", name)
            .replace("{location}", location)
    }
}

/// Stable per-name seed (FNV-1a).
fn seed(name: &str) -> u64 {
    name.to_lowercase()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        })
}

#[async_trait::async_trait]
impl BusinessDataPort for MockBusinessAdapter {
    async fn fetch_business_data(
        &self,
        request: &BusinessRequest,
    ) -> Result<BusinessResult, DomainError> {
        info!(name = %request.name(), location = %request.location(), "[MOCK] business data");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let s = seed(request.name());
        // 3.5 ..= 5.0 in steps of 0.1
        let rating = 3.5 + (s % 16) as f64 / 10.0;
        let reviews = 20 + (s / 16) % 1980;

        Ok(BusinessResult {
            name: request.name().to_string(),
            location: request.location().to_string(),
            rating: (rating * 10.0).round() / 10.0,
            reviews,
            headline: self.headline(request.name(), request.location()),
            created_at: Utc::now(),
        })
    }

    async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<HeadlineUpdate, DomainError> {
        info!(name, location, "[MOCK] regenerate headline");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(HeadlineUpdate {
            headline: self.headline(name, location),
        })
    }
}
