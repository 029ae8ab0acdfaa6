//! Session state: the single result slot, the loading flag and the error banner.
//!
//! Two operations share that state:
//! - full fetch replaces the result wholesale
//! - headline regeneration merges only `headline` into the held result
//!
//! Errors never leave this module; callers observe `error_message` and `is_loading`.
//! The state lock is never held across a remote call.

use crate::domain::{BusinessRequest, BusinessResult};
use crate::ports::{BusinessDataPort, SubmitPort};
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong while fetching business data";
pub const REGENERATE_FAILED_MESSAGE: &str = "Failed to regenerate headline";

/// What to do with a completion that lands after a newer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Apply every completion; whichever lands last determines state.
    #[default]
    LastWriteWins,
    /// Apply a completion only if no newer operation was dispatched after it.
    LatestDispatchWins,
}

/// Observable session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub result: Option<BusinessResult>,
    pub is_loading: bool,
    /// Empty when there is no error to show.
    pub error_message: String,
}

/// How an operation ended. Informational; the UI reads state, not this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Response merged into state.
    Applied,
    /// Remote call failed; `error_message` was set.
    Failed,
    /// Precondition not met; nothing sent, nothing changed.
    Skipped,
    /// Completion superseded by a newer dispatch and dropped.
    Discarded,
}

/// Orchestrates full fetch and headline regeneration over one shared state.
pub struct SessionController {
    data: Arc<dyn BusinessDataPort>,
    state: RwLock<SessionState>,
    policy: StaleResponsePolicy,
    /// Sequence number of the most recent dispatch.
    dispatched: AtomicU64,
}

impl SessionController {
    pub fn new(data: Arc<dyn BusinessDataPort>) -> Self {
        Self::with_policy(data, StaleResponsePolicy::default())
    }

    pub fn with_policy(data: Arc<dyn BusinessDataPort>, policy: StaleResponsePolicy) -> Self {
        Self {
            data,
            state: RwLock::new(SessionState::default()),
            policy,
            dispatched: AtomicU64::new(0),
        }
    }

    /// Consistent copy of the whole state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn result(&self) -> Option<BusinessResult> {
        self.state.read().await.result.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    pub async fn error_message(&self) -> String {
        self.state.read().await.error_message.clone()
    }

    /// Fetch data for `request` and replace the result slot with the response.
    ///
    /// On failure the previous result (if any) is kept and the uniform fetch
    /// message is set. Loading is cleared on every path.
    pub async fn submit_full_request(&self, request: BusinessRequest) -> OperationOutcome {
        let seq = self.begin().await;
        info!(
            seq,
            name = %request.name(),
            location = %request.location(),
            "fetching business data"
        );

        let response = self.data.fetch_business_data(&request).await;

        let mut state = self.state.write().await;
        if !self.accepts(seq) {
            debug!(seq, "discarding superseded business data response");
            return OperationOutcome::Discarded;
        }
        state.is_loading = false;
        match response {
            Ok(result) => {
                info!(
                    seq,
                    rating = result.rating,
                    reviews = result.reviews,
                    "business data loaded"
                );
                state.result = Some(result);
                OperationOutcome::Applied
            }
            Err(e) => {
                warn!(seq, error = %e, "error fetching business data");
                state.error_message = FETCH_FAILED_MESSAGE.to_string();
                OperationOutcome::Failed
            }
        }
    }

    /// Ask for a new headline for the held result and merge it in.
    ///
    /// No-op without a result. Every other field of the result is preserved;
    /// on failure the previous headline stays.
    pub async fn regenerate_headline(&self) -> OperationOutcome {
        let (seq, name, location) = {
            let mut state = self.state.write().await;
            let Some(current) = state.result.as_ref() else {
                debug!("regenerate requested without a result; ignoring");
                return OperationOutcome::Skipped;
            };
            let name = current.name.clone();
            let location = current.location.clone();
            let seq = self.mark_loading(&mut state);
            (seq, name, location)
        };
        info!(seq, name = %name, location = %location, "regenerating headline");

        let response = self.data.regenerate_headline(&name, &location).await;

        let mut state = self.state.write().await;
        if !self.accepts(seq) {
            debug!(seq, "discarding superseded headline response");
            return OperationOutcome::Discarded;
        }
        state.is_loading = false;
        match response {
            Ok(update) => {
                info!(seq, headline = %update.headline, "headline regenerated");
                // A full fetch may have replaced the slot meanwhile; merge into whatever is held.
                let merged = state
                    .result
                    .as_ref()
                    .map(|current| current.with_headline(update.headline));
                match merged {
                    Some(result) => {
                        state.result = Some(result);
                        OperationOutcome::Applied
                    }
                    None => OperationOutcome::Skipped,
                }
            }
            Err(e) => {
                warn!(seq, error = %e, "error regenerating headline");
                state.error_message = REGENERATE_FAILED_MESSAGE.to_string();
                OperationOutcome::Failed
            }
        }
    }

    async fn begin(&self) -> u64 {
        let mut state = self.state.write().await;
        self.mark_loading(&mut state)
    }

    fn mark_loading(&self, state: &mut SessionState) -> u64 {
        state.is_loading = true;
        state.error_message.clear();
        self.dispatched.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn accepts(&self, seq: u64) -> bool {
        match self.policy {
            StaleResponsePolicy::LastWriteWins => true,
            StaleResponsePolicy::LatestDispatchWins => {
                self.dispatched.load(Ordering::SeqCst) == seq
            }
        }
    }
}

#[async_trait::async_trait]
impl SubmitPort for SessionController {
    async fn submit_full_request(&self, request: BusinessRequest) -> OperationOutcome {
        SessionController::submit_full_request(self, request).await
    }
}
