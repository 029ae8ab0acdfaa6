//! Application use cases. Orchestrate domain logic via ports.

pub mod form_controller;
pub mod session_controller;

pub use form_controller::{FormController, SubmitOutcome};
pub use session_controller::{
    OperationOutcome, SessionController, SessionState, StaleResponsePolicy,
    FETCH_FAILED_MESSAGE, REGENERATE_FAILED_MESSAGE,
};
