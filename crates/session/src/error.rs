//! Error types for session state transitions.

use thiserror::Error;

/// Errors raised when the user tries an action the current state does not allow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The onboarding step is missing required input
    #[error("Step {step} is incomplete")]
    StepIncomplete { step: usize },

    /// Onboarding can only be completed from its last step
    #[error("Onboarding can only be completed from the last step")]
    NotOnLastStep,

    /// Required form fields are empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A swap proposal needs one of the requester's listings to offer
    #[error("Select an item to offer for this swap")]
    OfferRequired,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SessionError>;
