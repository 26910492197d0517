use bhub_domain::{PaymentMethodId, ServiceId, VenueId};
use thiserror::Error;

use crate::wizard::WizardStep;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Venue not found: {0}")]
    VenueNotFound(VenueId),
    #[error("Service not found: {0}")]
    ServiceNotFound(ServiceId),
    #[error("Payment method not found: {0}")]
    PaymentMethodNotFound(PaymentMethodId),
    #[error("Event not found: {0}")]
    EventNotFound(String),
    #[error("`{operation}` is not available at step {step}")]
    InvalidStep {
        operation: &'static str,
        step: WizardStep,
    },
    #[error("A submission is already in progress")]
    SubmissionInFlight,
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by an [`crate::Authenticator`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid credentials. Try our demo accounts!")]
    InvalidCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("An account already exists for {0}")]
    EmailTaken(String),
}
