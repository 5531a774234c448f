//! Errors surfaced by the client-held flows.
//!
//! Every error is recovered at the flow boundary: the flow keeps its
//! pre-call state and hands the error back for the presentation layer to
//! render with [`FlowError::user_message`].

use arena_sdk::client::{ApiError, GENERIC_ERROR_MESSAGE};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::flow::FlowStep;
use crate::proof::{ProofError, ProofSource};

/// Local input problems, caught before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown payment method: {0}")]
    UnknownMethod(String),

    #[error("not a valid amount: {0:?}")]
    InvalidAmount(String),

    #[error("amount must be at least {minimum}")]
    AmountBelowMinimum { minimum: Decimal },

    #[error("amount exceeds available balance of {balance}")]
    AmountExceedsBalance { balance: Decimal },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("a payment method must be selected first")]
    MissingMethod,

    #[error("a payment screenshot is required")]
    MissingProof,

    #[error("cannot {action} while {step}")]
    OutOfOrder { step: FlowStep, action: &'static str },
}

/// Errors returned by flow operations.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Device permission for the proof source was denied.
    #[error("permission denied for {0}")]
    Permission(ProofSource),

    /// The image could not be obtained from the proof source.
    #[error("capture failed: {0}")]
    Capture(#[from] ProofError),

    /// The local request governor refused the call.
    #[error("too many requests to {endpoint}")]
    AdmissionDenied { endpoint: String },

    /// The server answered with an error; `status` is absent when the
    /// response arrived but could not be understood.
    #[error("server error: {message}")]
    Server { status: Option<u16>, message: String },

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
}

impl FlowError {
    /// Text a presentation layer should show for this error.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation(e) => e.to_string(),
            FlowError::Permission(source) => format!(
                "Permission to access the {source} was denied. Allow access in settings and try again."
            ),
            FlowError::Capture(_) => "Could not read the selected image. Please try another one.".to_string(),
            FlowError::AdmissionDenied { .. } => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            FlowError::Server { message, .. } => message.clone(),
            FlowError::Network(message) => message.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::Validation(_))
    }
}

impl From<ApiError> for FlowError {
    fn from(err: ApiError) -> Self {
        let message = err.user_message();
        match err {
            ApiError::AdmissionDenied { endpoint } => FlowError::AdmissionDenied { endpoint },
            ApiError::Unauthorized => FlowError::Server {
                status: Some(401),
                message,
            },
            ApiError::Throttled { .. } => FlowError::Server {
                status: Some(429),
                message,
            },
            ApiError::Server { status, message } => FlowError::Server {
                status: Some(status.as_u16()),
                message,
            },
            ApiError::Network(_) => FlowError::Network(message),
            ApiError::Request(_) | ApiError::Json(_) | ApiError::Url(_) => FlowError::Server {
                status: None,
                message: GENERIC_ERROR_MESSAGE.to_string(),
            },
        }
    }
}
