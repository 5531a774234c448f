//! Arena core
//!
//! Client-held flows of the Arena app: the manual payment submission state
//! machine and withdrawal request validation. Network access goes through
//! the [`gateway`] traits, which `arena_sdk::client::ApiClient` implements.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod amount;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod proof;
pub mod withdrawal;

pub use error::{FlowError, ValidationError};
pub use flow::{CaptureOutcome, FlowState, FlowStep, PaymentSubmissionFlow, ScreenshotRef};
