//! Arena SDK
//!
//! Wire types, the client-side request governor, and (behind the `client`
//! feature) the typed REST client for the Arena tournament backend.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod governor;
pub mod objects;
pub mod session;

#[cfg(feature = "client")]
pub mod client;
