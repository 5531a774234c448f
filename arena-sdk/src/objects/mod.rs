//! Request and response types of the Arena REST API.
//!
//! The API is JSON with camelCase keys. Every response type tolerates
//! unknown fields and defaults optional ones, so additive server changes
//! never break deserialization.

pub mod error;
pub mod payment;
pub mod team;
pub mod wallet;
mod wire;

pub use error::ErrorBody;
pub use payment::{
    ManualPaymentReceipt, ManualPaymentRequest, PaymentMethod, UploadedImage,
    VerificationStatus,
};
pub use team::{
    CreateJoinRequest, CreateTeam, JoinRequest, JoinRequestStatus, Team, TeamMember, TeamRole,
    UpdateTeam,
};
pub use wallet::{WalletBalance, Withdrawal, WithdrawalRequest};
