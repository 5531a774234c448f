//! Wallet balance and withdrawal types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::payment::VerificationStatus;
use super::wire;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub balance: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Body of `POST /wallet/withdrawals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub amount: Decimal,
    /// Payout channel name, e.g. `"esewa"` or `"bank"`.
    pub method: String,
    pub account_details: String,
}

/// A withdrawal as recorded by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WithdrawalWire")]
pub struct Withdrawal {
    pub id: String,
    pub amount: Decimal,
    pub method: Option<String>,
    pub status: VerificationStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WithdrawalWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    amount: Decimal,
    #[serde(default)]
    method: Option<String>,
    status: VerificationStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    created_at: Option<OffsetDateTime>,
}

impl TryFrom<WithdrawalWire> for Withdrawal {
    type Error = String;

    fn try_from(wire: WithdrawalWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::require("id", [wire.id, wire.object_id])?,
            amount: wire.amount,
            method: wire.method,
            status: wire.status,
            created_at: wire.created_at,
        })
    }
}
