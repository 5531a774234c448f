//! Manual payment (wallet top-up) types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wire;

/// A way to pay manually, as configured by the operators.
///
/// The user is shown the QR code and account details, pays outside the
/// app, and uploads a screenshot as proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PaymentMethodWire")]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub qr_code_url: Option<String>,
    pub account_details: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentMethodWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    qr_code_url: Option<String>,
    #[serde(default)]
    qr_code: Option<String>,
    #[serde(default)]
    account_details: Option<String>,
}

impl TryFrom<PaymentMethodWire> for PaymentMethod {
    type Error = String;

    fn try_from(wire: PaymentMethodWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::require("id", [wire.id, wire.object_id])?,
            name: wire::require("name", [wire.display_name, wire.name])?,
            qr_code_url: wire::first_present([wire.qr_code_url, wire.qr_code]),
            account_details: wire.account_details,
        })
    }
}

/// Body of `POST /payments/manual`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPaymentRequest {
    pub method_id: String,
    pub amount: Decimal,
    pub screenshot_reference: String,
    pub transaction_reference: String,
}

/// Server acknowledgment of a manual payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ManualPaymentReceiptWire")]
pub struct ManualPaymentReceipt {
    pub id: String,
    pub status: VerificationStatus,
}

#[derive(Deserialize)]
struct ManualPaymentReceiptWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    status: VerificationStatus,
}

impl TryFrom<ManualPaymentReceiptWire> for ManualPaymentReceipt {
    type Error = String;

    fn try_from(wire: ManualPaymentReceiptWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::require("id", [wire.id, wire.object_id])?,
            status: wire.status,
        })
    }
}

/// Review state of a manual payment or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
    /// A status this client version does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Pending => write!(f, "pending"),
            VerificationStatus::Approved => write!(f, "approved"),
            VerificationStatus::Rejected => write!(f, "rejected"),
            VerificationStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Response of the screenshot upload endpoint.
///
/// `url` is the canonical reference submitted as the payment's
/// `screenshotReference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
    #[serde(default)]
    pub public_id: Option<String>,
}
