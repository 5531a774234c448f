//! Network seams used by the flows.
//!
//! [`ApiClient`] implements both traits; tests substitute in-memory fakes.

use arena_sdk::client::{ApiClient, ApiError};
use arena_sdk::objects::{
    ManualPaymentReceipt, ManualPaymentRequest, PaymentMethod, UploadedImage, WalletBalance,
    Withdrawal, WithdrawalRequest,
};
use async_trait::async_trait;

use crate::proof::CapturedImage;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError>;

    async fn upload_screenshot(&self, image: &CapturedImage) -> Result<UploadedImage, ApiError>;

    async fn submit_manual_payment(
        &self,
        payment: &ManualPaymentRequest,
    ) -> Result<ManualPaymentReceipt, ApiError>;
}

#[async_trait]
pub trait WalletGateway: Send + Sync {
    async fn wallet_balance(&self) -> Result<WalletBalance, ApiError>;

    async fn request_withdrawal(&self, request: &WithdrawalRequest)
    -> Result<Withdrawal, ApiError>;
}

#[async_trait]
impl PaymentGateway for ApiClient {
    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        ApiClient::list_payment_methods(self).await
    }

    async fn upload_screenshot(&self, image: &CapturedImage) -> Result<UploadedImage, ApiError> {
        ApiClient::upload_screenshot(self, &image.file_name, &image.mime_type, image.bytes.clone())
            .await
    }

    async fn submit_manual_payment(
        &self,
        payment: &ManualPaymentRequest,
    ) -> Result<ManualPaymentReceipt, ApiError> {
        ApiClient::submit_manual_payment(self, payment).await
    }
}

#[async_trait]
impl WalletGateway for ApiClient {
    async fn wallet_balance(&self) -> Result<WalletBalance, ApiError> {
        ApiClient::wallet_balance(self).await
    }

    async fn request_withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, ApiError> {
        ApiClient::request_withdrawal(self, request).await
    }
}
