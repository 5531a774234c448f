//! Wallet endpoints.

use super::{ApiClient, ApiError};
use crate::objects::{WalletBalance, Withdrawal, WithdrawalRequest};

impl ApiClient {
    /// `GET wallet/balance`
    pub async fn wallet_balance(&self) -> Result<WalletBalance, ApiError> {
        self.call("wallet/balance", |http, url| http.get(url)).await
    }

    /// `POST wallet/withdrawals` – request a payout from the wallet.
    pub async fn request_withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, ApiError> {
        self.call("wallet/withdrawals", |http, url| http.post(url).json(request))
            .await
    }

    /// `GET wallet/withdrawals` – the user's withdrawal history.
    pub async fn list_withdrawals(&self) -> Result<Vec<Withdrawal>, ApiError> {
        self.call("wallet/withdrawals", |http, url| http.get(url)).await
    }
}
