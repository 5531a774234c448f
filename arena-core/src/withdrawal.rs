//! Withdrawal requests.
//!
//! A withdrawal moves wallet balance back to the user through a payout
//! channel. The draft is checked against the current balance before
//! anything is sent; the server still has the final word.

use arena_sdk::objects::{Withdrawal, WithdrawalRequest};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::amount::parse_amount;
use crate::error::{FlowError, ValidationError};
use crate::gateway::WalletGateway;

/// Smallest amount that can be withdrawn.
pub const MIN_WITHDRAWAL_AMOUNT: Decimal = Decimal::TEN;

/// Withdrawal form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawalDraft {
    pub amount: String,
    pub method: String,
    pub account_details: String,
}

impl WithdrawalDraft {
    /// Validate the draft against `balance` and build the request body.
    pub fn validate(&self, balance: Decimal) -> Result<WithdrawalRequest, ValidationError> {
        let method = self.method.trim();
        if method.is_empty() {
            return Err(ValidationError::MissingField("payout method"));
        }
        let account_details = self.account_details.trim();
        if account_details.is_empty() {
            return Err(ValidationError::MissingField("account details"));
        }

        let amount = parse_amount(&self.amount, MIN_WITHDRAWAL_AMOUNT)?;
        if amount > balance {
            return Err(ValidationError::AmountExceedsBalance { balance });
        }

        Ok(WithdrawalRequest {
            amount,
            method: method.to_owned(),
            account_details: account_details.to_owned(),
        })
    }
}

/// Fetch the balance, validate `draft` against it and submit the request.
pub async fn submit_withdrawal<G>(gateway: &G, draft: &WithdrawalDraft) -> Result<Withdrawal, FlowError>
where
    G: WalletGateway + ?Sized,
{
    let balance = gateway.wallet_balance().await?;
    let request = draft.validate(balance.balance)?;

    match gateway.request_withdrawal(&request).await {
        Ok(withdrawal) => {
            info!(
                withdrawal_id = %withdrawal.id,
                amount = %withdrawal.amount,
                status = %withdrawal.status,
                "withdrawal requested"
            );
            Ok(withdrawal)
        }
        Err(e) => {
            warn!(error = %e, "withdrawal request failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_sdk::client::{ApiError, StatusCode};
    use arena_sdk::objects::{VerificationStatus, WalletBalance};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct FakeWallet {
        balance: Decimal,
        reject_with: Option<&'static str>,
        requests: Mutex<Vec<WithdrawalRequest>>,
    }

    impl FakeWallet {
        fn new(balance: Decimal) -> Self {
            Self {
                balance,
                reject_with: None,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WalletGateway for FakeWallet {
        async fn wallet_balance(&self) -> Result<WalletBalance, ApiError> {
            Ok(WalletBalance {
                balance: self.balance,
                currency: Some("NPR".to_string()),
            })
        }

        async fn request_withdrawal(
            &self,
            request: &WithdrawalRequest,
        ) -> Result<Withdrawal, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(message) = self.reject_with {
                return Err(ApiError::Server {
                    status: StatusCode::CONFLICT,
                    message: message.to_string(),
                });
            }
            Ok(Withdrawal {
                id: "w1".to_string(),
                amount: request.amount,
                method: Some(request.method.clone()),
                status: VerificationStatus::Pending,
                created_at: None,
            })
        }
    }

    fn draft(amount: &str) -> WithdrawalDraft {
        WithdrawalDraft {
            amount: amount.to_string(),
            method: "esewa".to_string(),
            account_details: "9800000000".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        let request = draft(" 150 ").validate(dec!(200)).unwrap();
        assert_eq!(request.amount, dec!(150));
        assert_eq!(request.method, "esewa");

        assert_eq!(
            draft("250").validate(dec!(200)).unwrap_err(),
            ValidationError::AmountExceedsBalance { balance: dec!(200) }
        );
        assert!(matches!(
            draft("5").validate(dec!(200)).unwrap_err(),
            ValidationError::AmountBelowMinimum { .. }
        ));
        assert!(draft("200").validate(dec!(200)).is_ok());

        let mut missing = draft("50");
        missing.account_details = "  ".to_string();
        assert_eq!(
            missing.validate(dec!(200)).unwrap_err(),
            ValidationError::MissingField("account details")
        );
    }

    #[tokio::test]
    async fn test_submit_withdrawal() {
        let wallet = FakeWallet::new(dec!(1000));
        let withdrawal = submit_withdrawal(&wallet, &draft("400")).await.unwrap();
        assert_eq!(withdrawal.status, VerificationStatus::Pending);
        assert_eq!(wallet.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_sent() {
        let wallet = FakeWallet::new(dec!(20));
        let err = submit_withdrawal(&wallet, &draft("400")).await.unwrap_err();
        assert!(err.is_validation());
        assert!(wallet.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_message() {
        let wallet = FakeWallet {
            reject_with: Some("A withdrawal is already pending"),
            ..FakeWallet::new(dec!(1000))
        };
        let err = submit_withdrawal(&wallet, &draft("100")).await.unwrap_err();
        assert_eq!(err.user_message(), "A withdrawal is already pending");
    }
}
