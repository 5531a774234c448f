//! Manual payment submission flow.
//!
//! A linear sequence of steps driven by UI events:
//!
//! 1. `SelectingMethod` – pick one of the loaded payment methods
//! 2. `EnteringAmount` – enter an amount of at least [`MIN_PAYMENT_AMOUNT`]
//! 3. `ShowingInstructions` – the QR code / account details are shown
//! 4. `CapturingProof` – a screenshot has been picked and can be submitted
//! 5. `Confirmed` – the server acknowledged the submission
//!
//! Steps cannot be skipped or reordered: proof can only be captured after
//! the instructions for the chosen method and amount were shown, and
//! `Confirmed` is only entered after a successful server response.
//! Failed operations leave the state untouched and return a [`FlowError`].
//!
//! Operations take `&mut self`, so no two transitions of one flow can run
//! at once. Dropping a pending [`submit`](PaymentSubmissionFlow::submit)
//! future abandons the flow; its response is never observed.

use std::sync::Arc;

use arena_sdk::governor::{Clock, SystemClock};
use arena_sdk::objects::{ManualPaymentReceipt, ManualPaymentRequest, PaymentMethod, UploadedImage};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::amount::{MIN_PAYMENT_AMOUNT, parse_amount};
use crate::error::{FlowError, ValidationError};
use crate::gateway::PaymentGateway;
use crate::proof::{CapturedImage, ProofProvider, ProofSource};

/// Step tag of a [`FlowState`], e.g. for a step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowStep {
    SelectingMethod,
    EnteringAmount,
    ShowingInstructions,
    CapturingProof,
    Confirmed,
}

impl FlowStep {
    /// Zero-based position in the flow.
    pub fn index(self) -> usize {
        match self {
            FlowStep::SelectingMethod => 0,
            FlowStep::EnteringAmount => 1,
            FlowStep::ShowingInstructions => 2,
            FlowStep::CapturingProof => 3,
            FlowStep::Confirmed => 4,
        }
    }
}

impl std::fmt::Display for FlowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowStep::SelectingMethod => write!(f, "selecting a method"),
            FlowStep::EnteringAmount => write!(f, "entering the amount"),
            FlowStep::ShowingInstructions => write!(f, "showing instructions"),
            FlowStep::CapturingProof => write!(f, "capturing proof"),
            FlowStep::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// The proof attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenshotRef {
    /// Picked on the device, not yet uploaded.
    Local(CapturedImage),
    /// Uploaded; the URL is what the server receives.
    Uploaded(UploadedImage),
}

impl ScreenshotRef {
    pub fn uri(&self) -> &str {
        match self {
            ScreenshotRef::Local(image) => &image.uri,
            ScreenshotRef::Uploaded(image) => &image.url,
        }
    }
}

/// State of the flow. Each variant carries only the fields valid in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    SelectingMethod,
    EnteringAmount {
        method: PaymentMethod,
    },
    ShowingInstructions {
        method: PaymentMethod,
        amount: Decimal,
        transaction_reference: String,
    },
    CapturingProof {
        method: PaymentMethod,
        amount: Decimal,
        transaction_reference: String,
        proof: ScreenshotRef,
    },
    Confirmed {
        submission: ManualPaymentRequest,
        receipt: ManualPaymentReceipt,
    },
}

impl FlowState {
    pub fn step(&self) -> FlowStep {
        match self {
            FlowState::SelectingMethod => FlowStep::SelectingMethod,
            FlowState::EnteringAmount { .. } => FlowStep::EnteringAmount,
            FlowState::ShowingInstructions { .. } => FlowStep::ShowingInstructions,
            FlowState::CapturingProof { .. } => FlowStep::CapturingProof,
            FlowState::Confirmed { .. } => FlowStep::Confirmed,
        }
    }
}

/// Result of [`PaymentSubmissionFlow::capture_proof`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured,
    /// The user closed the picker; nothing changed.
    Cancelled,
}

/// Client-held state machine for a manual payment.
pub struct PaymentSubmissionFlow<G> {
    gateway: G,
    clock: Arc<dyn Clock>,
    methods: Vec<PaymentMethod>,
    state: FlowState,
}

impl<G: PaymentGateway> PaymentSubmissionFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_clock(gateway, Arc::new(SystemClock))
    }

    /// Use `clock` for generated transaction references.
    pub fn with_clock(gateway: G, clock: Arc<dyn Clock>) -> Self {
        Self {
            gateway,
            clock,
            methods: Vec::new(),
            state: FlowState::SelectingMethod,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn step(&self) -> FlowStep {
        self.state.step()
    }

    /// Methods from the last successful [`load_methods`](Self::load_methods).
    pub fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch the available payment methods.
    ///
    /// On failure the previously loaded list and the state are kept.
    pub async fn load_methods(&mut self) -> Result<&[PaymentMethod], FlowError> {
        let methods = self.gateway.list_payment_methods().await.map_err(|e| {
            warn!(error = %e, "failed to load payment methods");
            FlowError::from(e)
        })?;
        debug!(count = methods.len(), "payment methods loaded");
        self.methods = methods;
        Ok(&self.methods)
    }

    /// Choose the method with id `method_id` from the loaded list.
    pub fn select_method(&mut self, method_id: &str) -> Result<(), FlowError> {
        self.expect_step(FlowStep::SelectingMethod, "select a method")?;
        let method = self
            .methods
            .iter()
            .find(|m| m.id == method_id)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownMethod(method_id.to_owned()))?;

        debug!(method_id = %method.id, "payment method selected");
        self.state = FlowState::EnteringAmount { method };
        Ok(())
    }

    /// Confirm the entered amount and show the payment instructions.
    pub fn set_amount(&mut self, value: &str) -> Result<Decimal, FlowError> {
        let FlowState::EnteringAmount { method } = &self.state else {
            return Err(match self.step() {
                FlowStep::SelectingMethod => ValidationError::MissingMethod,
                step => ValidationError::OutOfOrder {
                    step,
                    action: "set the amount",
                },
            }
            .into());
        };

        let amount = parse_amount(value, MIN_PAYMENT_AMOUNT)?;
        self.state = FlowState::ShowingInstructions {
            method: method.clone(),
            amount,
            transaction_reference: String::new(),
        };
        Ok(amount)
    }

    /// Go back from amount entry to method selection.
    pub fn back(&mut self) -> Result<(), FlowError> {
        self.expect_step(FlowStep::EnteringAmount, "go back")?;
        self.state = FlowState::SelectingMethod;
        Ok(())
    }

    /// Record the user's own transaction reference (may be blank).
    pub fn set_transaction_reference(&mut self, text: &str) -> Result<(), FlowError> {
        match &mut self.state {
            FlowState::ShowingInstructions {
                transaction_reference,
                ..
            }
            | FlowState::CapturingProof {
                transaction_reference,
                ..
            } => {
                *transaction_reference = text.to_owned();
                Ok(())
            }
            other => Err(ValidationError::OutOfOrder {
                step: other.step(),
                action: "set the transaction reference",
            }
            .into()),
        }
    }

    /// Pick or take a screenshot as proof of payment.
    pub async fn capture_proof<P>(
        &mut self,
        provider: &P,
        source: ProofSource,
    ) -> Result<CaptureOutcome, FlowError>
    where
        P: ProofProvider + ?Sized,
    {
        self.expect_step(FlowStep::ShowingInstructions, "capture proof")?;

        if !provider.ensure_permission(source).await {
            info!(%source, "proof source permission denied");
            return Err(FlowError::Permission(source));
        }

        let Some(image) = provider.acquire(source).await? else {
            return Ok(CaptureOutcome::Cancelled);
        };

        if let FlowState::ShowingInstructions {
            method,
            amount,
            transaction_reference,
        } = &self.state
        {
            debug!(uri = %image.uri, %source, "proof captured");
            self.state = FlowState::CapturingProof {
                method: method.clone(),
                amount: *amount,
                transaction_reference: transaction_reference.clone(),
                proof: ScreenshotRef::Local(image),
            };
        }
        Ok(CaptureOutcome::Captured)
    }

    /// Discard the captured proof and return to the instructions.
    pub fn change_proof(&mut self) -> Result<(), FlowError> {
        let FlowState::CapturingProof {
            method,
            amount,
            transaction_reference,
            ..
        } = &self.state
        else {
            return Err(ValidationError::OutOfOrder {
                step: self.step(),
                action: "change the proof",
            }
            .into());
        };

        self.state = FlowState::ShowingInstructions {
            method: method.clone(),
            amount: *amount,
            transaction_reference: transaction_reference.clone(),
        };
        Ok(())
    }

    /// Upload the proof if needed and submit the payment for verification.
    ///
    /// A blank transaction reference is replaced by `TXN<unix millis>`.
    /// On any failure the flow stays in `CapturingProof` so the user can
    /// retry or change the proof; an already uploaded screenshot is kept
    /// and not uploaded again.
    pub async fn submit(&mut self) -> Result<ManualPaymentReceipt, FlowError> {
        let FlowState::CapturingProof {
            method,
            amount,
            transaction_reference,
            proof,
        } = &self.state
        else {
            return Err(ValidationError::MissingProof.into());
        };
        let method_id = method.id.clone();
        let amount = *amount;
        let reference = transaction_reference.trim().to_owned();
        let proof = proof.clone();

        let uploaded = match proof {
            ScreenshotRef::Uploaded(uploaded) => uploaded,
            ScreenshotRef::Local(image) => {
                let uploaded = self.gateway.upload_screenshot(&image).await.map_err(|e| {
                    warn!(error = %e, "screenshot upload failed");
                    FlowError::from(e)
                })?;
                if let FlowState::CapturingProof { proof, .. } = &mut self.state {
                    *proof = ScreenshotRef::Uploaded(uploaded.clone());
                }
                uploaded
            }
        };

        let transaction_reference = if reference.is_empty() {
            fallback_reference(self.clock.now_millis())
        } else {
            reference
        };

        let submission = ManualPaymentRequest {
            method_id,
            amount,
            screenshot_reference: uploaded.url,
            transaction_reference,
        };

        match self.gateway.submit_manual_payment(&submission).await {
            Ok(receipt) => {
                info!(
                    payment_id = %receipt.id,
                    status = %receipt.status,
                    method_id = %submission.method_id,
                    amount = %submission.amount,
                    "manual payment submitted"
                );
                self.state = FlowState::Confirmed {
                    submission,
                    receipt: receipt.clone(),
                };
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "manual payment submission failed");
                Err(e.into())
            }
        }
    }

    /// Return to method selection and clear everything entered so far.
    ///
    /// The loaded method list is kept; call `load_methods` again to refresh.
    pub fn reset(&mut self) {
        self.state = FlowState::SelectingMethod;
    }

    fn expect_step(&self, expected: FlowStep, action: &'static str) -> Result<(), FlowError> {
        let step = self.step();
        if step != expected {
            return Err(ValidationError::OutOfOrder { step, action }.into());
        }
        Ok(())
    }
}

/// Transaction reference used when the user leaves the field blank.
pub fn fallback_reference(now_millis: i64) -> String {
    format!("TXN{now_millis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_sdk::client::{ApiError, StatusCode};
    use arena_sdk::governor::ManualClock;
    use arena_sdk::objects::VerificationStatus;
    use async_trait::async_trait;
    use bytes::Bytes;
    use rust_decimal_macros::dec;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::proof::ProofError;

    #[derive(Default)]
    struct FakeGateway {
        methods: Vec<PaymentMethod>,
        fail_methods: bool,
        uploads: Mutex<u32>,
        submissions: Mutex<Vec<ManualPaymentRequest>>,
        responses: Mutex<VecDeque<Result<ManualPaymentReceipt, ApiError>>>,
    }

    impl FakeGateway {
        fn with_methods() -> Self {
            Self {
                methods: vec![
                    PaymentMethod {
                        id: "M1".to_string(),
                        name: "Esewa QR".to_string(),
                        qr_code_url: Some("https://cdn.example.com/esewa.png".to_string()),
                        account_details: None,
                    },
                    PaymentMethod {
                        id: "M2".to_string(),
                        name: "Bank transfer".to_string(),
                        qr_code_url: None,
                        account_details: Some("Acct 0011-22".to_string()),
                    },
                ],
                ..Default::default()
            }
        }

        fn respond(&self, response: Result<ManualPaymentReceipt, ApiError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        fn submissions(&self) -> Vec<ManualPaymentRequest> {
            self.submissions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for FakeGateway {
        async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
            if self.fail_methods {
                return Err(ApiError::Server {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Could not load methods".to_string(),
                });
            }
            Ok(self.methods.clone())
        }

        async fn upload_screenshot(
            &self,
            image: &CapturedImage,
        ) -> Result<UploadedImage, ApiError> {
            *self.uploads.lock().unwrap() += 1;
            Ok(UploadedImage {
                url: format!("https://cdn.example.com/{}", image.file_name),
                public_id: Some("proofs/1".to_string()),
            })
        }

        async fn submit_manual_payment(
            &self,
            payment: &ManualPaymentRequest,
        ) -> Result<ManualPaymentReceipt, ApiError> {
            self.submissions.lock().unwrap().push(payment.clone());
            self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
                Ok(ManualPaymentReceipt {
                    id: "p1".to_string(),
                    status: VerificationStatus::Pending,
                })
            })
        }
    }

    struct FakeProvider {
        granted: bool,
        cancel: bool,
    }

    impl FakeProvider {
        fn granted() -> Self {
            Self {
                granted: true,
                cancel: false,
            }
        }
    }

    #[async_trait]
    impl ProofProvider for FakeProvider {
        async fn ensure_permission(&self, _source: ProofSource) -> bool {
            self.granted
        }

        async fn acquire(&self, _source: ProofSource) -> Result<Option<CapturedImage>, ProofError> {
            if self.cancel {
                return Ok(None);
            }
            Ok(Some(CapturedImage {
                uri: "file:///tmp/proof.jpg".to_string(),
                file_name: "proof.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                bytes: Bytes::from_static(b"\xff\xd8\xff"),
            }))
        }
    }

    const NOW: i64 = 1_717_000_000_123;

    fn flow(gateway: FakeGateway) -> PaymentSubmissionFlow<FakeGateway> {
        PaymentSubmissionFlow::with_clock(gateway, Arc::new(ManualClock::new(NOW)))
    }

    async fn flow_at_capturing_proof(gateway: FakeGateway) -> PaymentSubmissionFlow<FakeGateway> {
        let mut flow = flow(gateway);
        flow.load_methods().await.unwrap();
        flow.select_method("M1").unwrap();
        flow.set_amount("500").unwrap();
        flow.capture_proof(&FakeProvider::granted(), ProofSource::Gallery)
            .await
            .unwrap();
        flow
    }

    #[tokio::test]
    async fn test_end_to_end_submission() {
        let mut flow = flow_at_capturing_proof(FakeGateway::with_methods()).await;
        assert_eq!(flow.step(), FlowStep::CapturingProof);

        let receipt = flow.submit().await.unwrap();
        assert_eq!(receipt.status, VerificationStatus::Pending);
        assert_eq!(flow.step(), FlowStep::Confirmed);

        let submissions = flow.gateway().submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].method_id, "M1");
        assert_eq!(submissions[0].amount, dec!(500));
        assert_eq!(submissions[0].transaction_reference, format!("TXN{NOW}"));
        assert_eq!(
            submissions[0].screenshot_reference,
            "https://cdn.example.com/proof.jpg"
        );
    }

    #[tokio::test]
    async fn test_fallback_reference_format() {
        let mut flow = flow_at_capturing_proof(FakeGateway::with_methods()).await;
        flow.set_transaction_reference("   ").unwrap();
        flow.submit().await.unwrap();

        let reference = &flow.gateway().submissions()[0].transaction_reference;
        let digits = reference.strip_prefix("TXN").unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_user_reference_is_kept() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();
        flow.select_method("M2").unwrap();
        flow.set_amount("10.01").unwrap();
        flow.set_transaction_reference(" BANK-7781 ").unwrap();
        flow.capture_proof(&FakeProvider::granted(), ProofSource::Camera)
            .await
            .unwrap();
        flow.submit().await.unwrap();
        assert_eq!(
            flow.gateway().submissions()[0].transaction_reference,
            "BANK-7781"
        );
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_state() {
        let gateway = FakeGateway::with_methods();
        gateway.respond(Err(ApiError::Server {
            status: StatusCode::BAD_REQUEST,
            message: "Amount exceeds limit".to_string(),
        }));
        let mut flow = flow_at_capturing_proof(gateway).await;

        let err = flow.submit().await.unwrap_err();
        assert_eq!(err.user_message(), "Amount exceeds limit");
        assert_eq!(flow.step(), FlowStep::CapturingProof);

        // retry reuses the uploaded screenshot
        flow.submit().await.unwrap();
        assert_eq!(flow.step(), FlowStep::Confirmed);
        assert_eq!(*flow.gateway().uploads.lock().unwrap(), 1);
        assert_eq!(flow.gateway().submissions().len(), 2);
    }

    #[tokio::test]
    async fn test_admission_denied_keeps_state() {
        let gateway = FakeGateway::with_methods();
        gateway.respond(Err(ApiError::AdmissionDenied {
            endpoint: "payments/manual".to_string(),
        }));
        let mut flow = flow_at_capturing_proof(gateway).await;

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, FlowError::AdmissionDenied { .. }));
        assert_eq!(flow.step(), FlowStep::CapturingProof);
    }

    #[tokio::test]
    async fn test_load_methods_failure_leaves_state() {
        let mut flow = flow(FakeGateway {
            fail_methods: true,
            ..FakeGateway::with_methods()
        });
        let err = flow.load_methods().await.unwrap_err();
        assert_eq!(err.user_message(), "Could not load methods");
        assert_eq!(flow.step(), FlowStep::SelectingMethod);
        assert!(flow.methods().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_method_rejected() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();
        let err = flow.select_method("M9").unwrap_err();
        assert!(matches!(
            err,
            FlowError::Validation(ValidationError::UnknownMethod(_))
        ));
        assert_eq!(flow.step(), FlowStep::SelectingMethod);
    }

    #[tokio::test]
    async fn test_amount_validation_keeps_state() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();
        flow.select_method("M1").unwrap();

        assert!(flow.set_amount("9.99").unwrap_err().is_validation());
        assert!(flow.set_amount("ten").unwrap_err().is_validation());
        assert_eq!(flow.step(), FlowStep::EnteringAmount);

        assert_eq!(flow.set_amount("10").unwrap(), dec!(10));
        assert_eq!(flow.step(), FlowStep::ShowingInstructions);
    }

    #[tokio::test]
    async fn test_steps_cannot_be_skipped() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();

        assert!(matches!(
            flow.set_amount("500").unwrap_err(),
            FlowError::Validation(ValidationError::MissingMethod)
        ));
        assert!(
            flow.capture_proof(&FakeProvider::granted(), ProofSource::Gallery)
                .await
                .is_err()
        );
        assert!(matches!(
            flow.submit().await.unwrap_err(),
            FlowError::Validation(ValidationError::MissingProof)
        ));

        flow.select_method("M1").unwrap();
        assert!(
            flow.capture_proof(&FakeProvider::granted(), ProofSource::Gallery)
                .await
                .is_err()
        );
        assert_eq!(flow.step(), FlowStep::EnteringAmount);
        assert!(flow.gateway().submissions().is_empty());
    }

    #[tokio::test]
    async fn test_back_and_change_proof() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();
        flow.select_method("M1").unwrap();
        flow.back().unwrap();
        assert_eq!(flow.step(), FlowStep::SelectingMethod);
        assert!(flow.back().is_err());

        flow.select_method("M2").unwrap();
        flow.set_amount("75").unwrap();
        flow.set_transaction_reference("REF1").unwrap();
        flow.capture_proof(&FakeProvider::granted(), ProofSource::Gallery)
            .await
            .unwrap();
        flow.change_proof().unwrap();

        match flow.state() {
            FlowState::ShowingInstructions {
                method,
                amount,
                transaction_reference,
            } => {
                assert_eq!(method.id, "M2");
                assert_eq!(*amount, dec!(75));
                assert_eq!(transaction_reference, "REF1");
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_permission_denied_keeps_state() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();
        flow.select_method("M1").unwrap();
        flow.set_amount("500").unwrap();

        let denied = FakeProvider {
            granted: false,
            cancel: false,
        };
        let err = flow
            .capture_proof(&denied, ProofSource::Camera)
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Permission(ProofSource::Camera)));
        assert!(!err.is_validation());
        assert_eq!(flow.step(), FlowStep::ShowingInstructions);
    }

    #[tokio::test]
    async fn test_cancelled_capture_keeps_state() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.load_methods().await.unwrap();
        flow.select_method("M1").unwrap();
        flow.set_amount("500").unwrap();

        let cancelling = FakeProvider {
            granted: true,
            cancel: true,
        };
        let outcome = flow
            .capture_proof(&cancelling, ProofSource::Gallery)
            .await
            .unwrap();
        assert_eq!(outcome, CaptureOutcome::Cancelled);
        assert_eq!(flow.step(), FlowStep::ShowingInstructions);
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let mut flow = flow(FakeGateway::with_methods());
        flow.reset();
        assert_eq!(flow.state(), &FlowState::SelectingMethod);

        let mut flow = flow_at_capturing_proof(FakeGateway::with_methods()).await;
        flow.reset();
        assert_eq!(flow.state(), &FlowState::SelectingMethod);
        flow.reset();
        assert_eq!(flow.state(), &FlowState::SelectingMethod);

        flow.submit().await.unwrap_err();
        flow.select_method("M1").unwrap();
        match flow.state() {
            FlowState::EnteringAmount { method } => assert_eq!(method.id, "M1"),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reset_after_confirmation() {
        let mut flow = flow_at_capturing_proof(FakeGateway::with_methods()).await;
        flow.submit().await.unwrap();
        assert!(flow.submit().await.is_err());
        assert_eq!(flow.gateway().submissions().len(), 1);
        flow.reset();
        assert_eq!(flow.step(), FlowStep::SelectingMethod);
    }

    #[test]
    fn test_step_indices_are_ordered() {
        let steps = [
            FlowStep::SelectingMethod,
            FlowStep::EnteringAmount,
            FlowStep::ShowingInstructions,
            FlowStep::CapturingProof,
            FlowStep::Confirmed,
        ];
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }
}
