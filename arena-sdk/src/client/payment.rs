//! Manual payment endpoints.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use super::{ApiClient, ApiError};
use crate::objects::{ManualPaymentReceipt, ManualPaymentRequest, PaymentMethod, UploadedImage};

impl ApiClient {
    /// `GET payments/methods` – list the manual payment methods.
    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.call("payments/methods", |http, url| http.get(url)).await
    }

    /// `POST upload/screenshot` – upload a proof-of-payment image as
    /// multipart field `image`.
    pub async fn upload_screenshot(
        &self,
        file_name: &str,
        mime_type: &str,
        data: Bytes,
    ) -> Result<UploadedImage, ApiError> {
        let part = Part::bytes(data.to_vec())
            .file_name(file_name.to_owned())
            .mime_str(mime_type)
            .map_err(ApiError::Request)?;
        let form = Form::new().part("image", part);

        self.call("upload/screenshot", |http, url| http.post(url).multipart(form))
            .await
    }

    /// `POST payments/manual` – queue a manual payment for verification.
    pub async fn submit_manual_payment(
        &self,
        payment: &ManualPaymentRequest,
    ) -> Result<ManualPaymentReceipt, ApiError> {
        self.call("payments/manual", |http, url| http.post(url).json(payment))
            .await
    }
}
