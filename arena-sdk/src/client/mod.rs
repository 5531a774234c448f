//! HTTP client for the Arena REST API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.
//!
//! Every call passes through the [`RequestGovernor`] before it reaches the
//! network and maps the server's status conventions onto [`ApiError`]:
//! `401` discards the stored session token, and `429` clears the
//! governor's window for the endpoint.

mod payment;
mod team;
mod wallet;

pub use reqwest::StatusCode;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::governor::RequestGovernor;
use crate::objects::ErrorBody;
use crate::session::SessionStore;

/// Shown when the server gives no usable error message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

const ADMISSION_DENIED_MESSAGE: &str = "Too many requests. Please wait a moment and try again.";
const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Please log in again.";
const THROTTLED_MESSAGE: &str = "The server is busy. Please try again shortly.";
const NETWORK_MESSAGE: &str = "Unable to reach the server. Check your connection and try again.";

/// Errors produced by [`ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The local governor refused the call; nothing was sent.
    #[error("request to {endpoint} denied by local rate limit")]
    AdmissionDenied { endpoint: String },

    /// The server rejected the session token (`401`).
    #[error("unauthorized")]
    Unauthorized,

    /// The server is rate limiting this endpoint (`429`).
    #[error("throttled by server on {endpoint}")]
    Throttled {
        endpoint: String,
        message: Option<String>,
    },

    /// Any other non-2xx response.
    #[error("api error: status {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    Request(#[source] reqwest::Error),

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Text a presentation layer should show for this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::AdmissionDenied { .. } => ADMISSION_DENIED_MESSAGE.to_string(),
            ApiError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            ApiError::Throttled { message, .. } => message
                .clone()
                .unwrap_or_else(|| THROTTLED_MESSAGE.to_string()),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => NETWORK_MESSAGE.to_string(),
            ApiError::Request(_) | ApiError::Json(_) | ApiError::Url(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Whether retrying the same call later may succeed unchanged.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::AdmissionDenied { .. } | ApiError::Throttled { .. } | ApiError::Network(_)
        )
    }
}

/// Typed HTTP client for the Arena API.
///
/// Cheap to clone: the `reqwest::Client`, governor and session store are
/// all shared handles.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    governor: RequestGovernor,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new `ApiClient`.
    ///
    /// * `base_url` – root URL of the API (e.g. `https://api.example.com/api/`).
    ///   Endpoint paths are resolved relative to it.
    /// * `governor` – the process-wide request governor.
    /// * `session` – where the bearer token is read from and discarded on `401`.
    pub fn new(mut base_url: Url, governor: RequestGovernor, session: SessionStore) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            http: Client::new(),
            base_url,
            governor,
            session,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn governor(&self) -> &RequestGovernor {
        &self.governor
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request to `endpoint` and deserialize the JSON response.
    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        build: impl FnOnce(&Client, Url) -> RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = self.dispatch(endpoint, build).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Json)
    }

    /// Send a request to `endpoint`, ignoring any response body.
    async fn call_empty(
        &self,
        endpoint: &str,
        build: impl FnOnce(&Client, Url) -> RequestBuilder,
    ) -> Result<(), ApiError> {
        self.dispatch(endpoint, build).await.map(drop)
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        build: impl FnOnce(&Client, Url) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let url = self.base_url.join(endpoint)?;

        if !self.governor.admit(endpoint) {
            return Err(ApiError::AdmissionDenied {
                endpoint: endpoint.to_owned(),
            });
        }

        let mut request = build(&self.http, url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        debug!(endpoint = %endpoint, "sending api request");
        let resp = request.send().await?;
        self.check_status(endpoint, resp).await
    }

    async fn check_status(&self, endpoint: &str, resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&body);

        if status == StatusCode::UNAUTHORIZED {
            if self.session.invalidate() {
                warn!(endpoint = %endpoint, "session rejected by server, token discarded");
            }
            return Err(ApiError::Unauthorized);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            self.governor.report_throttled(endpoint);
            return Err(ApiError::Throttled {
                endpoint: endpoint.to_owned(),
                message,
            });
        }

        warn!(endpoint = %endpoint, status = %status, "api request failed");
        Err(ApiError::Server {
            status,
            message: message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        })
    }
}

/// Percent-encode a path segment such as a team id.
fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
