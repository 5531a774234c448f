use serde::{Deserialize, Serialize};

/// Error envelope returned with non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body and pick its user-facing message.
    ///
    /// `error` wins over `message`; blank strings count as absent.
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        [parsed.error, parsed.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
