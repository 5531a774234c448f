//! Shared client state built from the loaded configuration.

use crate::config::LoadedConfig;
use arena_sdk::client::ApiClient;
use arena_sdk::governor::RequestGovernor;
use arena_sdk::session::SessionStore;

/// Everything a command needs to talk to the API.
///
/// One governor and one session store are created per process and shared
/// by every clone of the client.
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
}

impl AppState {
    pub fn new(config: &LoadedConfig) -> anyhow::Result<Self> {
        let session = match &config.token {
            Some(token) => SessionStore::with_token(token.clone()),
            None => SessionStore::new(),
        };
        let governor = RequestGovernor::new(config.governor);
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client: ApiClient::new(config.base_url.clone(), governor, session).with_http_client(http),
        })
    }
}
