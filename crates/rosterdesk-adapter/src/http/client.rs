/*
[INPUT]:  HTTP configuration (base URL, timeouts, session token)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::error::{ConsoleError, Result, status_text};
use crate::types::Ack;

/// Default base URL for the platform backend
const DEFAULT_BASE_URL: &str = "https://console.rosterdesk.example";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Authenticated session for backend requests.
///
/// Replaces the ambient current-user lookup of the original console: the
/// caller constructs the session explicitly and hands it to the client.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub token: String,
}

/// Main HTTP client for the rosterdesk backend
#[derive(Debug)]
pub struct ConsoleClient {
    http_client: Client,
    base_url: Url,
    session: Option<Session>,
}

impl ConsoleClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL (tests point this at a
    /// mock server)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            session: None,
        })
    }

    /// Set the session used for authenticated requests
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Get the session if set
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Build full URL for an endpoint
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build a request builder, attaching the bearer token when a session is
    /// present
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(session) = &self.session {
            builder = builder.bearer_auth(&session.token);
        }
        Ok(builder)
    }

    /// Send a request and parse a JSON body on success.
    ///
    /// Non-2xx statuses become `ConsoleError::Api` carrying the status code
    /// and reason phrase verbatim.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::api_error(status));
        }
        Ok(response.json::<T>().await?)
    }

    /// Send a request where only the status matters (mutations).
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<Ack> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::api_error(status));
        }
        Ok(Ack {
            status: status.as_u16(),
            status_text: status_text(status),
        })
    }
}
