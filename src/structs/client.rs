use crate::errors::AuthdogError;
use crate::structs::user::{ErrorResponse, UserInfoResponse};
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

const USER_AGENT: &str = concat!("authdog-rust-sdk/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Authdog client options. Pass this into the `new()` function of the Client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the Authdog API. A trailing slash is stripped.
    pub base_url: String,
    /// Optional static API key. When set it takes precedence over any
    /// per-call access token.
    pub api_key: Option<String>,
    /// Request timeout in milliseconds, applied to the connect phase and
    /// to the whole round-trip. Defaults to 10000.
    pub timeout_ms: Option<u64>,
}

/// Authdog client. Used to fetch user info from the Authdog API.
#[derive(Debug)]
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    // None once the client has been closed.
    http: Option<reqwest::blocking::Client>,
}

impl Client {
    /// Creates a new Authdog client.
    pub fn new(options: ClientOptions) -> Result<Self, AuthdogError> {
        let timeout = Duration::from_millis(options.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS));

        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AuthdogError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            api_key: options.api_key,
            http: Some(http),
        })
    }

    /// Fetches user information for the given access token.
    ///
    /// Performs one blocking GET against `{base_url}/v1/userinfo` and
    /// classifies the outcome: 401 becomes [`AuthdogError::Authentication`],
    /// any other non-200 status or transport failure becomes
    /// [`AuthdogError::Api`], and a 200 body is deserialized into
    /// [`UserInfoResponse`].
    pub fn get_user_info(&self, access_token: &str) -> Result<UserInfoResponse, AuthdogError> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| AuthdogError::Configuration("Client has been closed".to_string()))?;

        let url = format!("{}/v1/userinfo", self.base_url);
        debug!("GET {}", url);

        let response = http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.bearer_credential(access_token)),
            )
            .send()
            .map_err(|e| AuthdogError::api_with_source(format!("Request failed: {}", e), e))?;

        let status = response.status().as_u16();
        debug!("userinfo responded with status {}", status);

        // Consuming the body releases the connection on every exit path.
        let body = response.text().map_err(|e| {
            AuthdogError::api_with_source(format!("Failed to read response body: {}", e), e)
        })?;

        match status {
            200 => serde_json::from_str::<UserInfoResponse>(&body).map_err(|e| {
                AuthdogError::api_with_source(format!("Failed to parse response: {}", e), e)
            }),
            401 => Err(AuthdogError::Authentication),
            500 => {
                // Probe the body for a recognized error field; a parse
                // failure here falls through to the generic message.
                if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&body) {
                    match error_response.error.as_str() {
                        "GraphQL query failed" | "Failed to fetch user info" => {
                            return Err(AuthdogError::api(error_response.error));
                        }
                        _ => {}
                    }
                }
                Err(AuthdogError::api(format!("HTTP error 500: {}", body)))
            }
            code => Err(AuthdogError::api(format!("HTTP error {}: {}", code, body))),
        }
    }

    /// Releases the underlying connection pool. Safe to call more than
    /// once; any call made after closing fails with
    /// [`AuthdogError::Configuration`]. Dropping the client releases the
    /// pool as well, so calling this is optional.
    pub fn close(&mut self) {
        self.http.take();
    }

    // API key wins over the access token whenever both are present.
    fn bearer_credential<'a>(&'a self, access_token: &'a str) -> &'a str {
        self.api_key.as_deref().unwrap_or(access_token)
    }
}
