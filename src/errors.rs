use thiserror::Error;

/// Authdog SDK errors.
#[derive(Debug, Error)]
pub enum AuthdogError {
    /// The API returned a 401: Unauthorized status code.
    /// This means the bearer credential was rejected by the endpoint.
    #[error("Unauthorized - invalid or expired token")]
    Authentication,

    /// Any other request failure: a non-200/401 status code, a server-side
    /// error body, a response that could not be parsed, or a transport-level
    /// I/O failure. May carry the underlying cause for diagnostics.
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The client was misconfigured (malformed base URL) or used after
    /// being closed.
    #[error("{0}")]
    Configuration(String),
}

impl AuthdogError {
    pub(crate) fn api(message: impl Into<String>) -> Self {
        AuthdogError::Api {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn api_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AuthdogError::Api {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
