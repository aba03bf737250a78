use serde::{Deserialize, Serialize};
use upspinner_transport::Endpoint;

/// Configuration for the Upspinner SMS transport.
#[derive(Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// API key sent verbatim in the `Authorization` header. Never
    /// serialized.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Default sender: an alphanumeric sender ID or an E.164 number. A
    /// message's own `from` takes precedence.
    pub from: String,

    /// Upspinner environment the messages are filed under.
    #[serde(default)]
    pub environment_id: String,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// URL scheme of the API. Override only for testing.
    #[serde(default = "default_api_scheme")]
    pub api_scheme: String,
}

fn default_api_scheme() -> String {
    "https".to_owned()
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("api_key", &"[REDACTED]")
            .field("from", &self.from)
            .field("environment_id", &self.environment_id)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_scheme", &self.api_scheme)
            .finish()
    }
}

impl SmsConfig {
    /// Create a configuration with the given API key and default sender.
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            from: from.into(),
            environment_id: String::new(),
            host: None,
            port: None,
            api_scheme: default_api_scheme(),
        }
    }

    /// Set the environment the messages are filed under.
    #[must_use]
    pub fn with_environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = environment_id.into();
        self
    }

    /// Set the API host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set an explicit API port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Override the URL scheme (useful for testing).
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.api_scheme = scheme.into();
        self
    }

    /// The `host[:port]` the API is reached at.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            host: self.host.clone(),
            port: self.port,
        }
    }
}
