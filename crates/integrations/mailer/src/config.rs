use serde::{Deserialize, Serialize};
use upspinner_transport::Endpoint;

/// Configuration for the Upspinner email transport.
#[derive(Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// API key sent verbatim in the `Authorization` header. Never
    /// serialized.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// API host. Falls back to the default host when unset.
    #[serde(default)]
    pub host: Option<String>,

    /// Explicit API port. No port suffix is used when unset.
    #[serde(default)]
    pub port: Option<u16>,

    /// Upspinner environment the emails are filed under. The path segment
    /// is omitted when empty.
    #[serde(default)]
    pub environment_id: String,

    /// URL scheme of the API. Defaults to `https`; override only to talk to
    /// a local mock server.
    #[serde(default = "default_api_scheme")]
    pub api_scheme: String,
}

fn default_api_scheme() -> String {
    "https".to_owned()
}

impl std::fmt::Debug for MailerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerConfig")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment_id", &self.environment_id)
            .field("api_scheme", &self.api_scheme)
            .finish()
    }
}

impl MailerConfig {
    /// Create a configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: None,
            port: None,
            environment_id: String::new(),
            api_scheme: default_api_scheme(),
        }
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

    /// Set the environment the emails are filed under.
    #[must_use]
    pub fn with_environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = environment_id.into();
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
