use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Bytes escaped in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode `value` for use as one path segment, so that `/`, `?` and
/// `#` cannot change the addressed resource.
pub fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "";

/// The `host[:port]` authority of the Upspinner API.
///
/// The port suffix is only rendered when a port was explicitly configured.
///
/// # Examples
///
/// ```
/// use upspinner_transport::Endpoint;
///
/// assert_eq!(Endpoint::new().with_host("host.test").to_string(), "host.test");
/// assert_eq!(
///     Endpoint::new().with_host("host.test").with_port(8443).to_string(),
///     "host.test:8443"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl Endpoint {
    /// An endpoint with no host or port configured.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Configured host, or [`DEFAULT_HOST`] when unset or empty.
    pub fn host(&self) -> &str {
        self.host
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOST)
    }

    /// Build a full URL for `path` on this endpoint.
    pub fn url(&self, scheme: &str, path: &str) -> String {
        format!("{scheme}://{self}{path}")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())?;
        // Port 0 counts as "not configured".
        match self.port {
            Some(port) if port != 0 => write!(f, ":{port}"),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_has_no_suffix() {
        let endpoint = Endpoint::new().with_host("host.test");
        assert_eq!(endpoint.to_string(), "host.test");
    }

    #[test]
    fn explicit_port_is_appended() {
        let endpoint = Endpoint::new().with_host("host.test").with_port(8443);
        assert_eq!(endpoint.to_string(), "host.test:8443");
    }

    #[test]
    fn unset_host_falls_back_to_default() {
        assert_eq!(Endpoint::new().to_string(), DEFAULT_HOST);
        assert_eq!(Endpoint::new().with_host("").host(), DEFAULT_HOST);
        assert_eq!(Endpoint::new().with_port(8080).to_string(), ":8080");
    }

    #[test]
    fn zero_port_is_ignored() {
        assert_eq!(
            Endpoint::new().with_host("host.test").with_port(0).to_string(),
            "host.test"
        );
    }

    #[test]
    fn url_joins_scheme_and_path() {
        let endpoint = Endpoint::new().with_host("host.test").with_port(8443);
        assert_eq!(
            endpoint.url("https", "/api/incoming/emails"),
            "https://host.test:8443/api/incoming/emails"
        );
    }

    #[test]
    fn path_segment_escapes_delimiters() {
        assert_eq!(path_segment("721"), "721");
        assert_eq!(path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(path_segment("50%"), "50%25");
        assert_eq!(path_segment("env one"), "env%20one");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let endpoint: Endpoint = serde_json::from_str(r#"{"host":"api.upspinner.test"}"#).unwrap();
        assert_eq!(endpoint.host(), "api.upspinner.test");
        assert!(endpoint.port.is_none());
    }
}
