use std::collections::BTreeMap;
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::TransportError;

/// Host name meaning "use the transport's default host".
pub const DEFAULT_HOST_ALIAS: &str = "default";

/// A transport connection string:
/// `scheme://[user[:password]@]host[:port][?option=value&...]`.
///
/// # Examples
///
/// ```
/// use upspinner_transport::Dsn;
///
/// let dsn: Dsn = "upspinner://:secret@host.test:8443?from=Upspinner&environment=2"
///     .parse()
///     .unwrap();
/// assert_eq!(dsn.scheme(), "upspinner");
/// assert_eq!(dsn.host(), "host.test");
/// assert_eq!(dsn.password(), Some("secret"));
/// assert_eq!(dsn.port(), Some(8443));
/// assert_eq!(dsn.option("from"), Some("Upspinner"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    scheme: String,
    host: String,
    user: Option<String>,
    password: Option<String>,
    port: Option<u16>,
    options: BTreeMap<String, String>,
}

impl Dsn {
    /// Create a DSN without credentials, port or options.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            user: None,
            password: None,
            port: None,
            options: BTreeMap::new(),
        }
    }

    /// Set the user part of the credentials.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password part of the credentials.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set an explicit port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Add a query option, replacing any previous value for `key`.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The scheme, which selects the factory.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host as written, `default` included.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The percent-decoded user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// The percent-decoded password, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The explicit port, if any.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The decoded value of query option `key`.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Like [`Dsn::option`], but a missing or empty value is an error.
    pub fn required_option(&self, key: &str) -> Result<&str, TransportError> {
        self.option(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TransportError::MissingRequiredOption(key.to_owned()))
    }

    /// The endpoint addressed by this DSN. The host `default` maps to the
    /// transport's default host.
    pub fn endpoint(&self) -> Endpoint {
        let host = (!self.host.is_empty() && self.host != DEFAULT_HOST_ALIAS)
            .then(|| self.host.clone());
        Endpoint {
            host,
            port: self.port,
        }
    }
}

fn decode(component: &str) -> Option<String> {
    if component.is_empty() {
        return None;
    }
    Some(percent_decode_str(component).decode_utf8_lossy().into_owned())
}

impl FromStr for Dsn {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s).map_err(|e| TransportError::InvalidDsn(format!("\"{s}\": {e}")))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| TransportError::InvalidDsn(format!("\"{s}\" has no host")))?;

        Ok(Self {
            scheme: url.scheme().to_owned(),
            host: host.to_owned(),
            user: decode(url.username()),
            password: url.password().and_then(decode),
            port: url.port(),
            options: url.query_pairs().into_owned().collect(),
        })
    }
}
