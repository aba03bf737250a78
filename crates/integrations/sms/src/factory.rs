use reqwest::Client;
use upspinner_transport::{DynTransport, Dsn, TransportError, TransportFactory};

use crate::config::SmsConfig;
use crate::transport::UpspinnerSmsTransport;

const SCHEME: &str = "upspinner";

/// Builds [`UpspinnerSmsTransport`]s from DSNs of the form
/// `upspinner://:<api key>@host[:port]?from=<sender>&environment=<id>`.
#[derive(Debug, Default, Clone)]
pub struct UpspinnerSmsFactory {
    client: Option<Client>,
}

impl UpspinnerSmsFactory {
    /// Create a factory whose transports build their own HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an HTTP client between every transport this factory builds.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the concrete transport.
    ///
    /// The API key comes from the DSN password, else the user part; the
    /// `from` option is required.
    pub fn build(&self, dsn: &Dsn) -> Result<UpspinnerSmsTransport, TransportError> {
        if dsn.scheme() != SCHEME {
            return Err(TransportError::unsupported_scheme(
                dsn.scheme(),
                "notifier",
                "upspinner",
                &[SCHEME],
            ));
        }

        // The key travels as the password; a bare user part is accepted too.
        let key = dsn
            .password()
            .or_else(|| dsn.user())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TransportError::IncompleteDsn("the API key is missing".into()))?;
        let from = dsn.required_option("from")?;

        let endpoint = dsn.endpoint();
        let mut config = SmsConfig::new(key, from)
            .with_environment_id(dsn.option("environment").unwrap_or_default());
        config.host = endpoint.host;
        config.port = endpoint.port;

        match &self.client {
            Some(client) => Ok(UpspinnerSmsTransport::with_client(config, client.clone())),
            None => UpspinnerSmsTransport::new(config),
        }
    }
}

impl TransportFactory for UpspinnerSmsFactory {
    fn supports(&self, dsn: &Dsn) -> bool {
        dsn.scheme() == SCHEME
    }

    fn create(&self, dsn: &Dsn) -> Result<Box<dyn DynTransport>, TransportError> {
        Ok(Box::new(self.build(dsn)?))
    }
}
