use reqwest::Client;
use upspinner_transport::{DynTransport, Dsn, TransportError, TransportFactory};

use crate::config::MailerConfig;
use crate::transport::UpspinnerMailerTransport;

const SCHEME: &str = "upspinner";

/// Builds [`UpspinnerMailerTransport`]s from DSNs of the form
/// `upspinner://host[:port]?key=<api key>&environment=<id>`.
///
/// The host `default` selects the default API host.
#[derive(Debug, Default, Clone)]
pub struct UpspinnerMailerFactory {
    client: Option<Client>,
}

impl UpspinnerMailerFactory {
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
    pub fn build(&self, dsn: &Dsn) -> Result<UpspinnerMailerTransport, TransportError> {
        if dsn.scheme() != SCHEME {
            return Err(TransportError::unsupported_scheme(
                dsn.scheme(),
                "mailer",
                "upspinner",
                &[SCHEME],
            ));
        }

        let key = dsn
            .option("key")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TransportError::IncompleteDsn("the \"key\" option is missing".into()))?;

        let endpoint = dsn.endpoint();
        let mut config =
            MailerConfig::new(key).with_environment_id(dsn.option("environment").unwrap_or_default());
        config.host = endpoint.host;
        config.port = endpoint.port;

        match &self.client {
            Some(client) => Ok(UpspinnerMailerTransport::with_client(config, client.clone())),
            None => UpspinnerMailerTransport::new(config),
        }
    }
}

impl TransportFactory for UpspinnerMailerFactory {
    fn supports(&self, dsn: &Dsn) -> bool {
        dsn.scheme() == SCHEME
    }

    fn create(&self, dsn: &Dsn) -> Result<Box<dyn DynTransport>, TransportError> {
        Ok(Box::new(self.build(dsn)?))
    }
}
