use std::fmt;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};
use upspinner_core::{Message, SentMessage, SmsMessage};
use upspinner_transport::{
    Transport, TransportError, inject_trace_context, message_id_from_headers, path_segment,
};

use crate::config::SmsConfig;
use crate::error::SmsError;
use crate::sender::is_valid_sender;
use crate::types::{SmsApiError, SmsPayload};

const SMS_PATH: &str = "/api/incoming/sms";

/// SMS transport that posts text messages to the Upspinner SMS API.
///
/// Only [`Message::Sms`] is accepted.
pub struct UpspinnerSmsTransport {
    config: SmsConfig,
    client: Client,
}

impl fmt::Debug for UpspinnerSmsTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpspinnerSmsTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl UpspinnerSmsTransport {
    /// Create a transport with a default `reqwest::Client` (30 s timeout).
    pub fn new(config: SmsConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TransportError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Create a transport with a custom HTTP client.
    ///
    /// Useful for sharing a connection pool across transports.
    pub fn with_client(config: SmsConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &SmsConfig {
        &self.config
    }

    fn sms_url(&self) -> String {
        let path = format!("{SMS_PATH}/{}", path_segment(&self.config.environment_id));
        self.config.endpoint().url(&self.config.api_scheme, &path)
    }

    /// The message's own sender when set and non-empty, else the configured
    /// default. Validated before use.
    fn resolve_from<'a>(&'a self, sms: &'a SmsMessage) -> Result<&'a str, SmsError> {
        let from = sms
            .from()
            .filter(|from| !from.is_empty())
            .unwrap_or(self.config.from.as_str());
        if is_valid_sender(from) {
            Ok(from)
        } else {
            Err(SmsError::InvalidFrom(from.to_owned()))
        }
    }

    async fn post_sms(&self, payload: &SmsPayload) -> Result<String, SmsError> {
        let url = self.sms_url();

        debug!(%url, to = %payload.to, from = %payload.from, "sending SMS via Upspinner");

        let response = inject_trace_context(
            self.client
                .post(&url)
                .header(AUTHORIZATION, &self.config.api_key)
                .json(payload),
        )
        .send()
        .await?;

        let status = response.status();

        if status != StatusCode::CREATED {
            let body = response.text().await?;
            warn!(status = status.as_u16(), "Upspinner rejected the SMS");
            return Err(SmsError::Api {
                status: status.as_u16(),
                message: failure_message(status, &body),
            });
        }

        Ok(message_id_from_headers(response.headers()))
    }
}

fn failure_message(status: StatusCode, body: &str) -> String {
    let code = status.as_u16();
    match serde_json::from_str::<SmsApiError>(body) {
        Ok(error) => format!(
            "Unable to send the SMS: {} (see {}) (code {code}).",
            error.message, error.more_info
        ),
        Err(_) => format!("Unable to send the SMS: {body} (code {code})."),
    }
}

impl fmt::Display for UpspinnerSmsTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "upspinner://{}?from={}&environment={}",
            self.config.endpoint(),
            self.config.from,
            self.config.environment_id
        )
    }
}

impl Transport for UpspinnerSmsTransport {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "upspinner-sms"
    }

    fn supports(&self, message: &Message) -> bool {
        matches!(message, Message::Sms(_))
    }

    #[instrument(skip(self, message), fields(transport = "upspinner-sms", kind = message.kind()))]
    async fn send(&self, message: &Message) -> Result<SentMessage, TransportError> {
        let Message::Sms(sms) = message else {
            return Err(TransportError::UnsupportedMessage {
                transport: self.to_string(),
                expected: "sms",
                kind: message.kind(),
            });
        };

        let payload = SmsPayload {
            from: self.resolve_from(sms)?.to_owned(),
            to: sms.phone().to_owned(),
            body: sms.subject().to_owned(),
        };

        let message_id = self.post_sms(&payload).await?;

        info!(%message_id, "SMS accepted by Upspinner");

        Ok(SentMessage::new(message_id, self.to_string()))
    }
}
