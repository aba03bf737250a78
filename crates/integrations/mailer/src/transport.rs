use std::fmt;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};
use upspinner_core::{Message, SentMessage};
use upspinner_transport::{
    Transport, TransportError, inject_trace_context, message_id_from_headers, path_segment,
};

use crate::config::MailerConfig;
use crate::error::MailerError;
use crate::payload::build_payload;
use crate::types::{EmailApiErrors, EmailPayload};

const EMAILS_PATH: &str = "/api/incoming/emails";

/// Email transport that posts messages to the Upspinner email API.
///
/// Implements the [`Transport`] trait; only [`Message::Email`] is accepted.
pub struct UpspinnerMailerTransport {
    config: MailerConfig,
    client: Client,
}

impl fmt::Debug for UpspinnerMailerTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpspinnerMailerTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl UpspinnerMailerTransport {
    /// Create a transport with a default `reqwest::Client` (30 s timeout).
    pub fn new(config: MailerConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TransportError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Create a transport with a custom HTTP client.
    ///
    /// Useful for sharing a connection pool across transports.
    pub fn with_client(config: MailerConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &MailerConfig {
        &self.config
    }

    /// `<scheme>://<endpoint>/api/incoming/emails[/<environment>]`.
    fn emails_url(&self) -> String {
        let mut url = self
            .config
            .endpoint()
            .url(&self.config.api_scheme, EMAILS_PATH);
        if !self.config.environment_id.is_empty() {
            url.push('/');
            url.push_str(&path_segment(&self.config.environment_id));
        }
        url
    }

    /// POST the payload and return the message id assigned by Upspinner.
    async fn post_email(&self, payload: &EmailPayload) -> Result<String, MailerError> {
        let url = self.emails_url();

        debug!(
            %url,
            recipients = payload.to.len(),
            attachments = payload.attachments.len(),
            "sending email via Upspinner"
        );

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
            warn!(status = status.as_u16(), "Upspinner rejected the email");
            return Err(MailerError::Api {
                status: status.as_u16(),
                message: failure_message(status, &body),
            });
        }

        Ok(message_id_from_headers(response.headers()))
    }
}

/// Error text for a rejected email: the decoded API error messages, or the
/// raw body when it is not the expected JSON.
fn failure_message(status: StatusCode, body: &str) -> String {
    let detail = match serde_json::from_str::<EmailApiErrors>(body) {
        Ok(errors) => errors
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
        Err(_) => body.to_owned(),
    };
    format!(
        "Unable to send an email: {detail} (code {}).",
        status.as_u16()
    )
}

impl fmt::Display for UpspinnerMailerTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upspinner://{}", self.config.endpoint())
    }
}

impl Transport for UpspinnerMailerTransport {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "upspinner-mailer"
    }

    fn supports(&self, message: &Message) -> bool {
        matches!(message, Message::Email(_))
    }

    #[instrument(skip(self, message), fields(transport = "upspinner-mailer", kind = message.kind()))]
    async fn send(&self, message: &Message) -> Result<SentMessage, TransportError> {
        let Message::Email(email_message) = message else {
            return Err(TransportError::UnsupportedMessage {
                transport: self.to_string(),
                expected: "email",
                kind: message.kind(),
            });
        };

        let envelope = email_message
            .resolved_envelope()
            .map_err(MailerError::from)?;
        let payload = build_payload(email_message.email(), &envelope);

        let message_id = self.post_email(&payload).await?;

        info!(%message_id, "email accepted by Upspinner");

        Ok(SentMessage::new(message_id, self.to_string()))
    }
}
