use std::fmt;

use tracing::info;
use upspinner_core::{Message, SentMessage};

use crate::error::TransportError;
use crate::message_id::random_message_id;
use crate::transport::Transport;

/// A transport that logs every message and reports success without any
/// network I/O.
///
/// Meant for local development and tests where no Upspinner account is
/// available.
pub struct LogTransport {
    name: String,
}

impl LogTransport {
    /// Create a new `LogTransport` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for LogTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log://{}", self.name)
    }
}

impl Transport for LogTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, _message: &Message) -> bool {
        true
    }

    async fn send(&self, message: &Message) -> Result<SentMessage, TransportError> {
        let message_id = random_message_id();
        match message {
            Message::Email(email) => info!(
                transport = %self.name,
                %message_id,
                subject = email.email().subject().unwrap_or_default(),
                recipients = email.email().to().len(),
                "log transport accepted email"
            ),
            Message::Sms(sms) => info!(
                transport = %self.name,
                %message_id,
                to = sms.phone(),
                "log transport accepted SMS"
            ),
            Message::Chat(_) => info!(
                transport = %self.name,
                %message_id,
                "log transport accepted chat message"
            ),
        }
        Ok(SentMessage::new(message_id, self.to_string()))
    }
}
