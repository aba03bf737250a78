/// Receipt for a message accepted by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    message_id: String,
    transport: String,
}

impl SentMessage {
    /// Create a receipt for `message_id` sent through `transport`.
    pub fn new(message_id: impl Into<String>, transport: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            transport: transport.into(),
        }
    }

    /// Identifier assigned to the message by the remote service, or a
    /// generated one when the service did not return any.
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// Rendered identity of the transport that sent the message.
    pub fn transport(&self) -> &str {
        &self.transport
    }
}
