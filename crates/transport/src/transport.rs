use std::fmt;

use async_trait::async_trait;
use upspinner_core::{Message, SentMessage};

use crate::error::TransportError;

/// Strongly-typed transport trait with native `async fn`.
///
/// Not object-safe; use [`DynTransport`] behind `Box<dyn ...>`/`Arc<dyn ...>`.
/// Every `Transport` implements `DynTransport` through a blanket impl.
///
/// The [`Display`](fmt::Display) rendering identifies the transport in logs
/// and in [`SentMessage::transport`]; it is never used for addressing.
pub trait Transport: Send + Sync + fmt::Display {
    /// Short, stable name of the transport.
    fn name(&self) -> &str;

    /// Whether this transport can deliver the given message kind.
    fn supports(&self, message: &Message) -> bool;

    /// Deliver a message. Exactly one delivery attempt is made.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<SentMessage, TransportError>> + Send;
}

/// Object-safe transport trait.
///
/// Implement [`Transport`] instead and rely on the blanket implementation.
#[async_trait]
pub trait DynTransport: Send + Sync + fmt::Display {
    fn name(&self) -> &str;

    fn supports(&self, message: &Message) -> bool;

    async fn send(&self, message: &Message) -> Result<SentMessage, TransportError>;
}

#[async_trait]
impl<T: Transport> DynTransport for T {
    fn name(&self) -> &str {
        Transport::name(self)
    }

    fn supports(&self, message: &Message) -> bool {
        Transport::supports(self, message)
    }

    async fn send(&self, message: &Message) -> Result<SentMessage, TransportError> {
        Transport::send(self, message).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use upspinner_core::{ChatMessage, SmsMessage};

    use super::*;

    /// Accepts SMS only and echoes the phone number back as the message id.
    struct EchoTransport;

    impl fmt::Display for EchoTransport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("echo://")
        }
    }

    impl Transport for EchoTransport {
        #[allow(clippy::unnecessary_literal_bound)]
        fn name(&self) -> &str {
            "echo"
        }

        fn supports(&self, message: &Message) -> bool {
            matches!(message, Message::Sms(_))
        }

        async fn send(&self, message: &Message) -> Result<SentMessage, TransportError> {
            match message {
                Message::Sms(sms) => Ok(SentMessage::new(sms.phone(), self.to_string())),
                other => Err(TransportError::UnsupportedMessage {
                    transport: self.to_string(),
                    expected: "sms",
                    kind: other.kind(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn static_dispatch() {
        let message = Message::from(SmsMessage::new("+31611223344", "hi").unwrap());
        let sent = Transport::send(&EchoTransport, &message).await.unwrap();
        assert_eq!(sent.message_id(), "+31611223344");
        assert_eq!(sent.transport(), "echo://");
    }

    #[tokio::test]
    async fn blanket_dyn_transport_impl() {
        let transport: Arc<dyn DynTransport> = Arc::new(EchoTransport);
        assert_eq!(transport.name(), "echo");
        assert_eq!(transport.to_string(), "echo://");

        let chat = Message::from(ChatMessage::new("hi"));
        assert!(!transport.supports(&chat));
        let err = transport.send(&chat).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnsupportedMessage { kind: "chat", .. }
        ));
    }
}
