//! Message model shared by the Upspinner transports.
//!
//! Emails carry addresses, bodies, attachments and custom headers; an
//! [`Envelope`] holds the resolved sender and recipients. SMS and chat
//! messages are plain values. Transports receive a [`Message`] and answer
//! with a [`SentMessage`].

pub mod address;
pub mod attachment;
pub mod email;
pub mod envelope;
pub mod error;
pub mod headers;
pub mod message;
pub mod sent;

pub use address::Address;
pub use attachment::{Attachment, Disposition};
pub use email::Email;
pub use envelope::Envelope;
pub use error::MessageError;
pub use headers::{Header, Headers};
pub use message::{ChatMessage, EmailMessage, Message, SmsMessage};
pub use sent::SentMessage;
