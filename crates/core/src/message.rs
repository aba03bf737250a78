use crate::email::Email;
use crate::envelope::Envelope;
use crate::error::MessageError;

/// An email together with an optional explicit envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    email: Email,
    envelope: Option<Envelope>,
}

impl EmailMessage {
    /// Wrap an email; the envelope is derived from its headers at send time.
    pub fn new(email: Email) -> Self {
        Self {
            email,
            envelope: None,
        }
    }

    /// Use an explicit envelope instead of deriving it from the headers.
    #[must_use]
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// The wrapped email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The explicit envelope, if one was set.
    pub fn envelope(&self) -> Option<&Envelope> {
        self.envelope.as_ref()
    }

    /// The explicit envelope, or one derived from the email.
    pub fn resolved_envelope(&self) -> Result<Envelope, MessageError> {
        match &self.envelope {
            Some(envelope) => Ok(envelope.clone()),
            None => Envelope::from_email(&self.email),
        }
    }
}

/// A text message for a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    phone: String,
    subject: String,
    from: Option<String>,
}

impl SmsMessage {
    /// Create an SMS for `phone` with the text `subject`.
    pub fn new(phone: impl Into<String>, subject: impl Into<String>) -> Result<Self, MessageError> {
        let phone = phone.into();
        if phone.trim().is_empty() {
            return Err(MessageError::EmptyPhone);
        }
        Ok(Self {
            phone,
            subject: subject.into(),
            from: None,
        })
    }

    /// Override the transport's default sender for this message.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// The recipient phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The message text.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The per-message sender override, if any.
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }
}

/// A chat message. No Upspinner transport delivers these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    subject: String,
}

impl ChatMessage {
    /// Create a chat message with the given text.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Every kind of message a transport may be handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Email(EmailMessage),
    Sms(SmsMessage),
    Chat(ChatMessage),
}

impl Message {
    /// Discriminant name used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Sms(_) => "sms",
            Self::Chat(_) => "chat",
        }
    }
}

impl From<Email> for Message {
    fn from(email: Email) -> Self {
        Self::Email(EmailMessage::new(email))
    }
}

impl From<EmailMessage> for Message {
    fn from(message: EmailMessage) -> Self {
        Self::Email(message)
    }
}

impl From<SmsMessage> for Message {
    fn from(message: SmsMessage) -> Self {
        Self::Sms(message)
    }
}

impl From<ChatMessage> for Message {
    fn from(message: ChatMessage) -> Self {
        Self::Chat(message)
    }
}
