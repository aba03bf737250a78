use thiserror::Error;

/// Errors raised while building messages and envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The value is not a usable email address.
    #[error("invalid email address: \"{0}\"")]
    InvalidAddress(String),

    /// No sender could be resolved for the envelope.
    #[error("unable to determine the envelope sender: the message has no \"Sender\" or \"From\" address")]
    MissingSender,

    /// The envelope has no recipients.
    #[error("an envelope must have at least one recipient")]
    NoRecipients,

    /// An SMS was created without a destination phone number.
    #[error("the phone number of an SMS message cannot be empty")]
    EmptyPhone,
}
