use thiserror::Error;
use upspinner_core::MessageError;

/// Errors that can occur while configuring a transport or sending through
/// it.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport was handed a kind of message it cannot deliver.
    #[error("the \"{transport}\" transport only supports {expected} messages (\"{kind}\" given)")]
    UnsupportedMessage {
        transport: String,
        expected: &'static str,
        kind: &'static str,
    },

    /// A message field failed validation before any request was made.
    #[error("{0}")]
    InvalidArgument(String),

    /// The message itself is malformed (e.g. no envelope sender).
    #[error("invalid message: {0}")]
    Message(#[from] MessageError),

    /// The transport was given invalid configuration, or a request could not
    /// be built from it.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The remote server could not be reached or did not answer.
    #[error("{0}")]
    Connection(String),

    /// The remote server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The DSN string could not be parsed.
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    /// The DSN scheme is not handled by the factory.
    #[error(
        "The \"{scheme}\" scheme is not supported; supported schemes for {family} \"{name}\" are: {supported}."
    )]
    UnsupportedScheme {
        scheme: String,
        family: &'static str,
        name: &'static str,
        supported: String,
    },

    /// The DSN lacks credentials or other mandatory parts.
    #[error("incomplete DSN: {0}")]
    IncompleteDsn(String),

    /// A mandatory DSN option is missing.
    #[error("the \"{0}\" option is required but missing from the DSN")]
    MissingRequiredOption(String),
}

impl TransportError {
    /// Build an [`UnsupportedScheme`](Self::UnsupportedScheme) error listing
    /// the schemes a factory accepts.
    pub fn unsupported_scheme(
        scheme: impl Into<String>,
        family: &'static str,
        name: &'static str,
        supported: &[&str],
    ) -> Self {
        let supported = supported
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnsupportedScheme {
            scheme: scheme.into(),
            family,
            name,
            supported,
        }
    }

    /// HTTP status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the failure is transient, so the caller may decide
    /// to try again later. Transports never retry on their own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(TransportError::Connection("reset".into()).is_retryable());
        assert!(
            TransportError::Api {
                status: 503,
                message: "down".into()
            }
            .is_retryable()
        );
        assert!(
            TransportError::Api {
                status: 429,
                message: "slow down".into()
            }
            .is_retryable()
        );
    }

    #[test]
    fn non_retryable_errors() {
        assert!(
            !TransportError::Api {
                status: 422,
                message: "bad".into()
            }
            .is_retryable()
        );
        assert!(!TransportError::InvalidArgument("x".into()).is_retryable());
        assert!(!TransportError::Configuration("x".into()).is_retryable());
        assert!(!TransportError::Message(MessageError::NoRecipients).is_retryable());
    }

    #[test]
    fn unsupported_scheme_display() {
        let err = TransportError::unsupported_scheme(
            "upspinner+foo",
            "mailer",
            "upspinner",
            &["upspinner"],
        );
        assert_eq!(
            err.to_string(),
            "The \"upspinner+foo\" scheme is not supported; supported schemes for mailer \"upspinner\" are: \"upspinner\"."
        );
    }

    #[test]
    fn status_only_for_api_errors() {
        let err = TransportError::Api {
            status: 400,
            message: "nope".into(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(TransportError::Connection("x".into()).status(), None);
    }

    #[test]
    fn unsupported_message_display() {
        let err = TransportError::UnsupportedMessage {
            transport: "upspinner://host.test".into(),
            expected: "sms",
            kind: "chat",
        };
        assert_eq!(
            err.to_string(),
            "the \"upspinner://host.test\" transport only supports sms messages (\"chat\" given)"
        );
    }
}
