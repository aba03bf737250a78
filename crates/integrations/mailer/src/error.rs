use thiserror::Error;
use upspinner_core::MessageError;
use upspinner_transport::TransportError;

/// Errors specific to the email transport.
///
/// Converted into [`TransportError`] at the public API boundary.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The request could not be built or the server could not be reached.
    #[error("Could not reach the remote Upspinner server: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-201 status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The email has no usable envelope.
    #[error(transparent)]
    Message(#[from] MessageError),
}

impl From<MailerError> for TransportError {
    fn from(err: MailerError) -> Self {
        match err {
            MailerError::Http(e) if e.is_builder() => {
                TransportError::Configuration(format!("unable to build the request: {e}"))
            }
            err @ MailerError::Http(_) => TransportError::Connection(err.to_string()),
            MailerError::Api { status, message } => TransportError::Api { status, message },
            MailerError::Message(e) => TransportError::Message(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_status() {
        let err: TransportError = MailerError::Api {
            status: 422,
            message: "Unable to send an email: bad (code 422).".into(),
        }
        .into();
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Unable to send an email: bad (code 422).");
    }

    #[test]
    fn message_error_maps_through() {
        let err: TransportError = MailerError::Message(MessageError::MissingSender).into();
        assert!(matches!(
            err,
            TransportError::Message(MessageError::MissingSender)
        ));
    }

    #[test]
    fn request_build_failure_maps_to_configuration() {
        let build_err = reqwest::Client::new()
            .post("not a url")
            .build()
            .unwrap_err();
        assert!(build_err.is_builder());
        let err: TransportError = MailerError::Http(build_err).into();
        assert!(matches!(err, TransportError::Configuration(_)));
        assert!(!err.is_retryable());
    }
}
