use thiserror::Error;
use upspinner_transport::TransportError;

/// Errors specific to the SMS transport.
///
/// Converted into [`TransportError`] at the public API boundary.
#[derive(Debug, Error)]
pub enum SmsError {
    /// The resolved sender is neither a sender ID nor a phone number.
    #[error(
        "The \"From\" number \"{0}\" is not a valid phone number, shortcode, or alphanumeric sender ID."
    )]
    InvalidFrom(String),

    #[error("Could not reach the remote Upspinner server: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-201 status.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl From<SmsError> for TransportError {
    fn from(err: SmsError) -> Self {
        match err {
            err @ SmsError::InvalidFrom(_) => TransportError::InvalidArgument(err.to_string()),
            SmsError::Http(e) if e.is_builder() => {
                TransportError::Configuration(format!("unable to build the request: {e}"))
            }
            err @ SmsError::Http(_) => TransportError::Connection(err.to_string()),
            SmsError::Api { status, message } => TransportError::Api { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_from_maps_to_invalid_argument() {
        let err: TransportError = SmsError::InvalidFrom("+0".into()).into();
        assert!(matches!(err, TransportError::InvalidArgument(_)));
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "The \"From\" number \"+0\" is not a valid phone number, shortcode, or alphanumeric sender ID."
        );
    }

    #[test]
    fn api_error_keeps_status() {
        let err: TransportError = SmsError::Api {
            status: 503,
            message: "Unable to send the SMS: down (code 503).".into(),
        }
        .into();
        assert_eq!(err.status(), Some(503));
        assert!(err.is_retryable());
    }

    #[test]
    fn request_build_failure_maps_to_configuration() {
        let build_err = reqwest::Client::new()
            .post("not a url")
            .build()
            .unwrap_err();
        assert!(build_err.is_builder());
        let err: TransportError = SmsError::Http(build_err).into();
        assert!(matches!(err, TransportError::Configuration(_)));
        assert!(!err.is_retryable());
    }
}
