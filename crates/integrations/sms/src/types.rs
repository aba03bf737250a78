use serde::{Deserialize, Serialize};

/// JSON body of `POST /api/incoming/sms/{environment}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsPayload {
    pub from: String,
    pub to: String,
    pub body: String,
}

/// Error body returned by the SMS API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsApiError {
    pub message: String,
    /// Link to documentation about the error.
    pub more_info: String,
}
