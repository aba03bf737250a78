use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// JSON body of `POST /api/incoming/emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub subject: String,
    pub to: Vec<EmailAddress>,
    pub cc: Vec<EmailAddress>,
    pub bcc: Vec<EmailAddress>,
    /// Envelope sender.
    pub from: EmailAddress,
    pub reply_to: Vec<EmailAddress>,
    pub content: EmailContent,
    pub attachments: Vec<EmailAttachment>,
    /// Header name to rendered value. Names are case-sensitive.
    pub headers: BTreeMap<String, String>,
}

/// A mailbox in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    /// Display name, empty when none.
    pub name: String,
}

/// Both bodies of the email; an absent body is sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub text: String,
    pub html: String,
}

/// An attachment in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttachment {
    /// `inline` or `attachment`.
    pub disposition: String,
    /// Base64 body without line breaks.
    pub content: String,
    /// Full `Content-Type` header value, empty when absent.
    #[serde(rename = "type")]
    pub content_type: String,
    pub filename: String,
    /// Equals `filename` for inline parts, empty otherwise.
    pub content_id: String,
}

/// Error body returned by the email API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailApiErrors {
    pub errors: Vec<EmailApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailApiErrorDetail {
    pub message: String,
}
