use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::headers::{Header, Headers};

/// Maximum line length of a base64 transfer-encoded body (RFC 2045).
const BASE64_LINE_LENGTH: usize = 76;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// MIME content disposition of an attachment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Referenced from within the message content (e.g. `cid:` images).
    Inline,
    /// A separate downloadable file.
    #[default]
    Attachment,
}

impl Disposition {
    /// The MIME token: `inline` or `attachment`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file attached to an email.
///
/// # Examples
///
/// ```
/// use upspinner_core::{Attachment, Disposition};
///
/// let logo = Attachment::new(b"\x89PNG".to_vec())
///     .with_filename("logo.png")
///     .with_content_type("image/png")
///     .inline();
/// assert_eq!(logo.disposition(), Disposition::Inline);
///
/// let headers = logo.prepared_headers();
/// assert_eq!(headers.header_body("Content-Disposition"), Some("inline"));
/// assert_eq!(headers.header_parameter("Content-Disposition", "filename"), Some("logo.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    body: Vec<u8>,
    filename: Option<String>,
    content_type: String,
    disposition: Disposition,
}

impl Attachment {
    /// Create an `attachment`-disposition part of type
    /// `application/octet-stream`.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            filename: None,
            content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            disposition: Disposition::Attachment,
        }
    }

    /// Set the file name announced to the recipient.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the MIME type (defaults to `application/octet-stream`).
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Mark the part as inline content.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.disposition = Disposition::Inline;
        self
    }

    /// The raw, unencoded body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The file name, if one was set.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The MIME type without parameters.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Inline or attachment.
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// The MIME headers this part carries once it is prepared for sending.
    pub fn prepared_headers(&self) -> Headers {
        let mut content_type = Header::text("Content-Type", &self.content_type);
        let mut disposition = Header::text("Content-Disposition", self.disposition.as_str());
        if let Some(filename) = &self.filename {
            content_type = content_type.with_parameter("name", filename);
            disposition = disposition.with_parameter("filename", filename);
        }

        let mut headers = Headers::new();
        headers
            .add(content_type)
            .add_text("Content-Transfer-Encoding", "base64")
            .add(disposition);
        headers
    }

    /// The base64 transfer encoding of the body, wrapped at 76 characters
    /// with CRLF line breaks.
    pub fn body_to_string(&self) -> String {
        let encoded = STANDARD.encode(&self.body);
        let mut out = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_LENGTH * 2);
        for (i, ch) in encoded.chars().enumerate() {
            if i > 0 && i % BASE64_LINE_LENGTH == 0 {
                out.push_str("\r\n");
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let attachment = Attachment::new("hello");
        assert_eq!(attachment.content_type(), "application/octet-stream");
        assert_eq!(attachment.disposition(), Disposition::Attachment);
        assert!(attachment.filename().is_none());
        assert_eq!(attachment.body(), b"hello");
    }

    #[test]
    fn prepared_headers_without_filename() {
        let headers = Attachment::new("data")
            .with_content_type("text/csv")
            .prepared_headers();
        assert_eq!(headers.header_body("Content-Type"), Some("text/csv"));
        assert_eq!(
            headers.get("Content-Type").unwrap().body_as_string(),
            "text/csv"
        );
        assert_eq!(headers.header_body("Content-Transfer-Encoding"), Some("base64"));
        assert_eq!(headers.header_body("Content-Disposition"), Some("attachment"));
        assert!(
            headers
                .header_parameter("Content-Disposition", "filename")
                .is_none()
        );
    }

    #[test]
    fn prepared_headers_with_filename() {
        let headers = Attachment::new("data")
            .with_filename("report.pdf")
            .with_content_type("application/pdf")
            .prepared_headers();
        assert_eq!(
            headers.get("Content-Type").unwrap().body_as_string(),
            "application/pdf; name=report.pdf"
        );
        assert_eq!(
            headers.header_parameter("Content-Disposition", "filename"),
            Some("report.pdf")
        );
    }

    #[test]
    fn short_body_is_not_wrapped() {
        assert_eq!(Attachment::new("Hello World").body_to_string(), "SGVsbG8gV29ybGQ=");
    }

    #[test]
    fn long_body_wraps_every_76_chars() {
        let encoded = Attachment::new(vec![0u8; 120]).body_to_string();
        let lines: Vec<&str> = encoded.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 76);
        assert_eq!(lines[1].len(), 76);
        assert_eq!(lines[2].len(), 8);
        assert_eq!(encoded.replace("\r\n", ""), STANDARD.encode([0u8; 120]));
    }

    #[test]
    fn disposition_display() {
        assert_eq!(Disposition::Inline.to_string(), "inline");
        assert_eq!(Disposition::Attachment.to_string(), "attachment");
    }
}
