use crate::address::{Address, join_addresses};
use crate::attachment::Attachment;
use crate::headers::Headers;

/// An email message as composed by the caller.
///
/// Address lists and bodies live in dedicated fields; [`Email::headers`]
/// renders them back into a header set together with any custom headers.
///
/// # Examples
///
/// ```
/// use upspinner_core::{Address, Email};
///
/// let email = Email::new()
///     .with_from(Address::new("noreply@example.com").unwrap())
///     .with_to(Address::with_name("jane@example.com", "Jane").unwrap())
///     .with_subject("Welcome")
///     .with_text("Hello Jane")
///     .with_header("X-Campaign", "onboarding");
///
/// let headers = email.headers();
/// assert_eq!(headers.header_body("To"), Some("\"Jane\" <jane@example.com>"));
/// assert_eq!(headers.header_body("X-Campaign"), Some("onboarding"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    subject: Option<String>,
    from: Vec<Address>,
    sender: Option<Address>,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    reply_to: Vec<Address>,
    text_body: Option<String>,
    html_body: Option<String>,
    attachments: Vec<Attachment>,
    custom_headers: Headers,
}

impl Email {
    /// An empty email with no addresses, bodies or headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add a `From` address.
    #[must_use]
    pub fn with_from(mut self, address: Address) -> Self {
        self.from.push(address);
        self
    }

    /// Set the `Sender` address, which takes precedence over `From` when the
    /// envelope sender is derived.
    #[must_use]
    pub fn with_sender(mut self, address: Address) -> Self {
        self.sender = Some(address);
        self
    }

    /// Add a `To` address.
    #[must_use]
    pub fn with_to(mut self, address: Address) -> Self {
        self.to.push(address);
        self
    }

    /// Add a `Cc` address.
    #[must_use]
    pub fn with_cc(mut self, address: Address) -> Self {
        self.cc.push(address);
        self
    }

    /// Add a `Bcc` address.
    #[must_use]
    pub fn with_bcc(mut self, address: Address) -> Self {
        self.bcc.push(address);
        self
    }

    /// Add a `Reply-To` address.
    #[must_use]
    pub fn with_reply_to(mut self, address: Address) -> Self {
        self.reply_to.push(address);
        self
    }

    /// Set the plain-text body.
    #[must_use]
    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Set the HTML body.
    #[must_use]
    pub fn with_html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Attach a file.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Add a custom header. Names keep the casing they are given.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.custom_headers.add_text(name, body);
        self
    }

    /// The subject, if one was set.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// `From` addresses in insertion order.
    pub fn from(&self) -> &[Address] {
        &self.from
    }

    /// The `Sender` address, if one was set.
    pub fn sender(&self) -> Option<&Address> {
        self.sender.as_ref()
    }

    /// `To` addresses in insertion order.
    pub fn to(&self) -> &[Address] {
        &self.to
    }

    /// `Cc` addresses in insertion order.
    pub fn cc(&self) -> &[Address] {
        &self.cc
    }

    /// `Bcc` addresses in insertion order.
    pub fn bcc(&self) -> &[Address] {
        &self.bcc
    }

    /// `Reply-To` addresses in insertion order.
    pub fn reply_to(&self) -> &[Address] {
        &self.reply_to
    }

    /// The plain-text body, if one was set.
    pub fn text_body(&self) -> Option<&str> {
        self.text_body.as_deref()
    }

    /// The HTML body, if one was set.
    pub fn html_body(&self) -> Option<&str> {
        self.html_body.as_deref()
    }

    /// Attachments in insertion order.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Headers added through [`Email::with_header`] only.
    pub fn custom_headers(&self) -> &Headers {
        &self.custom_headers
    }

    /// Every header of the message: address headers, `Subject`, then the
    /// custom headers in insertion order. Empty address lists are skipped.
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        let address_headers = [
            ("From", self.from.as_slice()),
            ("Sender", self.sender.as_slice()),
            ("To", self.to.as_slice()),
            ("Cc", self.cc.as_slice()),
            ("Bcc", self.bcc.as_slice()),
            ("Reply-To", self.reply_to.as_slice()),
        ];
        for (name, addresses) in address_headers {
            if !addresses.is_empty() {
                headers.add_text(name, join_addresses(addresses));
            }
        }
        if let Some(subject) = &self.subject {
            headers.add_text("Subject", subject);
        }
        headers.extend(self.custom_headers.iter().cloned());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(address: &str) -> Address {
        Address::new(address).unwrap()
    }

    #[test]
    fn empty_email_has_no_headers() {
        let email = Email::new();
        assert!(email.headers().is_empty());
        assert!(email.subject().is_none());
        assert!(email.text_body().is_none());
        assert!(email.html_body().is_none());
    }

    #[test]
    fn headers_render_in_order() {
        let email = Email::new()
            .with_from(addr("from@example.com"))
            .with_to(addr("a@example.com"))
            .with_to(addr("b@example.com"))
            .with_bcc(addr("hidden@example.com"))
            .with_subject("Hi")
            .with_header("X-Priority", "1");

        let rendered: Vec<(String, String)> = email
            .headers()
            .iter()
            .map(|h| (h.name().to_owned(), h.body_as_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("From".into(), "from@example.com".into()),
                ("To".into(), "a@example.com, b@example.com".into()),
                ("Bcc".into(), "hidden@example.com".into()),
                ("Subject".into(), "Hi".into()),
                ("X-Priority".into(), "1".into()),
            ]
        );
    }

    #[test]
    fn custom_headers_keep_duplicates_and_casing() {
        let email = Email::new()
            .with_header("x-tag", "one")
            .with_header("X-Tag", "two");
        let names: Vec<&str> = email.custom_headers().iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["x-tag", "X-Tag"]);
    }

    #[test]
    fn bodies_and_attachments() {
        let email = Email::new()
            .with_text("plain")
            .with_html("<p>html</p>")
            .with_attachment(Attachment::new("a"))
            .with_attachment(Attachment::new("b"));
        assert_eq!(email.text_body(), Some("plain"));
        assert_eq!(email.html_body(), Some("<p>html</p>"));
        assert_eq!(email.attachments().len(), 2);
    }
}
