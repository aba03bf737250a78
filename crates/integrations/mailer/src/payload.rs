use upspinner_core::{Address, Attachment, Email, Envelope, Header};

use crate::types::{EmailAddress, EmailAttachment, EmailContent, EmailPayload};

impl From<&Address> for EmailAddress {
    fn from(address: &Address) -> Self {
        Self {
            email: address.address().to_owned(),
            name: address.name().to_owned(),
        }
    }
}

fn addresses(list: &[Address]) -> Vec<EmailAddress> {
    list.iter().map(EmailAddress::from).collect()
}

/// Envelope recipients that are not already listed in `Cc` or `Bcc`.
fn direct_recipients<'a>(email: &Email, envelope: &'a Envelope) -> Vec<&'a Address> {
    envelope
        .recipients()
        .iter()
        .filter(|recipient| {
            !email
                .cc()
                .iter()
                .chain(email.bcc())
                .any(|copied| copied.address() == recipient.address())
        })
        .collect()
}

fn content(email: &Email) -> EmailContent {
    EmailContent {
        text: email.text_body().unwrap_or_default().to_owned(),
        html: email.html_body().unwrap_or_default().to_owned(),
    }
}

fn attachment_payload(attachment: &Attachment) -> EmailAttachment {
    let headers = attachment.prepared_headers();
    let filename = headers
        .header_parameter("Content-Disposition", "filename")
        .unwrap_or_default()
        .to_owned();
    let disposition = headers
        .header_body("Content-Disposition")
        .unwrap_or_default()
        .to_owned();
    let content_id = if disposition == "inline" {
        filename.clone()
    } else {
        String::new()
    };

    EmailAttachment {
        disposition,
        content: attachment.body_to_string().replace("\r\n", ""),
        content_type: headers
            .get("Content-Type")
            .map(Header::body_as_string)
            .unwrap_or_default(),
        filename,
        content_id,
    }
}

/// Map an email and its resolved envelope to the API payload.
///
/// Headers are flattened to `name -> value`; on duplicate names the last
/// header wins.
pub fn build_payload(email: &Email, envelope: &Envelope) -> EmailPayload {
    EmailPayload {
        subject: email.subject().unwrap_or_default().to_owned(),
        to: direct_recipients(email, envelope)
            .into_iter()
            .map(EmailAddress::from)
            .collect(),
        cc: addresses(email.cc()),
        bcc: addresses(email.bcc()),
        from: EmailAddress::from(envelope.sender()),
        reply_to: addresses(email.reply_to()),
        content: content(email),
        attachments: email.attachments().iter().map(attachment_payload).collect(),
        headers: email
            .headers()
            .iter()
            .map(|header| (header.name().to_owned(), header.body_as_string()))
            .collect(),
    }
}
