use crate::address::Address;
use crate::email::Email;
use crate::error::MessageError;

/// The resolved sender and recipient set of an email, as opposed to the
/// header-level `From`/`To`/`Cc`/`Bcc` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    sender: Address,
    recipients: Vec<Address>,
}

impl Envelope {
    /// Create an envelope. At least one recipient is required.
    pub fn new(sender: Address, recipients: Vec<Address>) -> Result<Self, MessageError> {
        if recipients.is_empty() {
            return Err(MessageError::NoRecipients);
        }
        Ok(Self { sender, recipients })
    }

    /// Derive the envelope from the email headers.
    ///
    /// The sender is the `Sender` address, else the first `From` address.
    /// Recipients are `To`, `Cc` and `Bcc`, in that order.
    pub fn from_email(email: &Email) -> Result<Self, MessageError> {
        let sender = email
            .sender()
            .or_else(|| email.from().first())
            .cloned()
            .ok_or(MessageError::MissingSender)?;
        let recipients = email
            .to()
            .iter()
            .chain(email.cc())
            .chain(email.bcc())
            .cloned()
            .collect();
        Self::new(sender, recipients)
    }

    /// The envelope sender.
    pub fn sender(&self) -> &Address {
        &self.sender
    }

    /// Every recipient, never empty.
    pub fn recipients(&self) -> &[Address] {
        &self.recipients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(address: &str) -> Address {
        Address::new(address).unwrap()
    }

    #[test]
    fn new_requires_recipients() {
        let err = Envelope::new(addr("from@example.com"), Vec::new()).unwrap_err();
        assert_eq!(err, MessageError::NoRecipients);
    }

    #[test]
    fn derived_sender_prefers_sender_header() {
        let email = Email::new()
            .with_from(addr("from@example.com"))
            .with_sender(addr("bounces@example.com"))
            .with_to(addr("to@example.com"));
        let envelope = Envelope::from_email(&email).unwrap();
        assert_eq!(envelope.sender().address(), "bounces@example.com");
    }

    #[test]
    fn derived_sender_falls_back_to_first_from() {
        let email = Email::new()
            .with_from(addr("first@example.com"))
            .with_from(addr("second@example.com"))
            .with_to(addr("to@example.com"));
        let envelope = Envelope::from_email(&email).unwrap();
        assert_eq!(envelope.sender().address(), "first@example.com");
    }

    #[test]
    fn derived_recipients_include_cc_and_bcc() {
        let email = Email::new()
            .with_from(addr("from@example.com"))
            .with_to(addr("to@example.com"))
            .with_cc(addr("cc@example.com"))
            .with_bcc(addr("bcc@example.com"));
        let envelope = Envelope::from_email(&email).unwrap();
        let recipients: Vec<&str> = envelope.recipients().iter().map(Address::address).collect();
        assert_eq!(
            recipients,
            vec!["to@example.com", "cc@example.com", "bcc@example.com"]
        );
    }

    #[test]
    fn missing_sender_is_rejected() {
        let email = Email::new().with_to(addr("to@example.com"));
        assert_eq!(
            Envelope::from_email(&email).unwrap_err(),
            MessageError::MissingSender
        );
    }

    #[test]
    fn missing_recipients_are_rejected() {
        let email = Email::new().with_from(addr("from@example.com"));
        assert_eq!(
            Envelope::from_email(&email).unwrap_err(),
            MessageError::NoRecipients
        );
    }
}
