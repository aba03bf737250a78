use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

/// A mailbox: an email address with an optional display name.
///
/// # Examples
///
/// ```
/// use upspinner_core::Address;
///
/// let address: Address = "Jane Doe <jane@example.com>".parse().unwrap();
/// assert_eq!(address.address(), "jane@example.com");
/// assert_eq!(address.name(), "Jane Doe");
/// assert_eq!(address.to_string(), "\"Jane Doe\" <jane@example.com>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    address: String,
    name: String,
}

impl Address {
    /// Create an address without a display name.
    pub fn new(address: impl Into<String>) -> Result<Self, MessageError> {
        Self::with_name(address, "")
    }

    /// Create an address with a display name.
    ///
    /// Only a structural check is performed: exactly one `@` with a
    /// non-empty local part and domain, and no whitespace.
    pub fn with_name(
        address: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, MessageError> {
        let address = address.into().trim().to_owned();
        let valid = match address.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !address.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(MessageError::InvalidAddress(address));
        }

        Ok(Self {
            address,
            name: name.into().trim().to_owned(),
        })
    }

    /// The bare email address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The display name, empty when none was given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            return f.write_str(&self.address);
        }
        let escaped = self.name.replace('\\', "\\\\").replace('"', "\\\"");
        write!(f, "\"{escaped}\" <{}>", self.address)
    }
}

impl FromStr for Address {
    type Err = MessageError;

    /// Parses either `address` or `Display Name <address>`; the display name
    /// may be wrapped in double quotes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(open) = s.rfind('<') else {
            return Self::new(s);
        };
        let Some(address) = s[open + 1..].strip_suffix('>') else {
            return Err(MessageError::InvalidAddress(s.to_owned()));
        };

        let name = s[..open].trim();
        let name = name
            .strip_prefix('"')
            .and_then(|n| n.strip_suffix('"'))
            .map_or_else(
                || name.to_owned(),
                |n| n.replace("\\\"", "\"").replace("\\\\", "\\"),
            );

        Self::with_name(address, name)
    }
}

/// Renders a list of addresses as a header body (`a@x, "B" <b@x>`).
pub(crate) fn join_addresses(addresses: &[Address]) -> String {
    addresses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
