use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in RFC 2231 extended parameter values: everything except
/// `attribute-char`.
const RFC2231_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Characters that force a header parameter value to be quoted (RFC 2045
/// `tspecials` plus whitespace).
const TSPECIALS: &[char] = &[
    '(', ')', '<', '>', '@', ',', ';', ':', '\\', '"', '/', '[', ']', '?', '=', ' ', '\t',
];

/// A single MIME header, optionally carrying `key=value` parameters
/// (`Content-Disposition: inline; filename=logo.png`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    body: String,
    parameters: Vec<(String, String)>,
}

impl Header {
    /// A plain text header.
    pub fn text(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter to the header.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    /// Header name, with the casing it was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header body without parameters.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Value of the named parameter; the key lookup ignores ASCII case.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The full header value as it would appear on the wire, parameters
    /// included. Non-ASCII parameter values use the RFC 2231 extended form
    /// (`name*=utf-8''r%C3%A9sum%C3%A9.pdf`).
    pub fn body_as_string(&self) -> String {
        let mut out = self.body.clone();
        for (key, value) in &self.parameters {
            out.push_str("; ");
            out.push_str(key);
            if !value.is_ascii() {
                out.push_str("*=utf-8''");
                out.extend(utf8_percent_encode(value, RFC2231_ESCAPED));
                continue;
            }
            out.push('=');
            if value.is_empty() || value.contains(TSPECIALS) {
                out.push('"');
                out.push_str(&value.replace('\\', "\\\\").replace('"', "\\\""));
                out.push('"');
            } else {
                out.push_str(value);
            }
        }
        out
    }
}

/// An ordered header collection with case-insensitive lookups.
///
/// Duplicate names are kept; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Header>,
}

impl Headers {
    /// An empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header.
    pub fn add(&mut self, header: Header) -> &mut Self {
        self.entries.push(header);
        self
    }

    /// Append a plain text header.
    pub fn add_text(&mut self, name: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.add(Header::text(name, body))
    }

    /// First header with the given name.
    pub fn get(&self, name: &str) -> Option<&Header> {
        self.entries
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Whether a header with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Body (without parameters) of the first header with the given name.
    pub fn header_body(&self, name: &str) -> Option<&str> {
        self.get(name).map(Header::body)
    }

    /// Parameter value of the first header with the given name.
    pub fn header_parameter(&self, name: &str, parameter: &str) -> Option<&str> {
        self.get(name).and_then(|h| h.parameter(parameter))
    }

    /// Remove every header with the given name.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|h| !h.name.eq_ignore_ascii_case(name));
    }

    /// Headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.entries.iter()
    }

    /// Number of headers, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Extend<Header> for Headers {
    fn extend<T: IntoIterator<Item = Header>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
