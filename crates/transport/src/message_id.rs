use reqwest::header::HeaderMap;
use uuid::Uuid;

/// Response header carrying the identifier Upspinner assigned to a message.
pub const MESSAGE_ID_HEADER: &str = "x-message-id";

/// The first `x-message-id` value of a response, or a fresh random id when
/// the header is absent or not valid UTF-8.
pub fn message_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get_all(MESSAGE_ID_HEADER)
        .iter()
        .next()
        .and_then(|value| value.to_str().ok())
        .map_or_else(random_message_id, str::to_owned)
}

/// A random UUID v4 in canonical hyphenated form.
pub fn random_message_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
