use std::sync::LazyLock;

use regex::Regex;

// The regex crate's `\s` and `\d` are Unicode-aware; the API only accepts ASCII.
static ALPHANUMERIC_SENDER_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9[:space:]]{2,11}$").expect("sender ID regex is valid")
});

static E164_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("E.164 regex is valid"));

/// Whether `from` is usable as an SMS sender: an alphanumeric sender ID of
/// 2 to 11 characters (spaces allowed) or an E.164 phone number.
pub fn is_valid_sender(from: &str) -> bool {
    ALPHANUMERIC_SENDER_ID.is_match(from) || E164_NUMBER.is_match(from)
}
