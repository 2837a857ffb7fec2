//! Byte-level sanitization helpers.
//!
//! [`sanitize_identifier`] normalizes a username for use as a MySQL account
//! name; [`filter_display_text`] constrains text destined for protocol
//! headers to printable US-ASCII. Neither ever fails: disallowed content is
//! dropped silently.

/// Strips bytes that cannot appear in a MySQL account name.
///
/// Removes the ASCII control range (0x00-0x1F) and DEL (0x7F). Everything
/// else, including non-ASCII, is a legal account-name byte and passes
/// through. Idempotent.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    name.chars().filter(|c| !c.is_ascii_control()).collect()
}

/// Keeps only printable US-ASCII (0x20-0x7E inclusive).
///
/// Basic-Auth challenge header values must not carry control or non-ASCII
/// bytes, so realm text passes through this before reaching a header. Never
/// used on credentials.
#[must_use]
pub fn filter_display_text(text: &str) -> String {
    text.chars().filter(|&c| matches!(c, ' '..='~')).collect()
}
