//! Credential resolution across web-server integration conventions.
//!
//! Front servers surface HTTP Basic-Auth data under differing,
//! non-standardized variable names depending on how the application is
//! wired in (native module, CGI, redirected CGI, IIS, FastCGI). The
//! extractor scans a fixed precedence list per field and takes the first
//! non-empty value; some conventions deliver the whole encoded
//! `Authorization` value instead of a plain username, so a `Basic ` payload
//! found in the username position is decoded and split.

use base64::{Engine, engine::general_purpose::STANDARD};
use dbadmin_core::Credential;

use crate::context::SourceTable;

/// Username sources in precedence order. First non-empty value wins.
pub const USERNAME_SOURCES: [&str; 6] = [
    // Native Basic-Auth variable
    "PHP_AUTH_USER",
    // Plain CGI
    "REMOTE_USER",
    // CGI behind an internal redirect
    "REDIRECT_REMOTE_USER",
    // IIS / WebSite Professional
    "AUTH_USER",
    // IIS, carries the encoded header
    "HTTP_AUTHORIZATION",
    // FastCGI, carries the encoded header
    "Authorization",
];

/// Password sources in precedence order, resolved independently of the
/// username.
pub const PASSWORD_SOURCES: [&str; 3] = ["PHP_AUTH_PW", "REMOTE_PASSWORD", "AUTH_PASSWORD"];

const BASIC_PREFIX: &str = "Basic ";

/// Resolves a raw credential pair from the source table.
///
/// Username and password follow separate precedence lists; an unresolved
/// password is the empty string, never absent. A username carrying an
/// encoded `Basic ` payload is decoded and split on the first colon, so
/// colons inside the password survive. A payload that cannot be decoded, or
/// that decodes without a username-terminating colon, resolves to an empty
/// credential and routes the gate back to its challenge.
///
/// Pure function of the source table.
#[must_use]
pub fn extract_credential(sources: &SourceTable) -> Credential {
    let username = first_non_empty(sources, &USERNAME_SOURCES);
    let password = first_non_empty(sources, &PASSWORD_SOURCES);

    match username.strip_prefix(BASIC_PREFIX) {
        Some(payload) => decode_basic_payload(payload),
        None => Credential::new(username, password),
    }
}

/// Returns the first non-empty value among `keys`, or `""`.
fn first_non_empty<'a>(sources: &'a SourceTable, keys: &[&str]) -> &'a str {
    keys.iter()
        .map(|key| sources.get(key))
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Decodes the base64 remainder of a `Basic ` value into a credential.
///
/// The split is on the first colon only, and a colon must terminate a
/// non-empty username part. Anything else resolves to the empty credential.
fn decode_basic_payload(payload: &str) -> Credential {
    let Ok(decoded) = STANDARD.decode(payload) else {
        return Credential::default();
    };
    let Ok(text) = String::from_utf8(decoded) else {
        return Credential::default();
    };
    match text.split_once(':') {
        Some((username, password)) if !username.is_empty() => Credential::new(username, password),
        _ => Credential::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> SourceTable {
        let mut sources = SourceTable::new();
        for (key, value) in entries {
            sources.set(*key, *value);
        }
        sources
    }

    fn basic(payload: &str) -> String {
        format!("Basic {}", STANDARD.encode(payload))
    }

    #[test]
    fn username_precedence_is_fixed() {
        let sources = table(&[
            ("Authorization", "fastcgi"),
            ("AUTH_USER", "iis"),
            ("REMOTE_USER", "cgi"),
        ]);
        assert_eq!(extract_credential(&sources).username, "cgi");

        let sources = table(&[("REMOTE_USER", "cgi"), ("PHP_AUTH_USER", "native")]);
        assert_eq!(extract_credential(&sources).username, "native");

        let sources = table(&[("AUTH_USER", "iis"), ("REDIRECT_REMOTE_USER", "redirect")]);
        assert_eq!(extract_credential(&sources).username, "redirect");
    }

    #[test]
    fn empty_values_do_not_shadow_later_sources() {
        let sources = table(&[("PHP_AUTH_USER", ""), ("REMOTE_USER", "bob")]);
        assert_eq!(extract_credential(&sources).username, "bob");
    }

    #[test]
    fn password_precedence_is_independent_of_username() {
        let sources = table(&[
            ("AUTH_USER", "iis"),
            ("AUTH_PASSWORD", "fallback"),
            ("REMOTE_PASSWORD", "cgi-pass"),
        ]);
        let credential = extract_credential(&sources);
        assert_eq!(credential.username, "iis");
        assert_eq!(credential.password, "cgi-pass");
    }

    #[test]
    fn unresolved_password_defaults_to_empty() {
        let sources = table(&[("REMOTE_USER", "bob")]);
        assert_eq!(extract_credential(&sources).password, "");
    }

    #[test]
    fn remote_user_with_auth_password_scenario() {
        let sources = table(&[("REMOTE_USER", "bob"), ("AUTH_PASSWORD", "secret")]);
        let credential = extract_credential(&sources);
        assert_eq!(credential, Credential::new("bob", "secret"));
    }

    #[test]
    fn basic_payload_splits_on_first_colon_only() {
        let sources = table(&[("HTTP_AUTHORIZATION", &basic("alice:p:w"))]);
        let credential = extract_credential(&sources);
        assert_eq!(credential.username, "alice");
        assert_eq!(credential.password, "p:w");
    }

    #[test]
    fn basic_payload_overrides_independently_resolved_password() {
        let sources = table(&[
            ("Authorization", &basic("alice:pw") as &str),
            ("AUTH_PASSWORD", "stale"),
        ]);
        let credential = extract_credential(&sources);
        assert_eq!(credential, Credential::new("alice", "pw"));
    }

    #[test]
    fn basic_payload_without_colon_resolves_empty() {
        let sources = table(&[("Authorization", &basic("no-colon-here"))]);
        assert!(extract_credential(&sources).is_empty());
    }

    #[test]
    fn basic_payload_with_leading_colon_resolves_empty() {
        let sources = table(&[("Authorization", &basic(":password-only"))]);
        assert!(extract_credential(&sources).is_empty());
    }

    #[test]
    fn undecodable_basic_payload_resolves_empty() {
        let sources = table(&[("Authorization", "Basic !!!not-base64!!!")]);
        assert!(extract_credential(&sources).is_empty());
    }

    #[test]
    fn basic_prefix_is_case_sensitive() {
        // "basic" is not the literal prefix; the value passes through as a
        // plain username.
        let sources = table(&[("REMOTE_USER", "basic QWxhZGRpbg==")]);
        assert_eq!(extract_credential(&sources).username, "basic QWxhZGRpbg==");
    }

    #[test]
    fn plain_username_passes_through_untouched() {
        let sources = table(&[("PHP_AUTH_USER", "carol"), ("PHP_AUTH_PW", "pw")]);
        assert_eq!(extract_credential(&sources), Credential::new("carol", "pw"));
    }
}
