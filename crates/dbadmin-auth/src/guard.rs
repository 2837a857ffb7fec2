//! Stale-credential guard for the logout round-trip.
//!
//! The login retry link carries the previous username forward as the
//! `old_usr` request parameter. If the browser's credential cache resubmits
//! the same name on the next request, the guard treats it as no submission
//! at all, which forces a fresh prompt instead of silently re-accepting the
//! just-rejected identity.

use subtle::ConstantTimeEq;

/// Suppresses a just-rejected username.
///
/// Returns `""` when a non-empty `stale_marker` equals `resolved`;
/// otherwise returns `resolved` unchanged. The marker is compared, never
/// stored. Comparison runs in constant time.
#[must_use]
pub fn guard_stale_username(resolved: &str, stale_marker: &str) -> String {
    if !stale_marker.is_empty() && ct_eq(stale_marker.as_bytes(), resolved.as_bytes()) {
        return String::new();
    }
    resolved.to_string()
}

/// Constant-time comparison of two byte slices.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).into()
}
