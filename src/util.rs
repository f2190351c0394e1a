//! Shared utility helpers.
//!
//! All case-insensitive comparisons in the crate go through these ASCII
//! case-folding helpers so results never depend on the process locale.

/// Case-insensitive equality using ASCII case folding.
#[inline]
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.as_bytes().eq_ignore_ascii_case(b.as_bytes())
}

/// Case-insensitive starts_with check without allocating.
#[inline]
pub fn starts_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
}

/// Remove every double quote from an identifier (`"HR"."EMP"` -> `HR.EMP`).
#[inline]
pub fn strip_quotes(ident: &str) -> String {
    ident.replace('"', "")
}
