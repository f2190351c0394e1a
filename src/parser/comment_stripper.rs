//! SQL comment removal
//!
//! Block comments go first, by repeated regex removal. Line comments are then
//! dropped by a quote-aware character scan, so `--` or `/*` inside a string
//! literal survives.

use super::patterns::BLOCK_COMMENT_RE;

/// Remove `/* ... */` and `-- ...` comments from `sql`.
///
/// Newlines that end a line comment are kept, so line structure is preserved.
pub fn strip_comments(sql: &str) -> String {
    let mut text = sql.to_string();
    // Removing one comment can splice `/` and `*` from its neighbours into a new marker.
    while BLOCK_COMMENT_RE.is_match(&text) {
        text = BLOCK_COMMENT_RE.replace_all(&text, "").into_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut in_comment = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
                out.push(c);
            }
            continue;
        }

        if !in_string && c == '-' && chars.peek() == Some(&'-') {
            in_comment = true;
            continue;
        }

        out.push(c);
        if c == '\'' {
            in_string = !in_string;
        }
    }

    out
}
