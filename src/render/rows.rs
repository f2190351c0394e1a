//! Query result rows as AsciiDoc table rows

/// Format rows as `|cell ` cells, one line per row.
///
/// `None` cells render empty and a literal `|` is escaped as `\|`.
pub fn rows_to_asciidoc<S: AsRef<str>>(rows: &[Vec<Option<S>>]) -> String {
    let mut out = String::new();
    for row in rows {
        for cell in row {
            out.push('|');
            if let Some(text) = cell {
                out.push_str(&text.as_ref().replace('|', r"\|"));
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
