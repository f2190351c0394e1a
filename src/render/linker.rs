//! AsciiDoc cross-references between section titles
//!
//! A title is a line starting with a word character, directly followed by an
//! underline of `=^+~-` characters of the same length. Later mentions of the
//! title word become `<<_anchor,Title>>` links.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\w.*)\n([=^+~-]+)$").expect("Invalid title regex")
});

const UNDERLINE_CHARS: [char; 5] = ['=', '^', '+', '~', '-'];

/// Titles found in `text`, in order of appearance
pub fn find_titles(text: &str) -> Vec<String> {
    TITLE_RE
        .captures_iter(text)
        .filter(|caps| caps[1].chars().count() == caps[2].chars().count())
        .map(|caps| caps[1].to_string())
        .collect()
}

/// AsciiDoc's generated section id for `title` (without the `<<`/`>>`)
pub fn anchor_id(title: &str) -> String {
    let id: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("_{}", id.trim_matches('_').to_lowercase())
}

/// Link mentions of titles found in `src` (or `dest` itself) inside `dest`
pub fn make_title_references(dest: &str, src: Option<&str>) -> String {
    let titles = find_titles(src.unwrap_or(dest));
    let mut out = dest.to_string();
    for title in &titles {
        out = link_title(&out, title);
    }
    out
}

/// True when `rest` starts on a new line that is an underline
fn starts_underline(rest: &str) -> bool {
    rest.strip_prefix('\n')
        .is_some_and(|r| r.starts_with(UNDERLINE_CHARS))
}

/// Replace whole-word, case-insensitive mentions of `title`.
///
/// A mention is skipped when it is the title line itself (an underline
/// follows) or when either of the next two characters is `>`, which keeps
/// existing links intact. The two characters are consumed with the match.
fn link_title(text: &str, title: &str) -> String {
    let Ok(re) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(title))) else {
        return text.to_string();
    };
    let link = format!("<<{},{}>>", anchor_id(title), title);

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(m) = re.find_at(text, pos) {
        let rest = &text[m.end()..];
        let trailing: String = rest.chars().take(2).collect();

        if !starts_underline(rest) && trailing.chars().count() == 2 && !trailing.contains('>') {
            out.push_str(&text[pos..m.start()]);
            out.push_str(&link);
            out.push_str(&trailing);
            pos = m.end() + trailing.len();
        } else {
            // Retry one character further on
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&text[pos..m.start() + step]);
            pos = m.start() + step;
        }
        if pos >= text.len() {
            break;
        }
    }
    out.push_str(&text[pos.min(text.len())..]);
    out
}
