//! SELECT-list splitting
//!
//! A single left-to-right scan that splits on top-level commas only, skipping
//! commas nested in parentheses or inside string literals, and infers an alias
//! from the first whitespace after real expression text (`expr alias`,
//! `expr AS alias`, or none at all).
//!
//! The scan never backtracks, so unbalanced input just produces an odd split.

use crate::util::starts_with_ci;

/// One column of a SELECT list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionItem {
    /// Explicit alias, or the expression with any `qualifier.` removed
    pub alias: String,
    /// Expression text, trimmed
    pub expression: String,
}

impl ProjectionItem {
    fn from_parts(alias: &str, expression: &str) -> Self {
        let expression = expression.trim();
        let alias = alias.trim();
        let alias = strip_as_keyword(alias);
        let alias = if alias.is_empty() { expression } else { alias };
        let alias = alias.rsplit('.').next().unwrap_or(alias).trim();

        Self {
            alias: alias.to_string(),
            expression: expression.to_string(),
        }
    }
}

/// Drop a leading `AS` keyword from inferred alias text (`AS total` -> `total`)
fn strip_as_keyword(alias: &str) -> &str {
    if alias.len() > 2 && starts_with_ci(alias, "AS") {
        let rest = &alias[2..];
        if rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }
    alias
}

/// Split a SELECT list into (alias, expression) items
pub fn split_projection(text: &str) -> Vec<ProjectionItem> {
    let mut items = Vec::new();
    let mut expression = String::new();
    let mut alias = String::new();
    let mut filling_alias = false;
    let mut depth: i32 = 0;
    let mut in_string = false;

    for c in text.chars() {
        if depth <= 0 && !in_string {
            if c == ',' {
                items.push(ProjectionItem::from_parts(&alias, &expression));
                expression.clear();
                alias.clear();
                filling_alias = false;
                continue;
            }
            if (c == ' ' || c == '\n') && !expression.trim().is_empty() {
                filling_alias = true;
            }
        }

        if c == '\'' {
            in_string = !in_string;
        }

        if !in_string {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
        }

        if filling_alias {
            alias.push(c);
        } else {
            expression.push(c);
        }
    }

    items.push(ProjectionItem::from_parts(&alias, &expression));
    items
}
