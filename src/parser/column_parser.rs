//! Column definitions inside a `CREATE TABLE` body
//!
//! Each definition has the fixed shape
//! `name type[(args)] [DEFAULT token] [PRIMARY KEY] [NOT NULL] [ENABLE]`.
//! Out-of-line constraints and anything else that does not fit are skipped.

use std::collections::HashMap;

use super::patterns::COLUMN_DEF_RE;
use crate::model::Column;
use crate::util::strip_quotes;

/// Parse the raw body of a CREATE TABLE into columns, in declaration order.
///
/// `column_comments` maps quote-stripped column names to descriptions.
pub fn parse_columns(body: &str, column_comments: Option<&HashMap<String, String>>) -> Vec<Column> {
    COLUMN_DEF_RE
        .captures_iter(body)
        .map(|caps| {
            let name = strip_quotes(&caps["colname"]);
            let data_type = caps["coltype"].trim();
            let default = caps.name("default").map(|m| m.as_str().to_string());
            // Only the exact canonical spelling counts; "NOT  NULL" stays nullable.
            let not_null = caps
                .name("notnull")
                .is_some_and(|m| m.as_str().eq_ignore_ascii_case("NOT NULL"));
            let description = column_comments.and_then(|c| c.get(&name)).cloned();

            Column::table_column(&name, data_type, !not_null, default, description)
        })
        .collect()
}
