//! `COMMENT ON TABLE` / `COMMENT ON COLUMN` lookup tables

use std::collections::HashMap;

use super::patterns::{COLUMN_COMMENT_RE, TABLE_COMMENT_RE};

/// Table name -> description
pub type TableComments = HashMap<String, String>;

/// Table name -> (column name -> description)
pub type ColumnComments = HashMap<String, HashMap<String, String>>;

/// Descriptions collected from one SQL source, keyed by names exactly as written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentCatalog {
    pub tables: TableComments,
    pub columns: ColumnComments,
}

impl CommentCatalog {
    /// Collect both table and column comments from `sql`
    pub fn build(sql: &str) -> Self {
        Self {
            tables: extract_table_comments(sql),
            columns: extract_column_comments(sql),
        }
    }

    pub fn table_description(&self, name: &str) -> Option<String> {
        self.tables.get(name).cloned()
    }

    /// Column descriptions of one table, if any were declared
    pub fn columns_of(&self, table: &str) -> Option<&HashMap<String, String>> {
        self.columns.get(table)
    }
}

/// Decode the body of a single-quoted SQL literal (`''` -> `'`)
fn unescape_literal(text: &str) -> String {
    text.replace("''", "'")
}

/// Extract `COMMENT ON TABLE` descriptions; a repeated name keeps the last one
pub fn extract_table_comments(sql: &str) -> TableComments {
    let mut comments = TableComments::new();
    for caps in TABLE_COMMENT_RE.captures_iter(sql) {
        comments.insert(
            caps["tablename"].to_string(),
            unescape_literal(&caps["comment"]),
        );
    }
    comments
}

/// Extract `COMMENT ON COLUMN` descriptions grouped by table
pub fn extract_column_comments(sql: &str) -> ColumnComments {
    let mut comments = ColumnComments::new();
    for caps in COLUMN_COMMENT_RE.captures_iter(sql) {
        comments
            .entry(caps["tablename"].to_string())
            .or_default()
            .insert(
                caps["colname"].to_string(),
                unescape_literal(&caps["comment"]),
            );
    }
    comments
}
