//! `CREATE TABLE` extraction

use log::debug;

use super::column_parser::parse_columns;
use super::comment_catalog::CommentCatalog;
use super::comment_stripper::strip_comments;
use super::patterns::CREATE_TABLE_RE;
use super::privilege_parser::apply_privileges;
use crate::model::{ObjectKind, SchemaObject};

/// Extract all tables from raw SQL, in source order.
///
/// Comments are stripped and the comment catalog is built from the same text.
pub fn extract_tables(sql: &str) -> Vec<SchemaObject> {
    let sql = strip_comments(sql);
    let catalog = CommentCatalog::build(&sql);
    extract_tables_with(&sql, &catalog)
}

/// Extract tables from already comment-stripped SQL using a prebuilt catalog
pub fn extract_tables_with(sql: &str, catalog: &CommentCatalog) -> Vec<SchemaObject> {
    let tables: Vec<SchemaObject> = CREATE_TABLE_RE
        .captures_iter(sql)
        .map(|caps| {
            let raw_name = &caps["tablename"];
            let whole = caps.get(0).map_or("", |m| m.as_str());

            let mut table = SchemaObject::new(
                ObjectKind::Table,
                raw_name,
                catalog.table_description(raw_name),
                whole,
            );
            table.columns = parse_columns(&caps["columns"], catalog.columns_of(&table.name));
            apply_privileges(sql, &mut table);
            table
        })
        .collect();

    debug!("Extracted {} tables", tables.len());
    tables
}
