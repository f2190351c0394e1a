//! `CREATE [OR REPLACE] VIEW ... AS SELECT` extraction

use std::collections::HashMap;

use log::debug;

use super::comment_catalog::CommentCatalog;
use super::comment_stripper::strip_comments;
use super::patterns::CREATE_VIEW_RE;
use super::privilege_parser::apply_privileges;
use super::projection::split_projection;
use crate::model::{Column, View};

/// Extract all views from raw SQL, in source order.
pub fn extract_views(sql: &str) -> Vec<View> {
    let sql = strip_comments(sql);
    let catalog = CommentCatalog::build(&sql);
    extract_views_with(&sql, &catalog)
}

/// Extract views from already comment-stripped SQL using a prebuilt catalog
pub fn extract_views_with(sql: &str, catalog: &CommentCatalog) -> Vec<View> {
    let views: Vec<View> = CREATE_VIEW_RE
        .captures_iter(sql)
        .map(|caps| {
            let raw_name = &caps["tablename"];
            let whole = caps.get(0).map_or("", |m| m.as_str());

            let mut view = View::new(raw_name, catalog.table_description(raw_name), whole);
            view.is_union = caps.name("isunion").is_some_and(|m| !m.as_str().is_empty());

            let column_comments = catalog.columns_of(view.name());
            view.object.columns = project_columns(&caps["columns"], column_comments);

            if let Some(aliases) = caps.name("aliases") {
                apply_alias_list(&mut view.object.columns, aliases.as_str(), column_comments);
            }

            view.sources = split_sources(&caps["sources"]);
            apply_privileges(sql, &mut view.object);
            view
        })
        .collect();

    debug!("Extracted {} views", views.len());
    views
}

/// Turn a SELECT list into view columns with descriptions looked up by alias
fn project_columns(
    projection: &str,
    column_comments: Option<&HashMap<String, String>>,
) -> Vec<Column> {
    split_projection(projection)
        .into_iter()
        .map(|item| {
            let mut column = Column::view_column(&item.alias, &item.expression);
            column.description = lookup(column_comments, &column.name);
            column
        })
        .collect()
}

/// Rename columns from an explicit `(a, b, ...)` list after the view name.
///
/// Applied only when the list has exactly as many entries as there are
/// columns; otherwise the list is ignored.
fn apply_alias_list(
    columns: &mut [Column],
    aliases: &str,
    column_comments: Option<&HashMap<String, String>>,
) {
    if aliases.trim().is_empty() {
        return;
    }
    let names: Vec<&str> = aliases.split(',').map(str::trim).collect();
    if names.len() != columns.len() {
        debug!(
            "Ignoring view alias list: {} names for {} columns",
            names.len(),
            columns.len()
        );
        return;
    }
    for (column, name) in columns.iter_mut().zip(names) {
        column.rename(name);
        column.description = lookup(column_comments, &column.name);
    }
}

/// Split a FROM list on commas into trimmed fragments
pub fn split_sources(sources: &str) -> Vec<String> {
    if sources.trim().is_empty() {
        return Vec::new();
    }
    sources.split(',').map(|s| s.trim().to_string()).collect()
}

fn lookup(comments: Option<&HashMap<String, String>>, name: &str) -> Option<String> {
    comments.and_then(|c| c.get(name)).cloned()
}
