//! Build the schema model from SQL source text

use log::debug;

use crate::parser::{extract_tables_with, extract_views_with, strip_comments, CommentCatalog};

use super::SchemaModel;

/// Extract tables, views and UNION-view verbatim text from one SQL source.
///
/// Comments are stripped and the comment catalog built once, then shared by
/// every extractor. Each call starts from an empty model.
pub fn build_model(sql: &str) -> SchemaModel {
    let sql = strip_comments(sql);
    let catalog = CommentCatalog::build(&sql);
    debug!(
        "Comment catalog: {} table comments, {} tables with column comments",
        catalog.tables.len(),
        catalog.columns.len()
    );

    let mut model = SchemaModel::new();
    for table in extract_tables_with(&sql, &catalog) {
        model.add_table(table);
    }
    for view in extract_views_with(&sql, &catalog) {
        model.add_view(view);
    }
    model
}
