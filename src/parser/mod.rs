//! Oracle SQL structure extraction
//!
//! Regexes in [`patterns`] frame whole statements; the SELECT list is split by
//! the scanner in [`projection`]. Nothing here fails: text that does not fit a
//! recognized statement shape is skipped.

mod column_parser;
mod comment_catalog;
mod comment_stripper;
mod patterns;
mod privilege_parser;
mod projection;
mod source_reader;
mod table_parser;
mod view_parser;

pub use column_parser::parse_columns;
pub use comment_catalog::{
    extract_column_comments, extract_table_comments, ColumnComments, CommentCatalog,
    TableComments,
};
pub use comment_stripper::strip_comments;
pub use privilege_parser::{
    apply_privileges, extract_privileges, PrivilegeAction, PrivilegeStatement,
};
pub use projection::{split_projection, ProjectionItem};
pub use source_reader::{read_sql_file, read_sql_stdin};
pub use table_parser::{extract_tables, extract_tables_with};
pub use view_parser::{extract_views, extract_views_with, split_sources};
