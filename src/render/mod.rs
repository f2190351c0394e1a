//! Output rendering: AsciiDoc documents, `COMMENT ON` scripts and row tables

mod asciidoc;
mod columns;
mod comments;
mod linker;
mod rows;

pub use asciidoc::{
    caption, cell_slots, escape_cell, inclusion_placeholder, substitute_inclusions,
    table_to_asciidoc, tables_to_asciidoc, view_to_asciidoc, views_to_asciidoc, TABLES_CAPTION,
    TABLE_SEP, TOP_COMMENT, VIEWS_CAPTION,
};
pub use columns::{default_slots, fill_pattern, render_columns, ColumnFormatter, Slots};
pub use comments::{escape_sql_literal, object_to_comments, objects_to_comments};
pub use linker::{anchor_id, find_titles, make_title_references};
pub use rows::rows_to_asciidoc;
