//! Re-emit descriptions as Oracle `COMMENT ON` statements

use super::columns::{render_columns, Slots};
use crate::model::{Column, SchemaModel, SchemaObject};

const HEADER: &str = "
-- COMMENTS    ON    DATABASE    OBJECTS --
-- Auto-generated from SQL CREATE script --
-------------------------------------------
";

/// Double single quotes so text can sit inside a SQL string literal
pub fn escape_sql_literal(text: &str) -> String {
    text.replace('\'', "''")
}

fn comment_slots(column: &Column) -> Slots {
    let mut slots = Slots::new();
    slots.insert("name", column.name.clone());
    slots.insert(
        "desc",
        escape_sql_literal(column.description.as_deref().unwrap_or_default()),
    );
    slots
}

/// `COMMENT ON` block for a single table or view
pub fn object_to_comments(object: &SchemaObject) -> String {
    let name = &object.name;
    let pattern = format!("comment on column {name}.{{name}}\n  is '{{desc}}';\n");
    let cols = render_columns(object, &pattern, Some(&comment_slots));

    format!(
        "\n------ {}: {name} ------\ncomment on table {name}\n  is '{}';\n{cols}\n",
        object.kind.keyword(),
        escape_sql_literal(object.description.as_deref().unwrap_or_default()),
    )
}

/// `COMMENT ON` script for every table, then every view
pub fn objects_to_comments(model: &SchemaModel) -> String {
    let mut out = HEADER.to_string();
    for object in model.objects() {
        out.push_str(&object_to_comments(object));
    }
    out
}
