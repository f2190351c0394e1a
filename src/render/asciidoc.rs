//! AsciiDoc rendering of tables and views
//!
//! Each object becomes a titled section with column tables. UNION views get a
//! `[source,sql]` listing holding an `INCLUSION_<n>` placeholder; the document
//! pipeline swaps placeholders for `SchemaModel::verbatim` text at the very end,
//! after cross-references are linked.

use std::sync::LazyLock;

use regex::Regex;

use super::columns::{render_columns, Slots};
use crate::model::{Column, SchemaObject, View};

/// Banner written at the top of every generated document
pub const TOP_COMMENT: &str = "\
// ''''''''''''''''''''''''''''''''''''''''''''''''''
// THIS FILE IS GENERATED AUTOMATICALLY - DON'T EDIT!
// ''''''''''''''''''''''''''''''''''''''''''''''''''
// Tables parsed from SQL
// using sql2asciidoc
// ''''''''''''''''''''''''''''''''''''''''''''''''''
";

pub const TABLES_CAPTION: &str = "Tables";
pub const VIEWS_CAPTION: &str = "Views";

/// Delimiter line of an AsciiDoc table block
pub const TABLE_SEP: &str = "|============================================================";

const TABLE_COLUMNS_ATTRIBUTES: &str = r#"[cols="8m,5m,15a",options="header"]"#;
const TABLE_COLUMNS_HEADER: &str = "|Column |Type |Description";
const TABLE_ROW_PATTERN: &str = "|{name}  |{type}|{descf}{defaultf}\n";

const VIEW_COLUMNS_ATTRIBUTES: &str = r#"[cols="8m,8m,12a",options="header"]"#;
const VIEW_COLUMNS_HEADER: &str = "|Alias |Value |Description";
const VIEW_ROW_PATTERN: &str = "|{name}  |+++{value}+++|{descf}\n";

static QUOTED_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']*)'").expect("Invalid quoted text regex"));

/// Placeholder marking where verbatim text `index` goes
pub fn inclusion_placeholder(index: usize) -> String {
    format!("INCLUSION_{index}")
}

/// Make SQL text safe inside a table cell: `'x'` -> `` `x' `` and `|` -> `\|`
pub fn escape_cell(text: &str) -> String {
    QUOTED_TEXT_RE
        .replace_all(text, "`${1}'")
        .replace('|', r"\|")
}

/// Slots used for the table and view column rows
pub fn cell_slots(column: &Column) -> Slots {
    let default = column.default.as_deref().map(escape_cell);
    let description = column.description.clone().unwrap_or_default();

    let mut slots = Slots::new();
    slots.insert("name", column.name.clone());
    slots.insert("type", column.data_type.clone());
    slots.insert("nullable", column.nullable.to_string());
    slots.insert(
        "notnull",
        if column.nullable { "" } else { " not null" }.to_string(),
    );
    slots.insert(
        "value",
        escape_cell(column.value.as_deref().unwrap_or_default()),
    );
    slots.insert(
        "defaultf",
        default
            .as_deref()
            .map(|d| format!("\n\n*Default: {d}*"))
            .unwrap_or_default(),
    );
    slots.insert("default", default.unwrap_or_default());
    slots.insert("desc", description.clone());
    slots.insert("descf", description);
    slots
}

fn heading(name: &str, underline: char) -> String {
    let rule = underline.to_string().repeat(name.chars().count());
    format!("{name}\n{rule}")
}

/// Caption line with its underline (e.g. "Tables" over "======")
pub fn caption(text: &str, underline: char) -> String {
    format!("\n\n{}\n", heading(text, underline))
}

/// Render one table section
pub fn table_to_asciidoc(table: &SchemaObject, title_char: char) -> String {
    let cols = render_columns(table, TABLE_ROW_PATTERN, Some(&cell_slots));
    format!(
        "\n{}\n\n{}\n\n.Columns of the table\n{TABLE_COLUMNS_ATTRIBUTES}\n{TABLE_SEP}\n{TABLE_COLUMNS_HEADER}\n{cols}\n{TABLE_SEP}\n\n",
        heading(&table.name, title_char),
        table.description.as_deref().unwrap_or_default(),
    )
}

/// Render every table section
pub fn tables_to_asciidoc(tables: &[SchemaObject], title_char: char) -> String {
    tables
        .iter()
        .map(|t| table_to_asciidoc(t, title_char))
        .collect()
}

/// Split a FROM fragment at its last space into (reference, alias)
fn split_source(source: &str) -> (&str, &str) {
    match source.rsplit_once(' ') {
        Some((reference, alias)) if !reference.is_empty() => (reference, alias),
        Some((_, alias)) => (alias, ""),
        None => (source, ""),
    }
}

fn sources_table(view: &View) -> String {
    let rows: String = view
        .sources
        .iter()
        .map(|source| {
            let (reference, alias) = split_source(source);
            // `@` would otherwise be turned into a mailto: link
            format!(
                "|{} |{}\n",
                reference.replace('|', r"\|").replace('@', "$$@$$"),
                alias.replace('|', r"\|"),
            )
        })
        .collect();
    format!(
        "\n.Sources of the view\n[cols=\"8m,5m\",options=\"header\",width=\"70%\"]\n{TABLE_SEP}\n|Table/View |Alias\n{rows}\n{TABLE_SEP}\n\n"
    )
}

/// Render one view section
pub fn view_to_asciidoc(view: &View, title_char: char) -> String {
    let object = &view.object;
    let mut out = format!(
        "\n{}\n\n{}\n\n",
        heading(&object.name, title_char),
        object.description.as_deref().unwrap_or_default(),
    );

    if !view.sources.is_empty() {
        out.push_str(&sources_table(view));
    }

    let cols = render_columns(object, VIEW_ROW_PATTERN, Some(&cell_slots));
    if !cols.is_empty() {
        out.push_str(&format!(
            "\n.Columns of the view\n{VIEW_COLUMNS_ATTRIBUTES}\n{TABLE_SEP}\n{VIEW_COLUMNS_HEADER}\n{cols}\n{TABLE_SEP}\n\n"
        ));
    }

    if let Some(index) = view.verbatim_index {
        let rule = "-".repeat(60);
        out.push_str(&format!(
            "\n\nThe view is created using UNION select. Script of the view\nis shown below:\n\n.View SQL\n[source,sql]\n{rule}\n{}\n{rule}\n",
            inclusion_placeholder(index),
        ));
    }

    out
}

/// Render every view section
pub fn views_to_asciidoc(views: &[View], title_char: char) -> String {
    views
        .iter()
        .map(|v| view_to_asciidoc(v, title_char))
        .collect()
}

/// Replace `INCLUSION_<n>` placeholders with verbatim text.
///
/// Highest index first, so `INCLUSION_1` never eats the prefix of `INCLUSION_12`.
pub fn substitute_inclusions(text: &str, verbatim: &[String]) -> String {
    let mut out = text.to_string();
    for (index, raw) in verbatim.iter().enumerate().rev() {
        out = out.replace(&inclusion_placeholder(index), raw);
    }
    out
}
