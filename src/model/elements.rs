//! Schema model element types

use std::collections::BTreeMap;

use super::privileges::PrivilegeSet;
use crate::util::strip_quotes;

/// Kind of a schema object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Table,
    View,
}

impl ObjectKind {
    /// Human-readable label (e.g., "Table")
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Table => "Table",
            ObjectKind::View => "View",
        }
    }

    /// Keyword used in `COMMENT ON` banners (e.g., "TABLE")
    pub fn keyword(&self) -> &'static str {
        match self {
            ObjectKind::Table => "TABLE",
            ObjectKind::View => "VIEW",
        }
    }
}

/// A column of a table or view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, never surrounded by double quotes
    pub name: String,
    /// Declared type (e.g., "VARCHAR2(50)"); empty for view columns
    pub data_type: String,
    pub nullable: bool,
    /// Raw DEFAULT token, if any
    pub default: Option<String>,
    pub description: Option<String>,
    /// Raw SELECT-list expression that produced a view column
    pub value: Option<String>,
}

impl Column {
    /// Create a table column from its declaration parts
    pub fn table_column(
        name: &str,
        data_type: &str,
        nullable: bool,
        default: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: strip_quotes(name),
            data_type: data_type.to_string(),
            nullable,
            default,
            description,
            value: None,
        }
    }

    /// Create a view column from its alias and the expression it selects
    pub fn view_column(alias: &str, expression: &str) -> Self {
        Self {
            name: strip_quotes(alias),
            data_type: String::new(),
            nullable: true,
            default: None,
            description: None,
            value: Some(expression.to_string()),
        }
    }

    /// Rename the column, keeping the no-double-quotes invariant
    pub fn rename(&mut self, name: &str) {
        self.name = strip_quotes(name);
    }
}

/// A table or a view (the part both kinds share)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaObject {
    /// Object name with double quotes removed (may keep a `schema.` prefix)
    pub name: String,
    pub description: Option<String>,
    /// The exact source text the statement recognizer matched
    pub raw_text: String,
    pub kind: ObjectKind,
    /// Columns in declaration order; duplicates are kept
    pub columns: Vec<Column>,
    /// Privileges keyed by grantee schema
    pub privileges: BTreeMap<String, PrivilegeSet>,
}

impl SchemaObject {
    pub fn new(kind: ObjectKind, name: &str, description: Option<String>, raw_text: &str) -> Self {
        Self {
            name: strip_quotes(name),
            description,
            raw_text: raw_text.to_string(),
            kind,
            columns: Vec::new(),
            privileges: BTreeMap::new(),
        }
    }

    pub fn add_column(&mut self, column: Column) -> &mut Column {
        self.columns.push(column);
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    /// True when the only column is the unexpanded `*` of a `SELECT *`
    pub fn is_wildcard_only(&self) -> bool {
        self.columns.len() == 1 && self.columns[0].name == "*"
    }

    /// Columns that should be rendered (none for an unexpanded wildcard)
    pub fn visible_columns(&self) -> &[Column] {
        if self.is_wildcard_only() {
            &[]
        } else {
            &self.columns
        }
    }

    /// Grant `permission` to `schema`; unknown permissions are ignored
    pub fn grant(&mut self, schema: &str, permission: &str) {
        self.privileges
            .entry(schema.to_string())
            .or_default()
            .grant(permission);
    }

    /// Revoke `permission` from `schema`; unknown permissions are ignored
    pub fn revoke(&mut self, schema: &str, permission: &str) {
        self.privileges
            .entry(schema.to_string())
            .or_default()
            .revoke(permission);
    }
}

impl std::fmt::Display for SchemaObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.name)
    }
}

/// A view: a schema object plus its FROM sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub object: SchemaObject,
    /// Raw FROM-clause fragments, each optionally `reference alias`
    pub sources: Vec<String>,
    /// The outer SELECT is followed by UNION [ALL]
    pub is_union: bool,
    /// Index into `SchemaModel::verbatim` holding this view's raw text
    pub verbatim_index: Option<usize>,
}

impl View {
    pub fn new(name: &str, description: Option<String>, raw_text: &str) -> Self {
        Self {
            object: SchemaObject::new(ObjectKind::View, name, description, raw_text),
            sources: Vec::new(),
            is_union: false,
            verbatim_index: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.object.name
    }
}
