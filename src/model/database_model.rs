//! Schema model representation

use super::{SchemaObject, View};

/// Everything extracted from one SQL source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
    /// Tables in source order
    pub tables: Vec<SchemaObject>,
    /// Views in source order
    pub views: Vec<View>,
    /// Raw text of UNION views, kept for verbatim re-inclusion.
    /// `View::verbatim_index` points into this list.
    pub verbatim: Vec<String>,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: SchemaObject) {
        self.tables.push(table);
    }

    /// Add a view, queueing its raw text for verbatim inclusion when it is a UNION view
    pub fn add_view(&mut self, mut view: View) {
        if view.is_union {
            view.verbatim_index = Some(self.verbatim.len());
            self.verbatim.push(view.object.raw_text.clone());
        }
        self.views.push(view);
    }

    /// Tables followed by view objects, in source order within each group
    pub fn objects(&self) -> impl Iterator<Item = &SchemaObject> {
        self.tables.iter().chain(self.views.iter().map(|v| &v.object))
    }

    pub fn find_table(&self, name: &str) -> Option<&SchemaObject> {
        self.tables
            .iter()
            .find(|t| crate::util::eq_ci(&t.name, name))
    }

    pub fn find_view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| crate::util::eq_ci(v.name(), name))
    }
}
