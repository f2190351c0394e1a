//! Per-column pattern rendering
//!
//! A pattern is plain text with `{slot}` placeholders, rendered once per
//! column and concatenated. Slots nobody provides are left in place.

use std::collections::HashMap;

use crate::model::{Column, SchemaObject};

/// Slot name -> rendered text
pub type Slots = HashMap<&'static str, String>;

/// Caller-supplied slot mapping that replaces [`default_slots`] entirely
pub type ColumnFormatter<'a> = &'a dyn Fn(&Column) -> Slots;

/// The built-in slots: `name`, `type`, `nullable`, `notnull`, `default`, `value`, `desc`
pub fn default_slots(column: &Column) -> Slots {
    let mut slots = Slots::new();
    slots.insert("name", column.name.clone());
    slots.insert("type", column.data_type.clone());
    slots.insert("nullable", column.nullable.to_string());
    slots.insert(
        "notnull",
        if column.nullable { "" } else { " not null" }.to_string(),
    );
    slots.insert("default", column.default.clone().unwrap_or_default());
    slots.insert("value", column.value.clone().unwrap_or_default());
    slots.insert("desc", column.description.clone().unwrap_or_default());
    slots
}

/// Render every column of `object` through `pattern`.
///
/// An object whose only column is the unexpanded `*` renders as "".
pub fn render_columns(
    object: &SchemaObject,
    pattern: &str,
    formatter: Option<ColumnFormatter<'_>>,
) -> String {
    object
        .visible_columns()
        .iter()
        .map(|column| {
            let slots = match formatter {
                Some(format) => format(column),
                None => default_slots(column),
            };
            fill_pattern(pattern, &slots)
        })
        .collect()
}

/// Substitute `{slot}` placeholders in `pattern`
pub fn fill_pattern(pattern: &str, slots: &Slots) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match slots.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
