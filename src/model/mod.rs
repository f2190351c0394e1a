//! Schema model: tables, views, columns and privileges

mod builder;
mod database_model;
mod elements;
mod privileges;

pub use builder::build_model;
pub use database_model::SchemaModel;
pub use elements::*;
pub use privileges::{Permission, PrivilegeSet, PrivilegeState};
