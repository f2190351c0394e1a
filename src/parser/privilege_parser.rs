//! `GRANT` / `REVOKE` object privileges

use super::patterns::PRIVILEGE_RE;
use crate::model::SchemaObject;
use crate::util::{eq_ci, strip_quotes};

/// Whether a privilege statement grants or revokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegeAction {
    Grant,
    Revoke,
}

/// One recognized privilege statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeStatement {
    pub action: PrivilegeAction,
    pub permission: String,
    /// Object name exactly as written
    pub object: String,
    pub schema: String,
}

/// All GRANT/REVOKE statements in `sql`, in source order
pub fn extract_privileges(sql: &str) -> Vec<PrivilegeStatement> {
    PRIVILEGE_RE
        .captures_iter(sql)
        .map(|caps| PrivilegeStatement {
            action: if eq_ci(&caps["action"], "REVOKE") {
                PrivilegeAction::Revoke
            } else {
                PrivilegeAction::Grant
            },
            permission: caps["permission"].to_string(),
            object: caps["tablename"].to_string(),
            schema: caps["schema"].to_string(),
        })
        .collect()
}

/// Apply every GRANT/REVOKE in `sql` that targets `target` (by quote-stripped,
/// case-insensitive name). Statements are applied in source order, so a later
/// REVOKE overrides an earlier GRANT.
pub fn apply_privileges(sql: &str, target: &mut SchemaObject) {
    for stmt in extract_privileges(sql) {
        if !eq_ci(&strip_quotes(&stmt.object), &target.name) {
            continue;
        }
        match stmt.action {
            PrivilegeAction::Grant => target.grant(&stmt.schema, &stmt.permission),
            PrivilegeAction::Revoke => target.revoke(&stmt.schema, &stmt.permission),
        }
    }
}
