//! Per-schema object privileges

use std::str::FromStr;

use crate::util::eq_ci;

/// Object permissions tracked per schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    Select,
    Insert,
    Update,
    Delete,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::Select,
        Permission::Insert,
        Permission::Update,
        Permission::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Select => "SELECT",
            Permission::Insert => "INSERT",
            Permission::Update => "UPDATE",
            Permission::Delete => "DELETE",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Permission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| eq_ci(p.as_str(), s))
            .ok_or(())
    }
}

/// State of a single permission for one schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrivilegeState {
    /// Never mentioned by a GRANT or REVOKE
    #[default]
    Ungranted,
    Granted,
    Revoked,
}

/// Permission states for one grantee schema on one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrivilegeSet {
    states: [PrivilegeState; 4],
}

impl PrivilegeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `permission` granted; unknown permissions are ignored
    pub fn grant(&mut self, permission: &str) {
        self.set(permission, PrivilegeState::Granted);
    }

    /// Mark `permission` revoked; unknown permissions are ignored
    pub fn revoke(&mut self, permission: &str) {
        self.set(permission, PrivilegeState::Revoked);
    }

    pub fn get(&self, permission: Permission) -> PrivilegeState {
        self.states[permission.index()]
    }

    /// Iterate all permissions with their current state
    pub fn iter(&self) -> impl Iterator<Item = (Permission, PrivilegeState)> + '_ {
        Permission::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    fn set(&mut self, permission: &str, state: PrivilegeState) {
        if let Ok(p) = permission.parse::<Permission>() {
            self.states[p.index()] = state;
        }
    }
}
