//! Role→permission tables.
//!
//! Each tier is defined as additions on top of the previous one, so the
//! containment invariant (everything a lower role holds, a higher role holds
//! too) is true by construction and re-checked in tests.

use staffgate_core::Role;

use crate::Permission;

const WORKER_GRANTS: &[&str] = &["profile:view", "attendance:view", "documents:view"];

const SUPERVISOR_ADDITIONS: &[&str] = &["employees:view", "attendance:manage", "reports:view"];

const ADMINISTRATIVE_ADDITIONS: &[&str] = &[
    "employees:manage",
    "documents:manage",
    "payroll:view",
    "inventory:view",
    "forms:manage",
];

const COMPANY_MANAGER_ADDITIONS: &[&str] =
    &["payroll:manage", "reports:manage", "settings:manage"];

const SUPER_ADMIN_ADDITIONS: &[&str] = &["companies:manage", "accounts:manage"];

/// Tier additions, ascending by hierarchy level.
const TIERS: [&[&str]; 5] = [
    WORKER_GRANTS,
    SUPERVISOR_ADDITIONS,
    ADMINISTRATIVE_ADDITIONS,
    COMPANY_MANAGER_ADDITIONS,
    SUPER_ADMIN_ADDITIONS,
];

/// Permission strings granted to a role, lowest tier first.
pub fn permissions_for(role: Role) -> Vec<Permission> {
    TIERS[..role.level() as usize]
        .iter()
        .flat_map(|tier| tier.iter())
        .map(|name| Permission::new(*name))
        .collect()
}

/// Whether the role's grant set contains the permission.
pub fn has_permission(role: Role, permission: &Permission) -> bool {
    TIERS[..role.level() as usize]
        .iter()
        .flat_map(|tier| tier.iter())
        .any(|name| *name == permission.as_str())
}
