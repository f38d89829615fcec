//! Human-facing role profiles for UI display.

use serde::Serialize;

use staffgate_core::{Role, ValueObject};

/// Label, description and hierarchy level for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub level: u8,
}

impl ValueObject for RoleProfile {}

/// Static profile table lookup. Total over the role enum, never fails.
pub fn profile_for(role: Role) -> RoleProfile {
    let (label, description) = match role {
        Role::Worker => ("Worker", "Field or production staff with self-service access"),
        Role::Supervisor => ("Supervisor", "Oversees workers; manages attendance and views reports"),
        Role::AdministrativeEmployee => (
            "Administrative employee",
            "Office staff; access is refined by a per-person permission matrix",
        ),
        Role::CompanyManager => (
            "Company manager",
            "Runs one company; full operational access including settings",
        ),
        Role::SuperAdmin => (
            "Platform administrator",
            "Platform-level operator; manages companies and login accounts",
        ),
    };

    RoleProfile {
        role,
        label,
        description,
        level: role.level(),
    }
}
