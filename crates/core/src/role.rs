//! Organizational role hierarchy.

use serde::{Deserialize, Serialize};

/// Organizational role, in ascending privilege order.
///
/// # Invariants
/// - Every employee record classifies to exactly one of the first four roles.
/// - `SuperAdmin` is platform-level and is never derived from employee data.
///
/// Privilege comparisons go through the numeric hierarchy level, not per-role
/// boolean flags, so adding a role is an additive change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Worker,
    Supervisor,
    AdministrativeEmployee,
    CompanyManager,
    SuperAdmin,
}

impl Role {
    /// All roles, ascending by privilege.
    pub const ALL: [Role; 5] = [
        Role::Worker,
        Role::Supervisor,
        Role::AdministrativeEmployee,
        Role::CompanyManager,
        Role::SuperAdmin,
    ];

    /// Numeric hierarchy level (1 = least privileged).
    pub fn level(&self) -> u8 {
        match self {
            Role::Worker => 1,
            Role::Supervisor => 2,
            Role::AdministrativeEmployee => 3,
            Role::CompanyManager => 4,
            Role::SuperAdmin => 5,
        }
    }

    /// Threshold check: is this role at least as privileged as `other`?
    pub fn is_at_least(&self, other: Role) -> bool {
        self.level() >= other.level()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Supervisor => "supervisor",
            Role::AdministrativeEmployee => "administrative_employee",
            Role::CompanyManager => "company_manager",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
