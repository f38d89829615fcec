//! Provisioned login accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staffgate_classify::PermissionMatrix;
use staffgate_core::{AccountId, BranchId, CompanyId, EmployeeId, Entity, Role};
use staffgate_directory::CompanyProfile;

/// Initial password assigned to every provisioned account. Holders must
/// change it on first login (`must_change_password` is always true at
/// creation).
pub const DEFAULT_INITIAL_PASSWORD: &str = "Hr@2024#Start!";

/// Login account produced by one provisioning run, one per employee record.
///
/// # Invariants
/// - `username` is unique across the whole run.
/// - `permissions` is `Some` iff `role` is `AdministrativeEmployee`.
/// - `must_change_password` is true at creation.
///
/// Created once and never re-derived in place; re-running the pipeline
/// produces a new account set that must be reconciled externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: AccountId,
    pub employee_id: EmployeeId,
    pub username: String,
    pub initial_password: String,
    pub email: String,
    pub role: Role,
    pub company_id: CompanyId,
    pub branch_id: BranchId,
    pub permissions: Option<PermissionMatrix>,
    pub is_active: bool,
    pub must_change_password: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for UserAccount {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Deterministic mail convention: `{username}@{company mail domain}`.
pub fn account_email(username: &str, company: &CompanyProfile) -> String {
    format!("{}@{}", username, company.mail_domain())
}
