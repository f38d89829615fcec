//! Company profiles and free-text branch routing.

use serde::{Deserialize, Serialize};

use staffgate_core::{BranchId, CompanyId, DomainError, Entity};

use crate::EmployeeRecord;

/// Branch definition with its free-text routing keywords.
///
/// The main branch is the one with an empty keyword set; it is the fallback
/// for departments that match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDef {
    pub id: BranchId,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl BranchDef {
    pub fn is_main(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Case-insensitive containment test against a normalized department.
    fn matches(&self, department_lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| department_lowered.contains(k.to_lowercase().as_str()))
    }
}

impl Entity for BranchDef {
    type Id = BranchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Company profile: login-handle prefix code plus the branch routing table.
///
/// # Invariants
/// - Exactly one branch has an empty keyword set (the main branch).
/// - The username prefix code is non-empty.
///
/// Both are configuration concerns: violations fail at load time via
/// [`CompanyProfile::validate`], never per-employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: CompanyId,
    pub name: String,
    pub username_prefix_code: String,
    /// Explicit mail domain for account emails. When absent, the domain is
    /// derived from the lowercased prefix code (`{code}.local`).
    #[serde(default)]
    pub email_domain: Option<String>,
    pub branches: Vec<BranchDef>,
}

impl CompanyProfile {
    /// Validate the profile at load time.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.username_prefix_code.trim().is_empty() {
            return Err(DomainError::configuration(format!(
                "company {}: empty username prefix code",
                self.id
            )));
        }

        match self.branches.iter().filter(|b| b.is_main()).count() {
            1 => Ok(()),
            0 => Err(DomainError::configuration(format!(
                "company {}: no main branch (a branch with an empty keyword set)",
                self.id
            ))),
            n => Err(DomainError::configuration(format!(
                "company {}: {} main branches, expected exactly one",
                self.id, n
            ))),
        }
    }

    /// The fallback branch. `None` only on an unvalidated profile.
    pub fn main_branch(&self) -> Option<&BranchDef> {
        self.branches.iter().find(|b| b.is_main())
    }

    /// Mail domain convention for provisioned accounts.
    pub fn mail_domain(&self) -> String {
        self.email_domain
            .clone()
            .unwrap_or_else(|| format!("{}.local", self.username_prefix_code.to_lowercase()))
    }
}

impl Entity for CompanyProfile {
    type Id = CompanyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Route an employee to a branch by free-text department matching.
///
/// The first branch whose keyword is contained (case-insensitively) in the
/// employee's department wins; an unmatched or missing department falls back
/// to the main branch. A missing main branch is a configuration defect.
pub fn resolve_branch<'a>(
    employee: &EmployeeRecord,
    company: &'a CompanyProfile,
) -> Result<&'a BranchDef, DomainError> {
    let department = employee
        .department
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    if !department.is_empty() {
        if let Some(branch) = company.branches.iter().find(|b| b.matches(&department)) {
            return Ok(branch);
        }
    }

    company.main_branch().ok_or_else(|| {
        DomainError::configuration(format!(
            "company {}: no main branch (a branch with an empty keyword set)",
            company.id
        ))
    })
}
