//! Batch orchestration: companies × employees → accounts + statistics.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use staffgate_classify::{classify_role, derive_permissions};
use staffgate_core::{AccountId, CompanyId, DomainError, Role};
use staffgate_directory::{resolve_branch, CompanyProfile, EmployeeRecord};

use crate::account::{account_email, UserAccount, DEFAULT_INITIAL_PASSWORD};
use crate::username::{generate_username, UsernamePolicy, UsernameRegistry};

/// Provisioning failure.
///
/// Only configuration defects are fatal. Malformed rows, missing titles and
/// unmatched departments degrade gracefully (skip, default role, main-branch
/// fallback) and never surface here.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("company configuration rejected: {0}")]
    InvalidCompany(#[from] DomainError),
}

/// Options for one provisioning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionOptions {
    pub username_policy: UsernamePolicy,
}

/// Aggregate statistics for one provisioning run.
///
/// Skipped placeholder rows are counted separately and excluded from every
/// other figure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionStats {
    pub total_accounts: usize,
    pub skipped_rows: usize,
    pub by_role: BTreeMap<Role, usize>,
    pub by_company: BTreeMap<CompanyId, usize>,
}

/// Result of a provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    pub accounts: Vec<UserAccount>,
    pub stats: ProvisionStats,
}

/// Provision login accounts for every employee of every company.
///
/// Every company profile is validated before any employee is processed: a
/// company without a main branch makes the whole run refuse up front rather
/// than silently defaulting. Per employee the pipeline is: skip placeholder
/// rows → classify role → resolve branch → derive permissions (administrative
/// only) → generate a unique username → assemble the account.
///
/// No I/O happens here; exporting credentials is the caller's concern.
pub fn provision(
    companies: &[CompanyProfile],
    employees_by_company: &HashMap<CompanyId, Vec<EmployeeRecord>>,
    options: ProvisionOptions,
) -> Result<ProvisionOutcome, ProvisionError> {
    // Fail fast on configuration defects before touching any employee.
    for company in companies {
        company.validate()?;
    }

    let mut registry = UsernameRegistry::new();
    let mut accounts = Vec::new();
    let mut stats = ProvisionStats::default();
    let created_at = Utc::now();

    for company in companies {
        let Some(employees) = employees_by_company.get(&company.id) else {
            continue;
        };
        info!(company = %company.id, rows = employees.len(), "provisioning company");

        for employee in employees {
            if !employee.is_provisionable() {
                warn!(company = %company.id, name = %employee.name, "skipping placeholder row");
                stats.skipped_rows += 1;
                continue;
            }

            let role = classify_role(&employee.job_title);
            let branch = resolve_branch(employee, company)?;
            let permissions =
                derive_permissions(role, &employee.job_title, employee.department.as_deref());
            let username =
                generate_username(employee, company, options.username_policy, &mut registry);
            let email = account_email(&username, company);

            accounts.push(UserAccount {
                id: AccountId::new(),
                employee_id: employee.id.clone(),
                username,
                initial_password: DEFAULT_INITIAL_PASSWORD.to_string(),
                email,
                role,
                company_id: company.id.clone(),
                branch_id: branch.id.clone(),
                permissions,
                is_active: employee.is_active(),
                must_change_password: true,
                created_at,
            });

            *stats.by_role.entry(role).or_insert(0) += 1;
            *stats.by_company.entry(company.id.clone()).or_insert(0) += 1;
            stats.total_accounts += 1;
        }
    }

    info!(
        total = stats.total_accounts,
        skipped = stats.skipped_rows,
        "provisioning run complete"
    );

    Ok(ProvisionOutcome { accounts, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffgate_core::{BranchId, EmployeeId};
    use staffgate_directory::{BranchDef, EmployeeStatus};

    fn branch(id: &str, keywords: &[&str]) -> BranchDef {
        BranchDef {
            id: BranchId::new(id),
            name: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn company(id: &str, code: &str, branches: Vec<BranchDef>) -> CompanyProfile {
        CompanyProfile {
            id: CompanyId::new(id),
            name: id.to_string(),
            username_prefix_code: code.to_string(),
            email_domain: None,
            branches,
        }
    }

    fn employee(id: &str, name: &str, title: &str, company_id: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: EmployeeId::new(id),
            name: name.to_string(),
            job_title: title.to_string(),
            department: None,
            nationality: None,
            civil_id: None,
            phone: None,
            status: EmployeeStatus::Active,
            company_id: CompanyId::new(company_id),
        }
    }

    fn roster(
        company_id: &str,
        employees: Vec<EmployeeRecord>,
    ) -> HashMap<CompanyId, Vec<EmployeeRecord>> {
        HashMap::from([(CompanyId::new(company_id), employees)])
    }

    #[test]
    fn company_without_main_branch_refuses_the_run() {
        let companies = vec![company("c1", "C1", vec![branch("west", &["جليب"])])];
        let employees = roster("c1", vec![employee("1", "محمد", "", "c1")]);

        let err = provision(&companies, &employees, ProvisionOptions::default()).unwrap_err();
        assert!(matches!(err, ProvisionError::InvalidCompany(_)));
    }

    #[test]
    fn placeholder_rows_are_skipped_and_counted_separately() {
        let companies = vec![company("c1", "C1", vec![branch("main", &[])])];
        let employees = roster(
            "c1",
            vec![
                employee("1", "الاسم", "محاسب", "c1"),
                employee("2", "محمد", "محاسب", "c1"),
                employee("3", "  ", "", "c1"),
            ],
        );

        let outcome = provision(&companies, &employees, ProvisionOptions::default()).unwrap();
        assert_eq!(outcome.accounts.len(), 1);
        assert_eq!(outcome.stats.total_accounts, 1);
        assert_eq!(outcome.stats.skipped_rows, 2);
    }

    #[test]
    fn only_administrative_accounts_carry_a_matrix() {
        let companies = vec![company("c1", "C1", vec![branch("main", &[])])];
        let employees = roster(
            "c1",
            vec![
                employee("1", "أحمد", "محاسب", "c1"),
                employee("2", "سالم", "سائق", "c1"),
                employee("3", "جاسم", "مدير عام", "c1"),
            ],
        );

        let outcome = provision(&companies, &employees, ProvisionOptions::default()).unwrap();
        for account in &outcome.accounts {
            assert_eq!(
                account.permissions.is_some(),
                account.role == Role::AdministrativeEmployee,
                "matrix presence must track the administrative role"
            );
        }
    }

    #[test]
    fn inactive_employees_get_inactive_accounts() {
        let companies = vec![company("c1", "C1", vec![branch("main", &[])])];
        let mut inactive = employee("1", "أحمد", "", "c1");
        inactive.status = EmployeeStatus::Inactive;
        let employees = roster("c1", vec![inactive, employee("2", "سالم", "", "c1")]);

        let outcome = provision(&companies, &employees, ProvisionOptions::default()).unwrap();
        assert!(!outcome.accounts[0].is_active);
        assert!(outcome.accounts[1].is_active);
    }

    #[test]
    fn accounts_carry_fixed_password_and_forced_change() {
        let companies = vec![company("c1", "C1", vec![branch("main", &[])])];
        let employees = roster("c1", vec![employee("1", "أحمد", "", "c1")]);

        let outcome = provision(&companies, &employees, ProvisionOptions::default()).unwrap();
        let account = &outcome.accounts[0];
        assert_eq!(account.initial_password, DEFAULT_INITIAL_PASSWORD);
        assert!(account.must_change_password);
        assert_eq!(account.email, format!("{}@c1.local", account.username));
    }

    #[test]
    fn stats_count_roles_and_companies() {
        let companies = vec![
            company("c1", "C1", vec![branch("main", &[])]),
            company("c2", "C2", vec![branch("main", &[])]),
        ];
        let mut employees = roster(
            "c1",
            vec![
                employee("1", "أحمد", "محاسب", "c1"),
                employee("2", "سالم", "مشرف", "c1"),
            ],
        );
        employees.insert(
            CompanyId::new("c2"),
            vec![employee("3", "جاسم", "", "c2")],
        );

        let outcome = provision(&companies, &employees, ProvisionOptions::default()).unwrap();
        assert_eq!(outcome.stats.total_accounts, 3);
        assert_eq!(
            outcome.stats.by_role.get(&Role::AdministrativeEmployee),
            Some(&1)
        );
        assert_eq!(outcome.stats.by_role.get(&Role::Supervisor), Some(&1));
        assert_eq!(outcome.stats.by_role.get(&Role::Worker), Some(&1));
        assert_eq!(outcome.stats.by_company.get(&CompanyId::new("c1")), Some(&2));
        assert_eq!(outcome.stats.by_company.get(&CompanyId::new("c2")), Some(&1));
    }

    #[test]
    fn company_with_no_roster_is_ignored() {
        let companies = vec![
            company("c1", "C1", vec![branch("main", &[])]),
            company("c2", "C2", vec![branch("main", &[])]),
        ];
        let employees = roster("c1", vec![employee("1", "أحمد", "", "c1")]);

        let outcome = provision(&companies, &employees, ProvisionOptions::default()).unwrap();
        assert_eq!(outcome.stats.total_accounts, 1);
        assert!(!outcome.stats.by_company.contains_key(&CompanyId::new("c2")));
    }
}
