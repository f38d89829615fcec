//! Per-employee permission matrix for administrative employees.

use serde::{Deserialize, Serialize};

use staffgate_core::{Role, ValueObject};

/// Capability matrix over fixed business domains.
///
/// Only administrative employees carry one; for every other role the matrix
/// is absent, and absence means "no overrides possible" — which is not the
/// same thing as an all-false matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    pub hr: bool,
    pub accounting: bool,
    pub inventory: bool,
    pub reports: bool,
    pub purchases: bool,
    pub government_forms: bool,
}

impl ValueObject for PermissionMatrix {}

/// Derive the permission matrix for an administrative employee.
///
/// Returns `None` for every other role. Flags are additive — one title can
/// light up several domains. The generic catch-all runs last and only when no
/// specific rule granted accounting or purchasing, so every administrative
/// employee ends up with a sensible non-empty default.
pub fn derive_permissions(
    role: Role,
    job_title: &str,
    department: Option<&str>,
) -> Option<PermissionMatrix> {
    if role != Role::AdministrativeEmployee {
        return None;
    }

    let title = job_title.trim().to_lowercase();
    let department = department.unwrap_or("").trim().to_lowercase();
    let mut matrix = PermissionMatrix::default();

    if title.contains("محاسب") {
        matrix.accounting = true;
        // Accountants also read the financial reports they feed.
        matrix.reports = true;
    }

    if title.contains("مشتريات") {
        matrix.purchases = true;
        matrix.inventory = true;
    }

    if title.contains("معرض") || title.contains("مبيعات") {
        matrix.reports = true;
    }

    // Warehouse departments grant inventory regardless of title.
    if department.contains("مخزن") || department.contains("مخازن") {
        matrix.inventory = true;
    }

    let generic_title =
        title.contains("مسئول") || title.contains("مسؤول") || title.contains("موظف");
    if generic_title && !matrix.accounting && !matrix.purchases {
        matrix.hr = true;
        matrix.reports = true;
        matrix.government_forms = true;
    }

    Some(matrix)
}
