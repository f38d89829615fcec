//! Page gating requirements consumed by UI route guards.

use crate::policy::permissions_for;
use staffgate_core::Role;

/// One page and the permissions that unlock it (ANY-of semantics).
pub struct PageRequirement {
    pub page: &'static str,
    pub any_of: &'static [&'static str],
}

/// Page→requirement table.
pub const PAGE_REQUIREMENTS: &[PageRequirement] = &[
    PageRequirement { page: "dashboard", any_of: &["profile:view"] },
    PageRequirement { page: "attendance", any_of: &["attendance:view"] },
    PageRequirement { page: "documents", any_of: &["documents:view"] },
    PageRequirement { page: "employees", any_of: &["employees:view"] },
    PageRequirement { page: "payroll", any_of: &["payroll:view"] },
    PageRequirement { page: "reports", any_of: &["reports:view"] },
    PageRequirement { page: "inventory", any_of: &["inventory:view"] },
    PageRequirement { page: "forms", any_of: &["forms:manage"] },
    PageRequirement { page: "settings", any_of: &["settings:manage"] },
    PageRequirement { page: "accounts", any_of: &["accounts:manage"] },
];

/// Permissions that unlock a page; empty for unknown page ids (never errors).
pub fn required_permissions_for_page(page: &str) -> &'static [&'static str] {
    PAGE_REQUIREMENTS
        .iter()
        .find(|req| req.page == page)
        .map(|req| req.any_of)
        .unwrap_or(&[])
}

/// All pages whose requirement is satisfied by the role's grants.
pub fn accessible_pages_for(role: Role) -> Vec<&'static str> {
    let grants = permissions_for(role);
    PAGE_REQUIREMENTS
        .iter()
        .filter(|req| {
            req.any_of
                .iter()
                .any(|needed| grants.iter().any(|g| g.as_str() == *needed))
        })
        .map(|req| req.page)
        .collect()
}

/// Whether the role may open the page. Unknown pages are never accessible.
pub fn can_access_page(role: Role, page: &str) -> bool {
    let required = required_permissions_for_page(page);
    !required.is_empty()
        && required
            .iter()
            .any(|needed| permissions_for(role).iter().any(|g| g.as_str() == *needed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_sees_attendance_and_documents_but_not_settings() {
        let pages = accessible_pages_for(Role::Worker);
        assert!(pages.contains(&"attendance"));
        assert!(pages.contains(&"documents"));
        assert!(pages.contains(&"dashboard"));
        assert!(!pages.contains(&"settings"));
        assert!(!pages.contains(&"employees"));
    }

    #[test]
    fn accessible_pages_grow_with_the_hierarchy() {
        let mut previous = 0;
        for role in Role::ALL {
            let count = accessible_pages_for(role).len();
            assert!(count >= previous);
            previous = count;
        }
        assert_eq!(previous, PAGE_REQUIREMENTS.len());
    }

    #[test]
    fn company_manager_reaches_settings_but_not_accounts() {
        assert!(can_access_page(Role::CompanyManager, "settings"));
        assert!(!can_access_page(Role::CompanyManager, "accounts"));
        assert!(can_access_page(Role::SuperAdmin, "accounts"));
    }

    #[test]
    fn unknown_page_returns_empty_requirement_and_no_access() {
        assert!(required_permissions_for_page("nonexistent").is_empty());
        for role in Role::ALL {
            assert!(!can_access_page(role, "nonexistent"));
        }
    }
}
