//! Role classification from free-text job titles.

use staffgate_core::Role;

/// One classification rule: any keyword hit assigns the role.
struct TitleRule {
    role: Role,
    keywords: &'static [&'static str],
}

/// Ordered rule table, highest tier first.
///
/// Evaluation is first-match-wins: a title hitting keywords from two tiers
/// resolves to the higher tier by the fixed order below, not by the most
/// specific match. New roles/keywords are additive edits to this table.
const TITLE_RULES: &[TitleRule] = &[
    TitleRule {
        role: Role::CompanyManager,
        keywords: &["شريك", "مدير عام", "رئيس"],
    },
    TitleRule {
        role: Role::AdministrativeEmployee,
        keywords: &[
            "محاسب",
            "مسئول",
            "مسؤول",
            "موظف",
            "كاتب",
            "سكرتير",
            "مدير قسم",
        ],
    },
    TitleRule {
        role: Role::Supervisor,
        keywords: &["مشرف", "رئيس قسم", "مراقب"],
    },
];

/// Classify a free-text job title into an organizational role.
///
/// Case-insensitive substring matching over the ordered rule table; empty or
/// unrecognized titles default to `Worker`. Placeholder rows (header values
/// standing in for names) must be filtered by the caller before
/// classification — they are not this function's concern.
pub fn classify_role(job_title: &str) -> Role {
    let title = job_title.trim().to_lowercase();
    if title.is_empty() {
        return Role::Worker;
    }

    for rule in TITLE_RULES {
        if rule.keywords.iter().any(|k| title.contains(k)) {
            return rule.role;
        }
    }

    Role::Worker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_classifies_as_company_manager() {
        assert_eq!(classify_role("شريك"), Role::CompanyManager);
    }

    #[test]
    fn general_manager_classifies_as_company_manager() {
        assert_eq!(classify_role("مدير عام"), Role::CompanyManager);
    }

    #[test]
    fn accountant_classifies_as_administrative_employee() {
        assert_eq!(classify_role("محاسب عام"), Role::AdministrativeEmployee);
    }

    #[test]
    fn section_manager_classifies_as_administrative_employee() {
        assert_eq!(classify_role("مدير قسم"), Role::AdministrativeEmployee);
    }

    #[test]
    fn foreman_classifies_as_supervisor() {
        assert_eq!(classify_role("مشرف عمال"), Role::Supervisor);
    }

    #[test]
    fn inspector_classifies_as_supervisor() {
        assert_eq!(classify_role("مراقب"), Role::Supervisor);
    }

    #[test]
    fn empty_title_defaults_to_worker() {
        assert_eq!(classify_role(""), Role::Worker);
        assert_eq!(classify_role("   "), Role::Worker);
    }

    #[test]
    fn unrecognized_title_defaults_to_worker() {
        assert_eq!(classify_role("سائق"), Role::Worker);
        assert_eq!(classify_role("عامل"), Role::Worker);
    }

    #[test]
    fn higher_tier_wins_on_cross_tier_hits() {
        // Contains both a manager keyword and an administrative keyword.
        assert_eq!(classify_role("شريك ومحاسب"), Role::CompanyManager);
        // Contains both an administrative and a supervisory keyword.
        assert_eq!(classify_role("موظف مراقب"), Role::AdministrativeEmployee);
    }

    #[test]
    fn classification_is_deterministic() {
        for title in ["شريك", "محاسب", "مشرف", "سائق", ""] {
            assert_eq!(classify_role(title), classify_role(title));
        }
    }
}
