//! Login handle generation with run-wide uniqueness.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use staffgate_directory::{CompanyProfile, EmployeeRecord};

/// Username derivation policy, selectable per provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernamePolicy {
    /// `{company code}_{numeric suffix of the employee id}`, lower-cased.
    #[default]
    EmployeeId,
    /// First three transliterated letters of the first and last name plus
    /// the company id, slugified.
    EmployeeName,
}

/// Usernames claimed so far in one provisioning run.
///
/// Threaded explicitly through the generator (never a module-level
/// singleton) so a run is fully parametrizable and testable in isolation.
/// Single-threaded by design; shard-and-merge or a mutex is required before
/// parallelizing across companies.
#[derive(Debug, Clone, Default)]
pub struct UsernameRegistry {
    taken: HashSet<String>,
}

impl UsernameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed with handles issued by an earlier run (e.g. a prior export),
    /// so re-provisioning never reuses them.
    pub fn preseed<I>(handles: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            taken: handles.into_iter().collect(),
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.taken.contains(username)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Claim `base`, resolving collisions with a deterministic incrementing
    /// suffix (`_1`, `_2`, …). The claimed handle is recorded before return.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 0u32;
        while self.taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }
        if suffix > 0 {
            info!(base, resolved = %candidate, "username collision resolved by suffix");
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Generate a unique login handle for an employee.
///
/// Deterministic in `(employee, company, registry state so far)`: the same
/// inputs against an identically primed registry always produce the same
/// handle.
pub fn generate_username(
    employee: &EmployeeRecord,
    company: &CompanyProfile,
    policy: UsernamePolicy,
    registry: &mut UsernameRegistry,
) -> String {
    let base = match policy {
        UsernamePolicy::EmployeeId => id_based(employee, company),
        UsernamePolicy::EmployeeName => name_based(employee, company),
    };
    registry.claim(&base)
}

fn id_based(employee: &EmployeeRecord, company: &CompanyProfile) -> String {
    let id = employee.id.as_str();
    let digits = numeric_suffix(id);
    let tail = if digits.is_empty() { slug(id) } else { digits };
    format!("{}_{}", company.username_prefix_code.to_lowercase(), tail)
}

fn name_based(employee: &EmployeeRecord, company: &CompanyProfile) -> String {
    let mut parts = employee.name.split_whitespace();
    let first = parts.next().unwrap_or("");
    let last = parts.next_back().unwrap_or(first);

    let first3 = take_chars(&transliterate(first), 3);
    let last3 = take_chars(&transliterate(last), 3);

    let stem = if first3.is_empty() && last3.is_empty() {
        // Name transliterated to nothing (all punctuation/diacritics).
        "emp".to_string()
    } else {
        format!("{first3}{last3}")
    };

    format!("{}{}", stem, slug(company.id.as_str()))
}

/// Trailing digit run of an identifier (`"EMP-0042"` → `"0042"`).
fn numeric_suffix(id: &str) -> String {
    let digits: Vec<char> = id
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.into_iter().rev().collect()
}

/// Arabic-to-Latin letter table used for login handles.
const ARABIC_LATIN: &[(char, &str)] = &[
    ('ا', "a"),
    ('أ', "a"),
    ('إ', "a"),
    ('آ', "a"),
    ('ب', "b"),
    ('ت', "t"),
    ('ث', "th"),
    ('ج', "j"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "th"),
    ('ر', "r"),
    ('ز', "z"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "d"),
    ('ط', "t"),
    ('ظ', "z"),
    ('ع', "a"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "q"),
    ('ك', "k"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ه', "h"),
    ('ة', "a"),
    ('و', "w"),
    ('ؤ', "w"),
    ('ي', "y"),
    ('ى', "a"),
    ('ئ', "y"),
];

/// Transliterate a name fragment into a login-safe ASCII slug.
///
/// ASCII alphanumerics pass through lower-cased; Arabic letters map through
/// the table; everything else (diacritics, hamza, punctuation) is dropped.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if let Some((_, latin)) = ARABIC_LATIN.iter().find(|(arabic, _)| *arabic == ch) {
            out.push_str(latin);
        }
    }
    out
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn slug(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
