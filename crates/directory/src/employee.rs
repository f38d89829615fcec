//! Raw employee records as ingested from the source dataset.

use serde::{Deserialize, Serialize};

use staffgate_core::{CompanyId, EmployeeId, Entity};

/// Employment status, normalized during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

/// Raw employee record.
///
/// Read once from the source dataset; never mutated. `job_title` and
/// `department` are free text and may be empty or carry stray header values
/// that leaked through spreadsheet ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub civil_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub company_id: CompanyId,
}

impl EmployeeRecord {
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Whether this row is a real employee and not spreadsheet noise.
    ///
    /// Noise rows must be skipped before classification; they are excluded
    /// from all provisioning counts.
    pub fn is_provisionable(&self) -> bool {
        !is_placeholder_name(&self.name)
    }
}

impl Entity for EmployeeRecord {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Header tokens that leak through spreadsheet ingestion as "names".
const PLACEHOLDER_NAMES: &[&str] = &[
    "الاسم",
    "الإسم",
    "اسم الموظف",
    "name",
    "employee name",
    "#",
    "-",
];

/// Detect empty names and known column-header values.
pub fn is_placeholder_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    PLACEHOLDER_NAMES.iter().any(|p| lowered == *p)
}
