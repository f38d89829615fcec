//! `staffgate-directory` — source data model: employees, companies, branches.
//!
//! Records here are read once from spreadsheet ingestion and never mutated.
//! Branch routing is free-text keyword matching; company profiles are
//! validated at load time so per-employee processing never hits a
//! configuration defect.

pub mod company;
pub mod employee;

pub use company::{resolve_branch, BranchDef, CompanyProfile};
pub use employee::{is_placeholder_name, EmployeeRecord, EmployeeStatus};
