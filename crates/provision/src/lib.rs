//! `staffgate-provision` — batch account provisioning.
//!
//! Orchestrates classification, branch resolution, permission derivation and
//! username generation over (company, employee) batches to produce the
//! `UserAccount` set plus run statistics. Entirely synchronous and free of
//! I/O; persistence and export are the caller's concern.

pub mod account;
pub mod provisioner;
pub mod username;

pub use account::{account_email, UserAccount, DEFAULT_INITIAL_PASSWORD};
pub use provisioner::{
    provision, ProvisionError, ProvisionOptions, ProvisionOutcome, ProvisionStats,
};
pub use username::{generate_username, transliterate, UsernamePolicy, UsernameRegistry};
