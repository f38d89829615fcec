//! `staffgate-authz` — runtime authorization model for the UI layer.
//!
//! Static role→permission and page→requirement tables plus pure query
//! functions. No state, no I/O, no errors: unknown page ids simply grant
//! nothing. Safe for unrestricted concurrent reads.
//!
//! This surface is the only sanctioned way for callers to reason about
//! capabilities; it is independent of the per-employee permission matrix
//! produced at provisioning time.

pub mod pages;
pub mod permission;
pub mod policy;
pub mod profile;

pub use pages::{accessible_pages_for, can_access_page, required_permissions_for_page};
pub use permission::Permission;
pub use policy::{has_permission, permissions_for};
pub use profile::{profile_for, RoleProfile};
