//! `staffgate-classify` — deterministic role and permission derivation.
//!
//! Both entry points are pure functions over free-text job titles: no I/O,
//! no hidden state, no randomness. Matching is keyword containment, not NLP.

pub mod classifier;
pub mod matrix;

pub use classifier::classify_role;
pub use matrix::{derive_permissions, PermissionMatrix};
