//! Duplicate resolution for leadmerge.
//!
//! Picks one canonical lead per `_id` and per `email` cluster, then maps
//! every original lead onto its canonical record and records the field-level
//! differences between the two.
//!
//! # Key Types
//!
//! - [`Resolution`] -- Canonical set plus `_id`/`email` indexes (see [`resolve`])
//! - [`Candidate`] -- A lead tagged with its input position
//! - [`Reconciliation`] / [`ChangeEntry`] -- Per-record mapping and change log
//! - [`FieldChange`] -- One differing field between original and resolved lead
//!
//! # Precedence
//!
//! Resolution runs by `_id` first and by `email` second. When one email is
//! shared by two leads with different `_id`s, the `email` pass keeps only the
//! more recent one and the other entity's identity is dropped. This order is
//! deliberate and is part of the tool's contract.

pub mod diff;
pub mod error;
pub mod reconciler;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use diff::{diff_leads, FieldChange};
pub use error::{ResolveError, ResolveResult};
pub use reconciler::{reconcile, ChangeEntry, Reconciliation, ResolvedLeads};
pub use resolver::{resolve, resolve_by, Candidate, MatchedBy, Resolution, ResolveStats};
