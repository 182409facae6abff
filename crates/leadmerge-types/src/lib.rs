//! Foundation types for leadmerge.
//!
//! This crate provides the record and key types shared by the resolver and
//! the I/O layer.
//!
//! # Key Types
//!
//! - [`Lead`] -- A single lead record with the six canonical fields plus extras
//! - [`EntryDate`] -- Sortable ISO-8601 timestamp string used for recency
//! - [`LeadKey`] -- One of the two unique keys (`_id`, `email`)
//! - [`TypeError`] -- Record schema violations

pub mod entry_date;
pub mod error;
pub mod key;
pub mod lead;

pub use entry_date::EntryDate;
pub use error::TypeError;
pub use key::LeadKey;
pub use lead::{Lead, CANONICAL_FIELDS};
