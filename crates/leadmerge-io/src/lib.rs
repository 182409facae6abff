//! File I/O for leadmerge.
//!
//! Reads the input lead document, reassembles resolved leads into the output
//! document, and renders the change log. All resolution logic lives in
//! `leadmerge-resolve`; this crate only moves data between files and memory.
//!
//! # Key Types
//!
//! - [`LeadsDocument`] -- The `{"leads": [...]}` wire document
//! - [`IoConfig`] / [`LogFormat`] -- Output locations and change log layout
//! - [`IoError`] -- Fatal input/output failures
//!
//! # Writing
//!
//! [`write_artifacts`] renders the change log and the output document in
//! memory first, so serialization errors never leave a partial run on disk.
//! The log is written before the document; when the document write fails the
//! log is removed again. A crash between the two writes can still leave the
//! log behind.

pub mod change_log;
pub mod config;
pub mod document;
pub mod error;
pub mod reader;
pub mod writer;

pub use change_log::{render_change_log, to_spaced_json, LOG_SEPARATOR};
pub use config::{IoConfig, LogFormat};
pub use document::{assemble, LeadsDocument};
pub use error::{IoError, IoResult};
pub use reader::{parse_leads, read_leads};
pub use writer::{render_document, write_artifacts};
