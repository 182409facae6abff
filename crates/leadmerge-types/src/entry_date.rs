use std::fmt;

use serde::{Deserialize, Serialize};

/// Timestamp of a lead submission, kept as the raw ISO-8601 string.
///
/// Ordering is byte-wise over the raw string. Timestamps written in one
/// consistent ISO-8601 layout (same offset, same precision) therefore sort
/// chronologically without being parsed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    /// Wrap a raw timestamp string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw timestamp string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryDate({})", self.0)
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
