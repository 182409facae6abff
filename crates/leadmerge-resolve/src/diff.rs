//! Field-level diff between an original lead and its canonical record.

use std::fmt;

use leadmerge_types::Lead;
use serde::Serialize;
use serde_json::Value;

/// A field whose value differs between the original and resolved lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: String,
    pub old: Value,
    pub new: Value,
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "updated column {} from {} to {}",
            self.field,
            DisplayValue(&self.old),
            DisplayValue(&self.new)
        )
    }
}

/// Strings print bare, everything else prints as JSON.
struct DisplayValue<'a>(&'a Value);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Compare every field of `original` against `resolved`.
///
/// Fields are visited in `original`'s field order. A field missing from
/// `resolved` compares as `null`.
pub fn diff_leads(original: &Lead, resolved: &Lead) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for name in original.field_names() {
        let old = original.field(name).cloned().unwrap_or(Value::Null);
        let new = resolved.field(name).cloned().unwrap_or(Value::Null);
        if old != new {
            changes.push(FieldChange {
                field: name.to_string(),
                old,
                new,
            });
        }
    }

    changes
}
