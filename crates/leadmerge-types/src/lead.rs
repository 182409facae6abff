use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entry_date::EntryDate;
use crate::error::TypeError;
use crate::key::LeadKey;

/// The fixed field set of a lead, in output order.
pub const CANONICAL_FIELDS: [&str; 6] = [
    "_id",
    "email",
    "firstName",
    "lastName",
    "address",
    "entryDate",
];

/// A single lead record.
///
/// The record keeps every field exactly as read, in input order, so it
/// serializes back to the same object. The six canonical fields must be
/// present; their values may be of any JSON type. `_id`, `email` and
/// `entryDate` are additionally held as text for grouping and ordering:
/// strings as-is, anything else as its JSON rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Lead {
    id: String,
    email: String,
    entry_date: EntryDate,
    fields: Map<String, Value>,
}

fn key_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Lead {
    /// Create a lead from string values for the canonical fields.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        entry_date: impl Into<String>,
    ) -> Self {
        let (id, email, entry_date) = (id.into(), email.into(), entry_date.into());
        let values = [
            id.clone(),
            email.clone(),
            first_name.into(),
            last_name.into(),
            address.into(),
            entry_date.clone(),
        ];
        let fields = CANONICAL_FIELDS
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), Value::String(value)))
            .collect();
        Self {
            id,
            email,
            entry_date: EntryDate::new(entry_date),
            fields,
        }
    }

    /// Build a lead from a decoded JSON object.
    ///
    /// Fails only when a canonical field is absent.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, TypeError> {
        if let Some(missing) = CANONICAL_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
            return Err(TypeError::MissingField(missing.to_string()));
        }
        Ok(Self {
            id: key_text(&fields["_id"]),
            email: key_text(&fields["email"]),
            entry_date: EntryDate::new(key_text(&fields["entryDate"])),
            fields,
        })
    }

    /// Decode the `index`-th element of a `leads` array.
    pub fn from_value(index: usize, value: Value) -> Result<Self, TypeError> {
        serde_json::from_value(value).map_err(|e| TypeError::InvalidRecord {
            index,
            reason: e.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn entry_date(&self) -> &EntryDate {
        &self.entry_date
    }

    /// The text of one of the unique keys.
    pub fn key(&self, key: LeadKey) -> &str {
        match key {
            LeadKey::Id => &self.id,
            LeadKey::Email => &self.email,
        }
    }

    /// Look up a field by its JSON name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All field names, in input order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// A copy restricted to the canonical fields, in canonical order.
    pub fn canonical(&self) -> Self {
        let fields = CANONICAL_FIELDS
            .iter()
            .map(|name| (name.to_string(), self.fields[*name].clone()))
            .collect();
        Self {
            fields,
            ..self.clone()
        }
    }
}

impl TryFrom<Map<String, Value>> for Lead {
    type Error = TypeError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<Lead> for Map<String, Value> {
    fn from(lead: Lead) -> Self {
        lead.fields
    }
}
