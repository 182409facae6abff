use std::fmt;

/// One of the two independent unique keys of a lead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadKey {
    /// The `_id` field.
    Id,
    /// The `email` field.
    Email,
}

impl LeadKey {
    /// The JSON field name of this key.
    pub fn field_name(&self) -> &'static str {
        match self {
            LeadKey::Id => "_id",
            LeadKey::Email => "email",
        }
    }
}

impl fmt::Display for LeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_field_name() {
        assert_eq!(LeadKey::Id.to_string(), "_id");
        assert_eq!(LeadKey::Email.to_string(), "email");
    }
}
