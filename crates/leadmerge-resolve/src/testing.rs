use leadmerge_types::Lead;
use proptest::prelude::*;

pub(crate) fn lead(id: &str, email: &str, first: &str, date: &str) -> Lead {
    Lead::new(id, email, first, "X", "1 St", date)
}

/// Leads drawn from small key and date pools so collisions are frequent.
pub(crate) fn arb_leads() -> impl Strategy<Value = Vec<Lead>> {
    let one = (0u8..5, 0u8..5, 0u8..4, "[A-C]", "[1-3] St").prop_map(
        |(id, email, day, first, address)| {
            Lead::new(
                format!("id{id}"),
                format!("u{email}@x.com"),
                first,
                "X",
                address,
                format!("2020-01-0{}T00:00:00Z", day + 1),
            )
        },
    );
    proptest::collection::vec(one, 0..24)
}

/// `lead` with one more field appended after the canonical ones.
pub(crate) fn with_extra(lead: Lead, name: &str, value: serde_json::Value) -> Lead {
    let mut fields = serde_json::Map::from(lead);
    fields.insert(name.to_string(), value);
    Lead::from_fields(fields).unwrap()
}
