//! Map every original lead onto its canonical record.

use std::collections::HashMap;

use leadmerge_types::Lead;
use serde::Serialize;
use tracing::warn;

use crate::diff::{diff_leads, FieldChange};
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::{MatchedBy, Resolution};

/// One original lead, the record it resolved to, and what changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    pub original: Lead,
    pub resolved: Lead,
    pub changes: Vec<FieldChange>,
}

impl ChangeEntry {
    /// Returns `true` if the original already was its canonical record.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// `_id` -> resolved lead, in order of first insertion.
///
/// Inserting an `_id` that is already present replaces its lead but keeps
/// its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedLeads {
    entries: Vec<(String, Lead)>,
    positions: HashMap<String, usize>,
}

impl ResolvedLeads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, lead: Lead) {
        match self.positions.get(&id) {
            Some(&pos) => self.entries[pos].1 = lead,
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, lead));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Lead)> {
        self.entries.iter().map(|(id, lead)| (id.as_str(), lead))
    }
}

/// Result of reconciling the original input against a [`Resolution`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Resolved lead per distinct original `_id`.
    pub resolved: ResolvedLeads,
    /// One entry per original lead, in input order.
    pub changes: Vec<ChangeEntry>,
}

impl Reconciliation {
    /// Number of original leads whose resolved record differs from them.
    pub fn changed_count(&self) -> usize {
        self.changes.iter().filter(|c| !c.is_unchanged()).count()
    }
}

/// Pair each of `originals` with its canonical record and diff them.
///
/// `originals` must be the input `resolution` was built from; a lead with no
/// canonical record yields [`ResolveError::Unresolved`].
pub fn reconcile(originals: &[Lead], resolution: &Resolution) -> ResolveResult<Reconciliation> {
    let mut resolved = ResolvedLeads::new();
    let mut changes = Vec::with_capacity(originals.len());

    for original in originals {
        let (canonical, matched_by) =
            resolution
                .lookup(original)
                .ok_or_else(|| ResolveError::Unresolved {
                    id: original.id().to_string(),
                    email: original.email().to_string(),
                })?;

        if matched_by == MatchedBy::Trail {
            warn!(
                id = %original.id(),
                email = %original.email(),
                resolved_id = %canonical.id(),
                "neither key survived resolution; following the _id winner"
            );
        }

        changes.push(ChangeEntry {
            original: original.clone(),
            resolved: canonical.clone(),
            changes: diff_leads(original, canonical),
        });
        resolved.insert(original.id().to_string(), canonical.clone());
    }

    Ok(Reconciliation { resolved, changes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use crate::testing::{arb_leads, lead};
    use proptest::prelude::*;
    use serde_json::Value;

    #[test]
    fn empty_input_reconciles_to_nothing() {
        let reconciliation = reconcile(&[], &resolve(&[])).unwrap();
        assert!(reconciliation.resolved.is_empty());
        assert!(reconciliation.changes.is_empty());
    }

    #[test]
    fn scenario_maps_every_record_to_the_same_winner() {
        let leads = vec![
            lead("1", "a@x.com", "A", "2020-01-01T00:00:00Z"),
            lead("1", "a2@x.com", "A2", "2020-02-01T00:00:00Z"),
            lead("2", "a2@x.com", "B", "2020-01-15T00:00:00Z"),
        ];
        let reconciliation = reconcile(&leads, &resolve(&leads)).unwrap();

        assert_eq!(reconciliation.changes.len(), 3);
        for entry in &reconciliation.changes {
            assert_eq!(entry.resolved, leads[1]);
        }
        assert!(reconciliation.changes[1].is_unchanged());
        assert_eq!(reconciliation.changed_count(), 2);

        let fields: Vec<_> = reconciliation.changes[2]
            .changes
            .iter()
            .map(|c| c.field.as_str())
            .collect();
        assert_eq!(fields, vec!["_id", "firstName", "entryDate"]);

        let ids: Vec<_> = reconciliation.resolved.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn unresolved_lead_is_an_error() {
        let resolution = resolve(&[lead("1", "a@x.com", "A", "2020-01-01T00:00:00Z")]);
        let stranger = lead("9", "z@x.com", "Z", "2020-01-01T00:00:00Z");
        let err = reconcile(&[stranger], &resolution).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Unresolved {
                id: "9".into(),
                email: "z@x.com".into()
            }
        );
    }

    #[test]
    fn resolved_leads_keep_first_position_on_overwrite() {
        let mut resolved = ResolvedLeads::new();
        resolved.insert("a".into(), lead("a", "1@x.com", "One", "2020-01-01T00:00:00Z"));
        resolved.insert("b".into(), lead("b", "2@x.com", "Two", "2020-01-01T00:00:00Z"));
        resolved.insert("a".into(), lead("a", "3@x.com", "Three", "2020-01-01T00:00:00Z"));

        assert_eq!(resolved.len(), 2);
        let order: Vec<_> = resolved
            .iter()
            .map(|(id, l)| (id, l.field("firstName").and_then(Value::as_str)))
            .collect();
        assert_eq!(order, vec![("a", Some("Three")), ("b", Some("Two"))]);
    }

    proptest! {
        #[test]
        fn one_change_entry_per_original(leads in arb_leads()) {
            let reconciliation = reconcile(&leads, &resolve(&leads)).unwrap();
            prop_assert_eq!(reconciliation.changes.len(), leads.len());
            for (entry, original) in reconciliation.changes.iter().zip(&leads) {
                prop_assert_eq!(&entry.original, original);
            }
        }

        #[test]
        fn diff_lists_exactly_the_differing_fields(leads in arb_leads()) {
            let reconciliation = reconcile(&leads, &resolve(&leads)).unwrap();
            for entry in &reconciliation.changes {
                let expected: Vec<&str> = entry
                    .original
                    .field_names()
                    .filter(|name| entry.original.field(name) != entry.resolved.field(name))
                    .collect();
                let reported: Vec<&str> = entry.changes.iter().map(|c| c.field.as_str()).collect();
                prop_assert_eq!(reported, expected);
            }
        }

        #[test]
        fn resolved_records_are_canonical(leads in arb_leads()) {
            let resolution = resolve(&leads);
            let reconciliation = reconcile(&leads, &resolution).unwrap();
            for (_, lead) in reconciliation.resolved.iter() {
                prop_assert!(resolution.canonical().contains(lead));
            }
        }
    }
}
