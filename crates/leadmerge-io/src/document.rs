use std::collections::HashSet;

use leadmerge_resolve::ResolvedLeads;
use leadmerge_types::Lead;
use serde::{Deserialize, Serialize};

/// The `{"leads": [...]}` document used for both input and output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadsDocument {
    pub leads: Vec<Lead>,
}

impl LeadsDocument {
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

/// Rebuild the output document from the resolved `_id` mapping.
///
/// Leads appear in order of first appearance of their original `_id`.
/// Several original `_id`s can resolve to the same canonical record; that
/// record is emitted once. Every lead is restricted to the canonical fields.
pub fn assemble(resolved: &ResolvedLeads) -> LeadsDocument {
    let mut emitted: HashSet<&str> = HashSet::with_capacity(resolved.len());
    let mut leads = Vec::new();
    for (_, lead) in resolved.iter() {
        if emitted.insert(lead.id()) {
            leads.push(lead.canonical());
        }
    }
    LeadsDocument { leads }
}
