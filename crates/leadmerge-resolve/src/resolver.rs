//! Canonical record selection.
//!
//! Each pass groups candidates by one unique key and keeps a single winner per
//! group: the latest `entryDate`, ties broken by the later input position.
//! The `_id` pass runs over the full input and the `email` pass runs over the
//! `_id` winners, so the surviving set is unique on both keys.

use std::cmp::Ordering;
use std::collections::HashMap;

use leadmerge_types::{Lead, LeadKey};
use tracing::{debug, info};

/// A lead tagged with its 0-based position in the original input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub seq: usize,
    pub lead: &'a Lead,
}

impl<'a> Candidate<'a> {
    /// Tag every lead with its input position.
    pub fn sequence(leads: &'a [Lead]) -> Vec<Self> {
        leads
            .iter()
            .enumerate()
            .map(|(seq, lead)| Candidate { seq, lead })
            .collect()
    }

    /// Selection order: `entryDate` descending, then `seq` descending.
    /// `Ordering::Less` means `self` wins over `other`.
    pub fn selection_cmp(&self, other: &Self) -> Ordering {
        other
            .lead
            .entry_date()
            .cmp(self.lead.entry_date())
            .then(other.seq.cmp(&self.seq))
    }
}

/// Keep one candidate per distinct value of `key`.
///
/// Survivors are returned in ascending input position.
pub fn resolve_by<'a>(candidates: &[Candidate<'a>], key: LeadKey) -> Vec<Candidate<'a>> {
    let mut winners: HashMap<&'a str, Candidate<'a>> = HashMap::with_capacity(candidates.len());

    for candidate in candidates {
        winners
            .entry(candidate.lead.key(key))
            .and_modify(|current| {
                if candidate.selection_cmp(current) == Ordering::Less {
                    *current = *candidate;
                }
            })
            .or_insert(*candidate);
    }

    let mut survivors: Vec<Candidate<'a>> = winners.into_values().collect();
    survivors.sort_by_key(|c| c.seq);
    survivors
}

/// Counts observed while resolving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub input: usize,
    pub after_id_pass: usize,
    pub canonical: usize,
}

impl ResolveStats {
    /// Number of input leads that did not survive resolution.
    pub fn duplicates_removed(&self) -> usize {
        self.input - self.canonical
    }
}

/// Which lookup step matched a lead to its canonical record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchedBy {
    /// A canonical record carries the lead's `_id`.
    Id,
    /// No `_id` match; a canonical record carries the lead's `email`.
    Email,
    /// Neither key survived. The lead's `_id` winner lost the `email` pass,
    /// so the lead maps to whatever beat that winner.
    Trail,
}

/// The canonical set together with the indexes used to look records up.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    canonical: Vec<Lead>,
    by_id: HashMap<String, usize>,
    by_email: HashMap<String, usize>,
    /// `_id` -> email carried by that `_id`'s winner after the first pass.
    id_trail: HashMap<String, String>,
    stats: ResolveStats,
}

impl Resolution {
    /// Canonical leads, in original input order.
    pub fn canonical(&self) -> &[Lead] {
        &self.canonical
    }

    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical record carrying this `_id`, if any.
    pub fn by_id(&self, id: &str) -> Option<&Lead> {
        self.by_id.get(id).map(|&i| &self.canonical[i])
    }

    /// Canonical record carrying this `email`, if any.
    pub fn by_email(&self, email: &str) -> Option<&Lead> {
        self.by_email.get(email).map(|&i| &self.canonical[i])
    }

    /// Find the canonical record for a lead: by `_id`, else by `email`, else
    /// through the `_id` winner's email.
    ///
    /// Returns `None` only for leads that were not part of the resolved input.
    pub fn lookup(&self, lead: &Lead) -> Option<(&Lead, MatchedBy)> {
        if let Some(found) = self.by_id(lead.id()) {
            return Some((found, MatchedBy::Id));
        }
        if let Some(found) = self.by_email(lead.email()) {
            return Some((found, MatchedBy::Email));
        }
        self.id_trail
            .get(lead.id())
            .and_then(|email| self.by_email(email))
            .map(|found| (found, MatchedBy::Trail))
    }
}

/// Compute the canonical set for `leads`.
///
/// Empty input yields an empty resolution.
pub fn resolve(leads: &[Lead]) -> Resolution {
    let candidates = Candidate::sequence(leads);

    let id_winners = resolve_by(&candidates, LeadKey::Id);
    debug!(
        key = %LeadKey::Id,
        input = candidates.len(),
        survivors = id_winners.len(),
        "resolved by key"
    );

    let id_trail = id_winners
        .iter()
        .map(|c| (c.lead.id().to_string(), c.lead.email().to_string()))
        .collect();

    let email_winners = resolve_by(&id_winners, LeadKey::Email);
    debug!(
        key = %LeadKey::Email,
        input = id_winners.len(),
        survivors = email_winners.len(),
        "resolved by key"
    );

    let canonical: Vec<Lead> = email_winners.iter().map(|c| c.lead.clone()).collect();
    let by_id = canonical
        .iter()
        .enumerate()
        .map(|(i, lead)| (lead.id().to_string(), i))
        .collect();
    let by_email = canonical
        .iter()
        .enumerate()
        .map(|(i, lead)| (lead.email().to_string(), i))
        .collect();

    let stats = ResolveStats {
        input: leads.len(),
        after_id_pass: id_winners.len(),
        canonical: canonical.len(),
    };
    info!(
        input = stats.input,
        canonical = stats.canonical,
        removed = stats.duplicates_removed(),
        "resolution complete"
    );

    Resolution {
        canonical,
        by_id,
        by_email,
        id_trail,
        stats,
    }
}
