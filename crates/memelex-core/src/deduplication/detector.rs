//! Pairwise duplicate detection with positional tie-break

use std::collections::BTreeSet;

use crate::record::MemeRecord;

use super::signature::signature;

/// One detected duplicate relationship, for human-readable reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicatePair {
    pub id_a: u64,
    pub term_a: String,
    pub id_b: u64,
    pub term_b: String,
    /// Shared signature characters, sorted by code point
    pub shared: String,
}

/// Result of a detection run over one collection.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Findings in discovery order (earlier index ascending, then later)
    pub pairs: Vec<DuplicatePair>,
    /// Ids marked for removal; set membership, so repeat hits are harmless
    pub removed_ids: BTreeSet<u64>,
    /// Input filtered to records whose id is not marked, original order kept
    pub survivors: Vec<MemeRecord>,
}

impl Detection {
    pub fn removed_count(&self) -> usize {
        self.removed_ids.len()
    }
}

/// Compare every pair of records and select which ones to drop.
///
/// Each unordered pair (i, j) with i < j in input order is compared exactly
/// once. When the two signatures share two or more characters, the pair is
/// reported and the later-positioned record (j) is marked for removal --
/// position decides, not the `id` value. O(n^2), fine at collection scale.
///
/// Terms are never mutated; the input is only filtered.
pub fn detect_duplicates(records: &[MemeRecord]) -> Detection {
    let signatures: Vec<BTreeSet<char>> =
        records.iter().map(|r| signature(&r.term)).collect();

    let mut pairs = Vec::new();
    let mut removed_ids = BTreeSet::new();

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let shared: BTreeSet<char> = signatures[i]
                .intersection(&signatures[j])
                .copied()
                .collect();
            if shared.len() >= 2 {
                pairs.push(DuplicatePair {
                    id_a: records[i].id,
                    term_a: records[i].term.clone(),
                    id_b: records[j].id,
                    term_b: records[j].term.clone(),
                    shared: shared.iter().collect(),
                });
                removed_ids.insert(records[j].id);
            }
        }
    }

    let survivors = records
        .iter()
        .filter(|r| !removed_ids.contains(&r.id))
        .cloned()
        .collect();

    Detection {
        pairs,
        removed_ids,
        survivors,
    }
}
