use serde::Serialize;

use crate::cost::Cost;

/// Counters gathered during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Recursive calls, terminal ones included.
    pub nodes: u64,
    /// Candidate lists cut short by the bound.
    pub pruned: u64,
    /// Times the best cover was replaced during the search.
    pub improvements: u32,
    /// Whether the search started from the greedy baseline.
    pub seeded: bool,
}

/// The best cover found: words in placement order and their cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub terms: Vec<String>,
    pub cost: Cost,
    pub stats: SearchStats,
}

impl Solution {
    /// Solution for an empty key set.
    pub fn empty() -> Self {
        Solution {
            terms: Vec::new(),
            cost: Cost::ZERO,
            stats: SearchStats::default(),
        }
    }

    /// Total letters of the cover.
    pub const fn total_cost(&self) -> u32 {
        self.cost.letters
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The cover's text, words joined directly so boundary spans stay contiguous.
    pub fn concatenated(&self) -> String {
        self.terms.concat()
    }
}

/// Check a cover independently of the search's bitmask bookkeeping: every key must
/// occur in the concatenation of the terms.
pub fn verify_cover<S: AsRef<str>>(terms: &[S], keys: &[String]) -> bool {
    let text: String = terms.iter().map(|t| t.as_ref()).collect();
    keys.iter().all(|key| text.contains(key.as_str()))
}
