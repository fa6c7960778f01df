use smallvec::SmallVec;

use crate::context::{key_splits, Context, Mask};

/// A vocabulary word ready to be appended, with the keys it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Index into the filtered vocabulary.
    pub word: usize,
    /// Letter count of the word.
    pub letters: u32,
    /// Keys fully present in the word, or in `prefix + word` for a boundary entry.
    pub cover: Mask,
}

/// One split point of a key: the words that finish the key when the previous word
/// ends with `prefix`. The empty prefix holds the words containing the whole key.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub prefix: String,
    /// Sorted by `letters`, ascending. The search stops scanning at the first candidate
    /// that is too expensive, so this order must hold.
    pub candidates: Vec<Candidate>,
    /// Words ending with `prefix`, placed right before a candidate when the previous
    /// word does not end with it. Sorted like `candidates`; empty for the full match.
    pub lead_ins: Vec<Candidate>,
}

impl Boundary {
    /// True when this boundary can follow `previous`. The full-match entry follows anything.
    pub fn accepts(&self, previous: &str) -> bool {
        previous.ends_with(self.prefix.as_str())
    }

    pub fn is_full_match(&self) -> bool {
        self.prefix.is_empty()
    }

    /// True when some word sequence can use this entry, from any position.
    pub fn is_usable(&self) -> bool {
        !self.candidates.is_empty() && (self.is_full_match() || !self.lead_ins.is_empty())
    }
}

/// Continuation lists of one key: the full-match entry first, then one entry per split,
/// shortest prefix first.
#[derive(Debug, Clone)]
pub struct ContinuationTable {
    pub boundaries: SmallVec<[Boundary; 8]>,
}

impl ContinuationTable {
    fn build(key: &str, ctx: &Context<'_>, vocabulary: &[String]) -> Self {
        let mut boundaries = SmallVec::new();

        let full = vocabulary
            .iter()
            .enumerate()
            .filter(|(_, word)| word.contains(key))
            .map(|(idx, word)| candidate(idx, word, ctx.cover_mask(word)))
            .collect();
        boundaries.push(sorted_boundary(String::new(), full, Vec::new()));

        let mut joined = String::new();
        for (prefix, suffix) in key_splits(key) {
            let continuations = vocabulary
                .iter()
                .enumerate()
                .filter(|(_, word)| word.starts_with(suffix))
                .map(|(idx, word)| {
                    joined.clear();
                    joined.push_str(prefix);
                    joined.push_str(word);
                    candidate(idx, word, ctx.cover_mask(&joined))
                })
                .collect();
            let lead_ins = vocabulary
                .iter()
                .enumerate()
                .filter(|(_, word)| word.ends_with(prefix))
                .map(|(idx, word)| candidate(idx, word, ctx.cover_mask(word)))
                .collect();
            boundaries.push(sorted_boundary(prefix.to_string(), continuations, lead_ins));
        }

        ContinuationTable { boundaries }
    }

    /// Entry whose boundary prefix is exactly `prefix` (`""` for the full-match entry).
    pub fn get(&self, prefix: &str) -> Option<&Boundary> {
        self.boundaries.iter().find(|b| b.prefix == prefix)
    }

    /// Entries usable right after `previous`.
    pub fn following<'t>(&'t self, previous: &'t str) -> impl Iterator<Item = &'t Boundary> + 't {
        self.boundaries.iter().filter(move |b| b.accepts(previous))
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.iter().all(|b| b.candidates.is_empty())
    }
}

fn candidate(word: usize, text: &str, cover: Mask) -> Candidate {
    Candidate {
        word,
        letters: text.chars().count() as u32,
        cover,
    }
}

fn sorted_boundary(
    prefix: String,
    mut candidates: Vec<Candidate>,
    mut lead_ins: Vec<Candidate>,
) -> Boundary {
    // Stable: equal lengths keep vocabulary order.
    candidates.sort_by_key(|c| c.letters);
    lead_ins.sort_by_key(|c| c.letters);
    Boundary {
        prefix,
        candidates,
        lead_ins,
    }
}

/// Continuation tables for every key, indexed like the keys themselves.
/// Built once per (keys, vocabulary) pair and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ContinuationIndex {
    pub tables: Vec<ContinuationTable>,
}

impl ContinuationIndex {
    pub fn build(ctx: &Context<'_>, vocabulary: &[String]) -> Self {
        let tables: Vec<ContinuationTable> = ctx
            .keys
            .iter()
            .map(|key| ContinuationTable::build(key, ctx, vocabulary))
            .collect();
        tracing::debug!(
            keys = tables.len(),
            entries = tables
                .iter()
                .flat_map(|t| t.boundaries.iter())
                .map(|b| b.candidates.len())
                .sum::<usize>(),
            "built continuation index"
        );
        ContinuationIndex { tables }
    }

    pub fn table(&self, key: usize) -> &ContinuationTable {
        &self.tables[key]
    }

    /// Keys that no usable entry in any table can ever complete.
    pub fn unreachable_keys(&self) -> Mask {
        let reachable = self
            .tables
            .iter()
            .flat_map(|t| t.boundaries.iter())
            .filter(|b| b.is_usable())
            .flat_map(|b| b.candidates.iter())
            .fold(0 as Mask, |acc, c| acc | c.cover);
        crate::context::full_mask(self.tables.len()) & !reachable
    }
}
