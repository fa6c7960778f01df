use std::cmp::Ordering;

use crate::context::{mask_count, set_bits, Context, Mask};
use crate::cost::{compare_ratios, Cost};

/// A quick, not necessarily optimal, cover used as the search's first upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    /// Indices into the filtered vocabulary, in placement order.
    pub words: Vec<usize>,
    pub cost: Cost,
}

struct Pick {
    word: usize,
    letters: u32,
    gain: Mask,
}

impl Pick {
    /// Lower letters per newly covered key wins; on a tie, covering more keys wins.
    fn beats(&self, other: &Pick) -> bool {
        let (gain, other_gain) = (mask_count(self.gain), mask_count(other.gain));
        match compare_ratios(self.letters, gain, other.letters, other_gain) {
            Ordering::Less => true,
            Ordering::Equal => gain > other_gain,
            Ordering::Greater => false,
        }
    }
}

/// Walk the keys in index order and, for each one still uncovered, take the word
/// containing it that covers the most outstanding keys per letter.
/// This intentionally departs from taking the plain shortest containing word, so a
/// word covering several keys wins when it costs no more per key.
///
/// Only whole-word matches are used. Returns `None` when some key is not contained
/// in any word; boundary spans may still cover it during the search.
pub fn greedy_cover(ctx: &Context<'_>, vocabulary: &[String]) -> Option<Baseline> {
    let mut remaining = ctx.full_mask;
    let mut words = Vec::new();
    let mut cost = Cost::ZERO;

    for key_idx in set_bits(ctx.full_mask) {
        if remaining & ((1 as Mask) << key_idx) == 0 {
            continue;
        }
        let key = ctx.keys[key_idx].as_str();

        let mut best: Option<Pick> = None;
        for (word_idx, word) in vocabulary.iter().enumerate() {
            if !word.contains(key) {
                continue;
            }
            let pick = Pick {
                word: word_idx,
                letters: word.chars().count() as u32,
                gain: ctx.cover_mask(word) & remaining,
            };
            if best.as_ref().map_or(true, |current| pick.beats(current)) {
                best = Some(pick);
            }
        }

        let Some(pick) = best else {
            tracing::debug!(key, "greedy baseline found no word containing key");
            return None;
        };
        remaining &= !pick.gain;
        cost = cost.extend(pick.letters);
        words.push(pick.word);
    }

    tracing::debug!(letters = cost.letters, words = cost.words, "greedy baseline");
    Some(Baseline { words, cost })
}
