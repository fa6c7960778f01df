use std::cmp::Ordering;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cost {
    /// Total letters over all words (the objective).
    pub letters: u32,
    /// Number of words in the sequence (reported, never compared).
    pub words: u32,
}

impl Cost {
    pub const ZERO: Cost = Cost { letters: 0, words: 0 };

    /// Bound used before any cover is known.
    pub const UNBOUNDED: Cost = Cost {
        letters: u32::MAX,
        words: 0,
    };

    pub const fn is_unbounded(&self) -> bool {
        self.letters == u32::MAX
    }

    /// Cost after appending a word of `letters` letters.
    pub const fn extend(self, letters: u32) -> Cost {
        Cost {
            letters: self.letters.saturating_add(letters),
            words: self.words + 1,
        }
    }
}

/// Orders by letter count only, so equal-letter covers compare `Equal` whatever
/// their word count and the first one found is kept.
pub fn compare_costs(a: &Cost, b: &Cost) -> Ordering {
    a.letters.cmp(&b.letters)
}

/// Letters spent per newly covered key, `a` against `b`, without dividing.
pub fn compare_ratios(a_letters: u32, a_gain: u32, b_letters: u32, b_gain: u32) -> Ordering {
    let left = (a_letters as u64) * (b_gain as u64);
    let right = (b_letters as u64) * (a_gain as u64);
    left.cmp(&right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_does_not_break_ties() {
        let one = Cost { letters: 6, words: 1 };
        let two = Cost { letters: 6, words: 2 };
        assert_eq!(compare_costs(&one, &two), Ordering::Equal);
        assert_eq!(compare_costs(&Cost::ZERO.extend(5), &one), Ordering::Less);
    }

    #[test]
    fn extend_saturates() {
        let cost = Cost::UNBOUNDED.extend(3);
        assert!(cost.is_unbounded());
        assert_eq!(cost.words, 1);
        assert_eq!(Cost::ZERO.extend(4).extend(2), Cost { letters: 6, words: 2 });
    }

    #[test]
    fn ratios_cross_multiply() {
        // 2 letters for 2 keys equals 1 letter for 1 key; 3 for 2 is worse.
        assert_eq!(compare_ratios(2, 2, 1, 1), Ordering::Equal);
        assert_eq!(compare_ratios(3, 2, 2, 2), Ordering::Greater);
        assert_eq!(compare_ratios(4, 3, 3, 2), Ordering::Less);
    }
}
