//! Shortest concatenation of dictionary words containing a set of search keys.
//!
//! Keys may be covered inside a single word or across the boundary between two
//! adjacent words. The search is a depth-first branch and bound over
//! per-key continuation tables, seeded with a greedy cover.

mod api;
mod config;
pub mod context;
pub mod continuation;
mod cost;
mod error;
mod format;
pub mod greedy;
mod loader;
mod solution;
mod solver;
pub mod vocabulary;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use api::{find_minimum_cover, find_minimum_cover_with};
pub use config::{MaskWidth, SearchConfig};
pub use context::{Context, Mask};
pub use continuation::{Boundary, Candidate, ContinuationIndex, ContinuationTable};
pub use cost::Cost;
pub use error::{Error, Result};
pub use format::{format_solution, format_stats};
pub use greedy::{greedy_cover, Baseline};
pub use loader::{load_word_list, parse_word_list, read_word_list};
pub use solution::{verify_cover, SearchStats, Solution};
pub use vocabulary::filter_vocabulary;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::cover_mask;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Small instances: total key length at most 6, a handful of words.
    const INSTANCES: &[(&[&str], &[&str])] = &[
        (&["lon"], &["wil", "onion", "lonely"]),
        (&["lon", "wi"], &["wil", "onion", "lonely", "wig", "ion", "salon"]),
        (&["ab", "bc", "ca"], &["abc", "cab", "bca", "xab", "cxx", "bcd", "dca", "abca"]),
        (&["to", "on", "ne"], &["ton", "tone", "one", "neon", "at", "onto", "net", "stone"]),
        (&["ra", "at"], &["rat", "cat", "tar", "ra", "art", "era", "tab"]),
        (&["xy", "yz", "zx"], &["axy", "zq", "yzb", "zxc", "cx", "bz"]),
        (&["in", "ng", "go"], &["ring", "going", "gin", "nog", "ingot", "ago"]),
        (&["a", "b"], &["ab", "a", "b", "cab"]),
        (&["lon"], &["wil", "onion"]),
        (&["lon", "xq"], &["wil", "onion", "axq"]),
    ];

    /// Exhaustive reference: every sequence of up to two words per key, whatever each
    /// word covers. Spans are checked between adjacent words only.
    fn brute_force(keys: &[String], vocab: &[String]) -> Option<u32> {
        fn walk(
            keys: &[String],
            vocab: &[String],
            previous: &str,
            covered: Mask,
            letters: u32,
            depth: usize,
            best: &mut Option<u32>,
        ) {
            if best.map_or(false, |b| letters >= b) {
                return;
            }
            if covered == context::full_mask(keys.len()) {
                *best = Some(letters);
                return;
            }
            if depth == 2 * keys.len() {
                return;
            }
            for word in vocab {
                let now = covered | cover_mask(&format!("{previous}{word}"), keys);
                let letters = letters + word.chars().count() as u32;
                walk(keys, vocab, word, now, letters, depth + 1, best);
            }
        }

        let mut best = None;
        walk(keys, vocab, "", 0, 0, 0, &mut best);
        best
    }

    #[test]
    fn single_word_covers_both_keys() {
        let sol = find_minimum_cover(&words(&["a", "b"]), &["ab", "a", "b", "cab"]).unwrap();
        assert_eq!(sol.terms, words(&["ab"]));
        assert_eq!(sol.total_cost(), 2);
    }

    #[test]
    fn single_word_preferred_over_boundary_span() {
        let sol = find_minimum_cover(&words(&["lon"]), &["wil", "onion", "lonely"]).unwrap();
        assert_eq!(sol.terms, words(&["lonely"]));
        assert_eq!(sol.total_cost(), 6);
        assert_eq!(sol.cost.words, 1);
    }

    #[test]
    fn boundary_span_used_when_cheaper() {
        let sol = find_minimum_cover(&words(&["wi", "lon"]), &["wil", "onion", "lonely", "wig"])
            .unwrap();
        assert_eq!(sol.terms, words(&["wil", "onion"]));
        assert_eq!(sol.total_cost(), 8);
        assert!(verify_cover(&sol.terms, &words(&["wi", "lon"])));
    }

    #[test]
    fn span_only_cover_found_without_greedy_seed() {
        let sol = find_minimum_cover(&words(&["wi", "lon"]), &["wil", "onion"]).unwrap();
        assert_eq!(sol.terms, words(&["wil", "onion"]));
        assert!(!sol.stats.seeded);
    }

    #[test]
    fn lead_in_word_is_placed_first() {
        let sol = find_minimum_cover(&words(&["lon"]), &["wil", "onion"]).unwrap();
        assert_eq!(sol.terms, words(&["wil", "onion"]));
        assert_eq!(sol.total_cost(), 8);
        assert!(verify_cover(&sol.terms, &words(&["lon"])));
    }

    #[test]
    fn empty_and_duplicate_keys_do_not_panic() {
        let sol = find_minimum_cover(&words(&["", "ab", "ab"]), &["ab"]).unwrap();
        assert_eq!(sol.terms, words(&["ab"]));
        assert_eq!(sol.total_cost(), 2);
    }

    #[test]
    fn empty_keys_short_circuit() {
        let sol = find_minimum_cover(&[], &["anything"]).unwrap();
        assert!(sol.is_empty());
        assert_eq!(sol.total_cost(), 0);
        assert_eq!(sol.stats.nodes, 0);
    }

    #[test]
    fn uncoverable_keys_are_reported() {
        let err = find_minimum_cover(&words(&["on", "zz"]), &["onion"]).unwrap_err();
        match err {
            Error::Uncoverable { missing } => assert_eq!(missing, words(&["zz"])),
            other => panic!("expected Uncoverable, got {other:?}"),
        }
    }

    #[test]
    fn capacity_boundary_32() {
        let keys: Vec<String> = (0..33).map(|i| format!("x{i}y")).collect();
        let vocab = vec![keys.concat()];
        let config = SearchConfig::default().with_mask_width(MaskWidth::Bits32);

        let sol = find_minimum_cover_with(&keys[..32], &vocab, &config).unwrap();
        assert_eq!(sol.terms.len(), 1);
        assert!(verify_cover(&sol.terms, &keys[..32]));

        let err = find_minimum_cover_with(&keys, &vocab, &config).unwrap_err();
        assert!(matches!(err, Error::TooManySearchKeys { count: 33, capacity: 32 }));
    }

    #[test]
    fn capacity_boundary_64() {
        let keys: Vec<String> = (0..65).map(|i| format!("x{i}y")).collect();
        let vocab = vec![keys.concat()];

        let sol = find_minimum_cover(&keys[..64], &vocab).unwrap();
        assert_eq!(sol.terms, vocab);

        let err = find_minimum_cover(&keys, &vocab).unwrap_err();
        assert!(matches!(err, Error::TooManySearchKeys { count: 65, capacity: 64 }));
    }

    #[test]
    fn malformed_vocabulary_is_tolerated() {
        let sol = find_minimum_cover(&words(&["ab"]), &["", "a", "AB", "ab", "ab", "é"]).unwrap();
        assert_eq!(sol.terms, words(&["ab"]));
        assert_eq!(sol.total_cost(), 2);
    }

    #[test]
    fn matches_brute_force_on_small_instances() {
        for &(keys, vocab) in INSTANCES {
            let keys = words(keys);
            let vocab = words(vocab);
            let expected = brute_force(&keys, &vocab);
            let found = find_minimum_cover(&keys, &vocab).ok().map(|s| s.total_cost());
            assert_eq!(found, expected, "keys {keys:?}");
        }
    }

    #[test]
    fn never_worse_than_greedy() {
        for &(keys, vocab) in INSTANCES {
            let keys = words(keys);
            let filtered = filter_vocabulary(vocab, &keys);
            let ctx = Context::new(&keys, MaskWidth::Bits64).unwrap();
            if let Some(baseline) = greedy_cover(&ctx, &filtered) {
                let sol = find_minimum_cover(&keys, vocab).unwrap();
                assert!(sol.total_cost() <= baseline.cost.letters, "keys {keys:?}");
            }
        }
    }

    #[test]
    fn every_result_covers_every_key() {
        for &(keys, vocab) in INSTANCES {
            let keys = words(keys);
            if let Ok(sol) = find_minimum_cover(&keys, vocab) {
                assert!(verify_cover(&sol.terms, &keys), "{:?} misses a key", sol.terms);
                let letters: usize = sol.terms.iter().map(|t| t.chars().count()).sum();
                assert_eq!(letters as u32, sol.total_cost());
                assert_eq!(sol.terms.len() as u32, sol.cost.words);
            }
        }
    }

    #[test]
    fn pruning_never_changes_the_optimum() {
        for &(keys, vocab) in INSTANCES {
            let keys = words(keys);
            let pruned = find_minimum_cover(&keys, vocab).ok().map(|s| s.total_cost());
            let exhaustive = find_minimum_cover_with(&keys, vocab, &SearchConfig::exhaustive())
                .ok()
                .map(|s| s.total_cost());
            assert_eq!(pruned, exhaustive, "keys {keys:?}");
        }
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        for &(keys, vocab) in INSTANCES {
            let keys = words(keys);
            let once = filter_vocabulary(vocab, &keys);
            assert_eq!(filter_vocabulary(&once, &keys), once);
        }
    }

    #[test]
    fn loaded_word_list_feeds_the_search() {
        let vocab = parse_word_list("Wil\nonion\nonion's\nLonely\nl\n");
        let sol = find_minimum_cover(&words(&["lon"]), &vocab).unwrap();
        assert_eq!(sol.terms, words(&["lonely"]));
        assert_eq!(format_solution(&sol), "lonely\n6 letter(s), 1 word(s)\n");
    }
}
