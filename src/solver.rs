use crate::context::{set_bits, Context, Mask};
use crate::continuation::{Boundary, Candidate, ContinuationIndex};
use crate::cost::{compare_costs, Cost};
use crate::greedy::Baseline;
use crate::solution::SearchStats;
use std::cmp::Ordering;

/// Best cover seen so far. Only `Search::descend` replaces it, and only on a strict improvement.
#[derive(Debug, Clone)]
pub(crate) struct Best {
    pub words: Vec<usize>,
    pub cost: Cost,
}

impl Best {
    fn unbounded() -> Self {
        Best {
            words: Vec::new(),
            cost: Cost::UNBOUNDED,
        }
    }

    fn from_baseline(baseline: &Baseline) -> Self {
        Best {
            words: baseline.words.clone(),
            cost: baseline.cost,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.cost.is_unbounded()
    }
}

/// Mutable state shared by the whole call tree: the word workspace, the best cover and
/// the counters. Everything else is borrowed read-only for the duration of the run.
struct Search<'a> {
    index: &'a ContinuationIndex,
    vocabulary: &'a [String],
    prune: bool,
    /// `workspace[..depth]` is the sequence under construction; later slots are stale.
    workspace: Vec<usize>,
    best: Best,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn descend(&mut self, remaining: Mask, depth: usize, cost: Cost) {
        self.stats.nodes += 1;

        if remaining == 0 {
            if compare_costs(&cost, &self.best.cost) == Ordering::Less {
                self.best.words.clear();
                self.best.words.extend_from_slice(&self.workspace[..depth]);
                self.best.cost = cost;
                self.stats.improvements += 1;
                tracing::trace!(letters = cost.letters, words = cost.words, "improved cover");
            }
            return;
        }

        let index = self.index;
        let vocabulary = self.vocabulary;
        let previous = match depth {
            0 => "",
            _ => vocabulary[self.workspace[depth - 1]].as_str(),
        };

        for key_idx in set_bits(remaining) {
            for boundary in &index.table(key_idx).boundaries {
                if boundary.accepts(previous) {
                    self.extend_with(boundary.candidates.as_slice(), key_idx, remaining, depth, cost);
                } else {
                    self.extend_with_lead_in(boundary, key_idx, remaining, depth, cost);
                }
            }
        }
    }

    fn extend_with(
        &mut self,
        candidates: &[Candidate],
        key_idx: usize,
        remaining: Mask,
        depth: usize,
        cost: Cost,
    ) {
        for candidate in candidates {
            let next = cost.extend(candidate.letters);
            // Lists are length-sorted: nothing further down can do better.
            if self.cut(&next) {
                break;
            }
            debug_assert!(candidate.cover & ((1 as Mask) << key_idx) != 0);
            self.workspace[depth] = candidate.word;
            self.descend(remaining & !candidate.cover, depth + 1, next);
        }
    }

    /// Place a word ending with the boundary prefix, then a continuation after it.
    fn extend_with_lead_in(
        &mut self,
        boundary: &Boundary,
        key_idx: usize,
        remaining: Mask,
        depth: usize,
        cost: Cost,
    ) {
        let Some(shortest) = boundary.candidates.first() else {
            return;
        };
        for lead in &boundary.lead_ins {
            let led = cost.extend(lead.letters);
            if self.cut(&led.extend(shortest.letters)) {
                break;
            }
            self.workspace[depth] = lead.word;
            for candidate in &boundary.candidates {
                let next = led.extend(candidate.letters);
                if self.cut(&next) {
                    break;
                }
                debug_assert!(candidate.cover & ((1 as Mask) << key_idx) != 0);
                self.workspace[depth + 1] = candidate.word;
                self.descend(remaining & !(lead.cover | candidate.cover), depth + 2, next);
            }
        }
    }

    /// Whether a partial sequence of this cost can be abandoned, counting the cut.
    fn cut(&mut self, cost: &Cost) -> bool {
        if self.prune && compare_costs(cost, &self.best.cost) != Ordering::Less {
            self.stats.pruned += 1;
            return true;
        }
        false
    }
}

/// Depth-first branch and bound over word sequences, seeded with `baseline` when given.
///
/// Returns the best cover found, which is still unbounded when no cover exists.
pub(crate) fn solve(
    ctx: &Context<'_>,
    index: &ContinuationIndex,
    vocabulary: &[String],
    baseline: Option<&Baseline>,
    prune: bool,
) -> (Best, SearchStats) {
    let mut search = Search {
        index,
        vocabulary,
        prune,
        // Each step completes a key with one word, or two when a lead-in is needed.
        workspace: vec![0; 2 * ctx.key_count()],
        best: baseline.map_or_else(Best::unbounded, Best::from_baseline),
        stats: SearchStats {
            seeded: baseline.is_some(),
            ..SearchStats::default()
        },
    };

    search.descend(ctx.full_mask, 0, Cost::ZERO);

    tracing::debug!(
        nodes = search.stats.nodes,
        pruned = search.stats.pruned,
        improvements = search.stats.improvements,
        letters = search.best.cost.letters,
        "search finished"
    );
    (search.best, search.stats)
}
