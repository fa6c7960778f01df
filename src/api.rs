use crate::config::SearchConfig;
use crate::context::Context;
use crate::continuation::ContinuationIndex;
use crate::error::{Error, Result};
use crate::greedy::greedy_cover;
use crate::solution::Solution;
use crate::solver::solve;
use crate::vocabulary::filter_vocabulary;

/// Shortest sequence of vocabulary words whose concatenation contains every key,
/// with default settings (64-bit masks, greedy seed, pruning).
pub fn find_minimum_cover<S: AsRef<str>>(keys: &[String], vocabulary: &[S]) -> Result<Solution> {
    find_minimum_cover_with(keys, vocabulary, &SearchConfig::default())
}

pub fn find_minimum_cover_with<S: AsRef<str>>(
    keys: &[String],
    vocabulary: &[S],
    config: &SearchConfig,
) -> Result<Solution> {
    if keys.is_empty() {
        return Ok(Solution::empty());
    }
    let ctx = Context::new(keys, config.mask_width)?;
    tracing::debug!(keys = keys.len(), vocabulary = vocabulary.len(), ?config, "minimum cover search");

    let words = filter_vocabulary(vocabulary, keys);
    let index = ContinuationIndex::build(&ctx, &words);
    let baseline = if config.seed_with_greedy {
        greedy_cover(&ctx, &words)
    } else {
        None
    };

    let (best, stats) = solve(&ctx, &index, &words, baseline.as_ref(), config.prune);
    if !best.is_found() {
        return Err(Error::Uncoverable {
            missing: ctx.keys_in(index.unreachable_keys()),
        });
    }

    Ok(Solution {
        terms: best.words.iter().map(|&w| words[w].clone()).collect(),
        cost: best.cost,
        stats,
    })
}
