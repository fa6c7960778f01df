use hashbrown::HashSet;

use crate::context::key_splits;

/// Key fragments a word has to touch to be useful in some cover.
struct Fragments<'a> {
    keys: &'a [String],
    /// Proper prefixes: a word ending with one can precede a boundary span.
    heads: HashSet<&'a str>,
    /// Proper suffixes: a word starting with one can complete a boundary span.
    tails: HashSet<&'a str>,
}

impl<'a> Fragments<'a> {
    fn new(keys: &'a [String]) -> Self {
        let mut heads = HashSet::new();
        let mut tails = HashSet::new();
        for key in keys {
            for (prefix, suffix) in key_splits(key) {
                heads.insert(prefix);
                tails.insert(suffix);
            }
        }
        Fragments { keys, heads, tails }
    }

    fn admits(&self, word: &str) -> bool {
        self.keys.iter().any(|key| word.contains(key.as_str()))
            || self.heads.iter().any(|head| word.ends_with(head))
            || self.tails.iter().any(|tail| word.starts_with(tail))
    }
}

/// Keep only the words that can take part in a cover of `keys`: words containing a key,
/// ending with a proper prefix of a key, or starting with a proper suffix of a key.
///
/// Duplicates are dropped; the first occurrence keeps its position.
pub fn filter_vocabulary<S: AsRef<str>>(words: &[S], keys: &[String]) -> Vec<String> {
    let fragments = Fragments::new(keys);
    let mut seen: HashSet<&str> = HashSet::with_capacity(words.len());
    let mut kept = Vec::new();
    for word in words {
        let word = word.as_ref();
        if fragments.admits(word) && seen.insert(word) {
            kept.push(word.to_string());
        }
    }
    tracing::debug!(
        input = words.len(),
        kept = kept.len(),
        "filtered vocabulary"
    );
    kept
}
