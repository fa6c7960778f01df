use crate::config::MaskWidth;
use crate::error::{Error, Result};

/// One bit per search key, bit `i` standing for `keys[i]`.
pub type Mask = u64;

/// The validated set of search keys for one search run.
pub struct Context<'a> {
    pub keys: &'a [String],
    pub full_mask: Mask,
}

impl<'a> Context<'a> {
    /// Validate the key count against the mask width. This is the only capacity check;
    /// nothing downstream shifts a bit past `keys.len()`.
    pub fn new(keys: &'a [String], width: MaskWidth) -> Result<Self> {
        let capacity = width.bits();
        if keys.len() > capacity as usize {
            return Err(Error::TooManySearchKeys {
                count: keys.len(),
                capacity,
            });
        }
        Ok(Context {
            keys,
            full_mask: full_mask(keys.len()),
        })
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Bitmask of every search key occurring as a substring of `text`.
    pub fn cover_mask(&self, text: &str) -> Mask {
        cover_mask(text, self.keys)
    }

    /// Names of the keys whose bits are set in `mask`.
    pub fn keys_in(&self, mask: Mask) -> Vec<String> {
        set_bits(mask)
            .filter_map(|idx| self.keys.get(idx).cloned())
            .collect()
    }
}

pub fn full_mask(count: usize) -> Mask {
    if count >= Mask::BITS as usize {
        Mask::MAX
    } else {
        ((1 as Mask) << count) - 1
    }
}

pub fn mask_count(mask: Mask) -> u32 {
    mask.count_ones()
}

pub(crate) fn cover_mask(text: &str, keys: &[String]) -> Mask {
    let mut mask: Mask = 0;
    for (idx, key) in keys.iter().enumerate().take(Mask::BITS as usize) {
        if text.contains(key.as_str()) {
            mask |= (1 as Mask) << idx;
        }
    }
    mask
}

/// Iterates the indices of the set bits of a mask, lowest first.
pub struct SetBits {
    mask: Mask,
}

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == 0 {
            return None;
        }
        let idx = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;
        Some(idx)
    }
}

pub fn set_bits(mask: Mask) -> SetBits {
    SetBits { mask }
}

/// All `(prefix, suffix)` splits of a key with both halves non-empty,
/// shortest prefix first. Splits fall on char boundaries only.
pub fn key_splits(key: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
    key.char_indices()
        .skip(1)
        .map(move |(at, _)| key.split_at(at))
}
