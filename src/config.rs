use serde::{Deserialize, Serialize};

/// Capacity ceiling for the number of search keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaskWidth {
    Bits32,
    #[default]
    Bits64,
}

impl MaskWidth {
    pub const fn bits(&self) -> u32 {
        match self {
            MaskWidth::Bits32 => 32,
            MaskWidth::Bits64 => 64,
        }
    }

    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(MaskWidth::Bits32),
            64 => Some(MaskWidth::Bits64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Maximum number of search keys accepted, checked before any index is built.
    pub mask_width: MaskWidth,
    /// Stop scanning a candidate list once it can no longer beat the best cost.
    pub prune: bool,
    /// Start from the greedy cover's cost instead of an unbounded best.
    pub seed_with_greedy: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            mask_width: MaskWidth::default(),
            prune: true,
            seed_with_greedy: true,
        }
    }
}

impl SearchConfig {
    /// Exhaustive configuration: no greedy bound and no pruning.
    pub fn exhaustive() -> Self {
        SearchConfig {
            prune: false,
            seed_with_greedy: false,
            ..SearchConfig::default()
        }
    }

    pub fn with_mask_width(self, mask_width: MaskWidth) -> Self {
        SearchConfig { mask_width, ..self }
    }
}
