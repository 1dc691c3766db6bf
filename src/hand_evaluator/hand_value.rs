use std::fmt;

use serde::{Deserialize, Serialize};

/// Bit offset of the category in a packed hand value
pub const CATEGORY_SHIFT: u32 = 24;
/// Bit offset of the primary rank slot
pub const TOP_SHIFT: u32 = 16;
pub const SECOND_SHIFT: u32 = 12;
pub const THIRD_SHIFT: u32 = 8;

/// Five card hand categories, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    NoPair,
    OnePair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::NoPair,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::Trips,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::Quads,
        HandCategory::StraightFlush,
    ];

    /// category bits of a packed hand value
    pub const fn base(self) -> u32 {
        (self as u32) << CATEGORY_SHIFT
    }
}

/// Packed strength of a 5 to 7 card hand, larger is stronger
///
/// Bits 24-27 hold the category, bits 16-19 down to 0-3 hold up to five
/// rank slots, most significant first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    pub const fn new(bits: u32) -> Self {
        HandValue(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn category(self) -> HandCategory {
        let index = (self.0 >> CATEGORY_SHIFT) as usize;
        HandCategory::ALL
            .get(index)
            .copied()
            .unwrap_or(HandCategory::StraightFlush)
    }

    /// rank index held in slot `n`, 0 being the primary rank
    pub fn rank_slot(self, n: u32) -> u32 {
        (self.0 >> (TOP_SHIFT - 4 * n)) & 0xf
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:#07x})", self.category(), self.0 & 0xfffff)
    }
}

/// Strength of the low half of a split pot, smaller is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LowValue(u32);

impl LowValue {
    pub const fn new(bits: u32) -> Self {
        LowValue(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// What one player shows down with
///
/// `None` on either half means the player does not qualify for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowdownValue {
    pub high: Option<HandValue>,
    pub low: Option<LowValue>,
}

impl ShowdownValue {
    pub fn high_only(high: HandValue) -> Self {
        ShowdownValue {
            high: Some(high),
            low: None,
        }
    }
}
