use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

use serde::{Deserialize, Serialize};

use crate::constants::{RANK_LANE_MASK, SUIT_LANE_SHIFT};

/// 64 bit set of cards, one bit per card
///
/// Bits 0-12: hearts
/// Bits 16-28: clubs
/// Bits 32-44: diamonds
/// Bits 48-60: spades
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CardMask(u64);

impl CardMask {
    pub const EMPTY: CardMask = CardMask(0);

    pub const fn from_bits(bits: u64) -> Self {
        CardMask(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of cards in the set
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// true if at least one card is in both sets
    pub const fn intersects(self, other: CardMask) -> bool {
        (self.0 & other.0) != 0
    }

    /// true if every card of `other` is in this set
    pub const fn contains(self, other: CardMask) -> bool {
        (self.0 & other.0) == other.0
    }

    /// 13-bit rank pattern of one suit lane, by suit index
    #[inline]
    pub const fn lane(self, suit_index: usize) -> u32 {
        ((self.0 >> SUIT_LANE_SHIFT[suit_index]) & RANK_LANE_MASK) as u32
    }

    #[inline]
    pub const fn hearts(self) -> u32 {
        self.lane(0)
    }

    #[inline]
    pub const fn diamonds(self) -> u32 {
        self.lane(1)
    }

    #[inline]
    pub const fn clubs(self) -> u32 {
        self.lane(2)
    }

    #[inline]
    pub const fn spades(self) -> u32 {
        self.lane(3)
    }
}

impl BitOr for CardMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        CardMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for CardMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CardMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        CardMask(self.0 & rhs.0)
    }
}

impl BitAndAssign for CardMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for CardMask {
    type Output = Self;

    fn not(self) -> Self::Output {
        CardMask(!self.0)
    }
}

impl Shl<u32> for CardMask {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        CardMask(self.0 << rhs)
    }
}

impl Shr<u32> for CardMask {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        CardMask(self.0 >> rhs)
    }
}
