//! Rank pattern lookup tables
//!
//! Written into `OUT_DIR` by the build script and decoded at compile time,
//! so there is nothing to initialise at runtime.

use read_write::decode_table;

use crate::constants::RANK_MASK_COUNT;

/// number of ranks present in a 13-bit rank pattern
pub static POP_COUNT: [u32; RANK_MASK_COUNT] = decode_table::<RANK_MASK_COUNT>(include_bytes!(
    concat!(env!("OUT_DIR"), "/eval_pop_count.dat")
));

/// top rank of the best straight in a pattern, 0 for none
pub static STRAIGHT: [u32; RANK_MASK_COUNT] = decode_table::<RANK_MASK_COUNT>(include_bytes!(
    concat!(env!("OUT_DIR"), "/eval_straight.dat")
));

/// highest rank present, 0 for the empty pattern
pub static TOP_CARD: [u32; RANK_MASK_COUNT] = decode_table::<RANK_MASK_COUNT>(include_bytes!(
    concat!(env!("OUT_DIR"), "/eval_top_card.dat")
));

/// top five ranks packed 4 bits each, highest in bits 16-19
pub static TOP_FIVE: [u32; RANK_MASK_COUNT] = decode_table::<RANK_MASK_COUNT>(include_bytes!(
    concat!(env!("OUT_DIR"), "/eval_top_five.dat")
));
