extern crate read_write;

use read_write::TableIO;

use std::env;
use std::fs::File;
use std::io::{Error, ErrorKind, Result};
use std::path::Path;

/// Number of ranks in one suit lane
pub const RANK_COUNT: u32 = 13;
/// One entry per 13-bit rank presence pattern
pub const RANK_MASK_COUNT: usize = 1 << RANK_COUNT;
/// Bits used by a single rank slot in a packed hand value
pub const CARD_BITS_WIDTH: u32 = 4;

const ACE: u32 = 12;
const FIVE: u32 = 3;
// A-2-3-4-5
const WHEEL_MASK: usize = (1 << ACE) | 0b1111;

pub const POP_COUNT_FILENAME: &str = "eval_pop_count.dat";
pub const STRAIGHT_FILENAME: &str = "eval_straight.dat";
pub const TOP_CARD_FILENAME: &str = "eval_top_card.dat";
pub const TOP_FIVE_FILENAME: &str = "eval_top_five.dat";

/// number of ranks present in the pattern
pub fn pop_count(ranks: usize) -> u32 {
    let mut count = 0;
    let mut n = ranks;
    while n != 0 {
        if (n & 1) != 0 {
            count += 1;
        }
        n >>= 1;
    }
    count
}

/// rank index of the highest set bit, 0 for the empty pattern
pub fn top_card(ranks: usize) -> u32 {
    if ranks == 0 {
        return 0;
    }
    let mut rank = ACE;
    while (ranks & (1 << rank)) == 0 {
        rank -= 1;
    }
    rank
}

/// rank index of the top card of the best straight, 0 when there is none
///
/// The wheel counts as a five high straight.
pub fn straight(ranks: usize) -> u32 {
    let run = ranks & (ranks << 1) & (ranks << 2) & (ranks << 3) & (ranks << 4);
    if run != 0 {
        return top_card(run);
    }
    if (ranks & WHEEL_MASK) == WHEEL_MASK {
        return FIVE;
    }
    0
}

/// top five ranks packed 4 bits each, highest rank in the most significant slot
pub fn top_five(ranks: usize) -> u32 {
    let mut packed = 0;
    let mut n = ranks;
    for _ in 0..5 {
        packed <<= CARD_BITS_WIDTH;
        let card = top_card(n);
        packed += card;
        n &= !(1 << card);
    }
    packed
}

/// All four rank pattern tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTables {
    pub pop_count: Vec<u32>,
    pub straight: Vec<u32>,
    pub top_card: Vec<u32>,
    pub top_five: Vec<u32>,
}

fn build_table(f: fn(usize) -> u32) -> Vec<u32> {
    (0..RANK_MASK_COUNT).map(f).collect()
}

/// Build every table from scratch
pub fn generate_tables() -> EvalTables {
    EvalTables {
        pop_count: build_table(pop_count),
        straight: build_table(straight),
        top_card: build_table(top_card),
        top_five: build_table(top_five),
    }
}

fn write_files(tables: &EvalTables, dir: &Path) -> Result<()> {
    let files = [
        (POP_COUNT_FILENAME, &tables.pop_count),
        (STRAIGHT_FILENAME, &tables.straight),
        (TOP_CARD_FILENAME, &tables.top_card),
        (TOP_FIVE_FILENAME, &tables.top_five),
    ];
    for (filename, table) in files.iter() {
        let mut file = File::create(dir.join(filename))?;
        file.write_table(table)?;
    }
    Ok(())
}

/// Writes the tables into `OUT_DIR`, called from the build script
pub fn gen_eval_table() -> Result<()> {
    let out_dir = env::var("OUT_DIR")
        .map_err(|_| Error::new(ErrorKind::NotFound, "OUT_DIR env var for eval tables not set"))?;
    let dir = Path::new(&out_dir);
    write_files(&generate_tables(), dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight() {
        // 9 T J Q K
        assert_eq!(straight(0b0_1111_1000_0000), 11);
        // wheel plus a six makes a six high straight
        assert_eq!(straight(WHEEL_MASK | (1 << 4)), 4);
        assert_eq!(straight(WHEEL_MASK), FIVE);
        // broadway
        assert_eq!(straight(0b1_1111_0000_0000), ACE);
        // four to a straight
        assert_eq!(straight(0b0_0000_0111_1000), 0);
    }

    #[test]
    fn test_top_five() {
        // A K 7 3 2
        let ranks = (1 << 12) | (1 << 11) | (1 << 5) | (1 << 1) | 1;
        assert_eq!(top_five(ranks), 0xcb510);
        // two ranks, lower slots fall to zero
        assert_eq!(top_five((1 << 12) | (1 << 8)) >> 12, 0xc8);
    }

    #[test]
    fn test_generate_tables_size() {
        let tables = generate_tables();
        assert_eq!(tables.pop_count.len(), RANK_MASK_COUNT);
        assert_eq!(tables.top_five.len(), RANK_MASK_COUNT);
        assert_eq!(tables.pop_count[RANK_MASK_COUNT - 1], RANK_COUNT);
        assert_eq!(tables.top_card[0], 0);
    }
}
