/// Number of cards in standard deck
pub const CARD_COUNT: usize = 52;

/// Number of ranks in a standard deck
/// (2 -> A)
pub const RANK_COUNT: usize = 13;

/// Number of suits in a standard deck
pub const SUIT_COUNT: usize = 4;

/// One entry per 13-bit rank presence pattern
pub const RANK_MASK_COUNT: usize = 1 << RANK_COUNT;

/// Mask of the 13 used bits in a suit lane
pub const RANK_LANE_MASK: u64 = (1 << RANK_COUNT) - 1;

/// Rank symbols, ordered by rank index
pub const RANK_SYMBOLS: &str = "23456789TJQKA";

/// Suit symbols, ordered by suit index
/// (hearts, diamonds, clubs, spades)
pub const SUIT_SYMBOLS: &str = "HDCS";

/// Bit offset of each suit lane in a card mask, indexed by suit index
pub const SUIT_LANE_SHIFT: [u32; SUIT_COUNT] = [0, 32, 16, 48];

/// Cards on a complete holdem board
pub const BOARD_CARDS: usize = 5;

/// Cards in a holdem pocket
pub const POCKET_CARDS: usize = 2;

/// Player limits for a single equity request
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Default Monte Carlo trial budget
pub const DEFAULT_RANDOM_TRIALS: u64 = 1_000_000;

/// Tries per player before a random deal is thrown away
pub const POCKET_SAMPLE_RETRIES: usize = 10;

/// Consecutive thrown away deals before the random sampler gives up
pub const MAX_REJECTED_DEALS: usize = 1000;
