use super::hand_value::*;
use super::tables::{POP_COUNT, STRAIGHT, TOP_CARD, TOP_FIVE};
use crate::deck::CardMask;

// drops the lowest kicker slot after shifting top five down one slot
const THREE_KICKERS_MASK: u32 = !0xf;
// top two slots of a top five value
const TWO_RANKS_MASK: u32 = 0xff000;

/// Evaluates the best five card hand inside `cards`
///
/// `n_cards` is the number of cards in the mask, usually 7 for holdem.
///
/// # Example
///
/// ```
/// use poker_equity::deck::{DeckModel, STANDARD_DECK};
/// use poker_equity::hand_evaluator::{evaluate, HandCategory};
/// let cards = STANDARD_DECK.parse_cards("AhKhQhJhTh2c3d").unwrap();
/// assert_eq!(evaluate(cards, 7).category(), HandCategory::StraightFlush);
/// ```
pub fn evaluate(cards: CardMask, n_cards: usize) -> HandValue {
    let sh = cards.hearts() as usize;
    let sd = cards.diamonds() as usize;
    let sc = cards.clubs() as usize;
    let ss = cards.spades() as usize;

    let ranks = sh | sd | sc | ss;
    let rank_count = POP_COUNT[ranks] as usize;
    // cards sharing a rank with another card
    let dup = n_cards.saturating_sub(rank_count);

    let mut made = 0u32;
    if rank_count >= 5 {
        for &lane in [sh, sd, sc, ss].iter() {
            if POP_COUNT[lane] >= 5 {
                let top = STRAIGHT[lane];
                if top != 0 {
                    return HandValue::new(HandCategory::StraightFlush.base() + (top << TOP_SHIFT));
                }
                made = made.max(HandCategory::Flush.base() + TOP_FIVE[lane]);
            }
        }
        if made == 0 {
            let top = STRAIGHT[ranks];
            if top != 0 {
                made = HandCategory::Straight.base() + (top << TOP_SHIFT);
            }
        }
        // not enough duplicates for a full house or quads
        if made != 0 && dup < 3 {
            return HandValue::new(made);
        }
    }

    let value = match dup {
        0 => HandCategory::NoPair.base() + TOP_FIVE[ranks],
        1 => {
            let mut two = ranks ^ (sc ^ sd ^ sh ^ ss);
            let mut value = HandCategory::OnePair.base() + (TOP_CARD[two] << TOP_SHIFT);
            two ^= ranks;
            value += (TOP_FIVE[two] >> 4) & THREE_KICKERS_MASK;
            value
        }
        2 => {
            let mut two = ranks ^ (sc ^ sd ^ sh ^ ss);
            if two != 0 {
                let mut value = HandCategory::TwoPair.base() + (TOP_FIVE[two] & TWO_RANKS_MASK);
                two ^= ranks;
                value += TOP_CARD[two] << THIRD_SHIFT;
                value
            } else {
                let mut three = three_mask(sh, sd, sc, ss);
                let mut value = HandCategory::Trips.base() + (TOP_CARD[three] << TOP_SHIFT);
                three ^= ranks;
                let second = TOP_CARD[three];
                value += second << SECOND_SHIFT;
                three ^= 1 << second;
                value += TOP_CARD[three] << THIRD_SHIFT;
                value
            }
        }
        _ => {
            let four = sh & sd & sc & ss;
            if four != 0 {
                let top = TOP_CARD[four];
                HandCategory::Quads.base()
                    + (top << TOP_SHIFT)
                    + (TOP_CARD[ranks ^ (1 << top)] << SECOND_SHIFT)
            } else {
                let two = ranks ^ (sc ^ sd ^ sh ^ ss);
                if POP_COUNT[two] as usize != dup {
                    let three = three_mask(sh, sd, sc, ss);
                    let top = TOP_CARD[three];
                    let second = TOP_CARD[(two | three) ^ (1 << top)];
                    HandCategory::FullHouse.base() + (top << TOP_SHIFT) + (second << SECOND_SHIFT)
                } else if made != 0 {
                    made
                } else {
                    let top = TOP_CARD[two];
                    let second = TOP_CARD[two ^ (1 << top)];
                    HandCategory::TwoPair.base()
                        + (top << TOP_SHIFT)
                        + (second << SECOND_SHIFT)
                        + (TOP_CARD[ranks ^ (1 << top) ^ (1 << second)] << THIRD_SHIFT)
                }
            }
        }
    };
    HandValue::new(value)
}

/// ranks present in at least three suits
#[inline]
fn three_mask(sh: usize, sd: usize, sc: usize, ss: usize) -> usize {
    ((sc & sd) | (sh & ss)) & ((sc & sh) | (sd & ss))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckModel, STANDARD_DECK};

    fn eval(text: &str) -> HandValue {
        let cards = STANDARD_DECK.parse_cards(text).unwrap();
        evaluate(cards, cards.count() as usize)
    }

    #[test]
    fn test_categories() {
        assert_eq!(eval("Ah Kd 9c 7s 4h 3d 2c").category(), HandCategory::NoPair);
        assert_eq!(eval("Ah Ad 9c 7s 4h 3d 2c").category(), HandCategory::OnePair);
        assert_eq!(eval("Ah Ad 9c 9s 4h 3d 2c").category(), HandCategory::TwoPair);
        assert_eq!(eval("Ah Ad Ac 9s 4h 3d 2c").category(), HandCategory::Trips);
        assert_eq!(eval("Ah Kd Qc Js Th 3d 2c").category(), HandCategory::Straight);
        assert_eq!(eval("Ah Kh 9h 7h 4h 3d 2c").category(), HandCategory::Flush);
        assert_eq!(eval("Ah Ad Ac 9s 9h 3d 2c").category(), HandCategory::FullHouse);
        assert_eq!(eval("Ah Ad Ac As 9h 3d 2c").category(), HandCategory::Quads);
        assert_eq!(eval("9h 8h 7h 6h 5h 3d 2c").category(), HandCategory::StraightFlush);
    }

    #[test]
    fn test_exact_values() {
        // royal flush
        assert_eq!(eval("AhKhQhJhTh").bits(), (8 << 24) | (12 << 16));
        // the wheel is a five high straight
        assert_eq!(eval("Ah2d3c4s5h").bits(), (4 << 24) | (3 << 16));
        // quad deuces with a three kicker
        assert_eq!(eval("2h2d2c2s3h").bits(), (7 << 24) | (1 << 12));
        // A K 7 3 2 high
        assert_eq!(eval("AhKd7c3s2h").bits(), 0xcb510);
        // pair of kings, A Q 9 kickers
        assert_eq!(eval("KhKdAcQs9h5d2c").bits(), (1 << 24) | 0xbca70);
        // kings and nines, ace kicker
        assert_eq!(eval("KhKd9c9sAh5d2c").bits(), (2 << 24) | 0xb7c00);
        // queens and threes, king kicker
        assert_eq!(eval("QhQd3c3s2h2dKc").bits(), (2 << 24) | 0xa1b00);
        // trip sevens, A J kickers
        assert_eq!(eval("7h7d7cAsJh4d2c").bits(), (3 << 24) | 0x5c900);
        // jacks full of fours over a second set
        assert_eq!(eval("JhJdJc4s4h4d2c").bits(), (6 << 24) | 0x92000);
    }

    #[test]
    fn test_kickers_break_ties() {
        assert!(eval("AhAdKc9s7h5d2c") > eval("AsAcQh9d7c5h2d"));
        assert_eq!(eval("AhAdKc9s7h5d2c"), eval("AsAcKh9d7c5h3d"));
        // sixth and seventh cards do not play
        assert_eq!(eval("AhKdQcJs9h3d2c"), eval("AsKcQhJd9c4h3s"));
    }

    #[test]
    fn test_board_plays() {
        let board = "Ah Kh Qh Jh Th";
        assert_eq!(eval(&format!("{} 2c 3d", board)), eval(&format!("{} 4c 5d", board)));
    }

    #[test]
    fn test_monotonic_categories() {
        let ladder = [
            "Ah Kd 9c 7s 4h 3d 2c",
            "2h 2d 9c 7s 4h 3d Ac",
            "2h 2d 3c 3s 4h 6d 8c",
            "2h 2d 2c 9s 4h 3d Jc",
            "2h 3d 4c 5s 6h Jd Kc",
            "2h 3h 4h 5h 7h Jd Kc",
            "2h 2d 2c 3s 3h Jd Kc",
            "2h 2d 2c 2s 3h 5d 7c",
            "2h 3h 4h 5h Ah Jd Kc",
        ];
        for pair in ladder.windows(2) {
            let weaker = eval(pair[0]);
            let stronger = eval(pair[1]);
            assert!(stronger.category() > weaker.category(), "{} vs {}", pair[0], pair[1]);
            assert!(stronger > weaker, "{} vs {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_flush_beats_straight_on_same_board() {
        // flush and straight both present
        let value = eval("9h 8h 7d 6h 5h 2h Kc");
        assert_eq!(value.category(), HandCategory::Flush);
    }

    #[test]
    fn test_flush_beats_trips() {
        let value = eval("Ah Kh 9h 7h 2h Ad Ac");
        assert_eq!(value.category(), HandCategory::Flush);
        assert_eq!(value.bits(), (5 << 24) | 0xcb750);
    }

    #[test]
    fn test_three_pair_keeps_best_kicker() {
        // aces and kings, the queen outkicks the third pair
        assert_eq!(eval("AhAdKcKsQh2d2c").bits(), (2 << 24) | 0xcba00);
        assert_eq!(eval("AhAdKcKs2h2dQc"), eval("AhAdKcKsQh3d3c"));
    }
}
