//! Expands range notation into explicit two card combinations
//!
//! Grammar, comma separated tokens:
//! - `AhKh` a single explicit hand
//! - `XxXx` or an empty token, every live hand
//! - `AK`, `AKs`, `AKo`, `QQ` a rank pair, optionally suited or offsuit
//! - `AQ+`, `QQ+` a rank pair and everything above it
//! - `JJ-88`, `JT-98`, `Q9-Q3` from the left ceiling down to the right floor

use std::slice::Iter;

use log::debug;
use thiserror::Error;

use crate::constants::POCKET_CARDS;
use crate::deck::{CardMask, DeckModel};
use crate::enumeration::ExhaustiveEnumerator;

const WILDCARD: &str = "XxXx";
const PLAYER_SEPARATOR: char = '|';
const TOKEN_SEPARATOR: char = ',';
const RANGE_SEPARATOR: char = '-';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid range token '{0}'")]
    InvalidRangeToken(String),
}

/// Every concrete hand a player may hold, sorted and free of duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PocketsDistribution {
    combos: Vec<CardMask>,
}

impl PocketsDistribution {
    pub fn from_combos(mut combos: Vec<CardMask>) -> Self {
        combos.sort_unstable();
        combos.dedup();
        PocketsDistribution { combos }
    }

    pub fn combos(&self) -> &[CardMask] {
        &self.combos
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn contains(&self, hand: CardMask) -> bool {
        self.combos.binary_search(&hand).is_ok()
    }

    pub fn iter(&self) -> Iter<'_, CardMask> {
        self.combos.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suitedness {
    Any,
    Suited,
    Offsuit,
}

/// Rank pair shorthand such as `AKs+`, high rank first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shorthand {
    high: usize,
    low: usize,
    suitedness: Suitedness,
    plus: bool,
}

/// Parses one player's range against the cards already taken
///
/// Hands sharing a card with `dead` are left out.
///
/// # Example
///
/// ```
/// use poker_equity::deck::{CardMask, STANDARD_DECK};
/// use poker_equity::hand_range::parse_distribution;
/// let range = parse_distribution("QQ+,AKs", CardMask::EMPTY, &STANDARD_DECK).unwrap();
/// assert_eq!(range.len(), 22);
/// ```
pub fn parse_distribution<D: DeckModel + ?Sized>(
    text: &str,
    dead: CardMask,
    deck: &D,
) -> Result<PocketsDistribution, RangeError> {
    let mut combos = Vec::new();
    for token in text.split(TOKEN_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case(WILDCARD) {
            combos.extend(ExhaustiveEnumerator::new(deck.card_masks(), POCKET_CARDS, dead));
        } else if token.contains(RANGE_SEPARATOR) {
            add_dash_range(token, dead, deck, &mut combos)?;
        } else if is_explicit_hand(token, deck) {
            let hand = deck
                .parse_cards(token)
                .map_err(|_| RangeError::InvalidRangeToken(token.to_string()))?;
            if hand.count() as usize != POCKET_CARDS {
                return Err(RangeError::InvalidRangeToken(token.to_string()));
            }
            if !hand.intersects(dead) {
                combos.push(hand);
            }
        } else {
            let shorthand = parse_shorthand(token, deck)?;
            add_shorthand(&shorthand, dead, deck, &mut combos);
        }
    }
    Ok(PocketsDistribution::from_combos(combos))
}

/// Parses `|` separated ranges, one per player
///
/// A player left with a single hand takes those cards out of the deck for
/// every player after them, so player order matters.
///
/// # Example
///
/// ```
/// use poker_equity::deck::{DeckModel, CardMask, STANDARD_DECK};
/// use poker_equity::hand_range::parse_pockets_distributions;
/// let board = STANDARD_DECK.parse_cards("Ks7d4d").unwrap();
/// let ranges = parse_pockets_distributions(&STANDARD_DECK, board, CardMask::EMPTY, "AhKh|QQ+,AQs+,AQo+").unwrap();
/// assert_eq!(ranges[0].len(), 1);
/// assert_eq!(ranges[1].len(), 28);
/// ```
pub fn parse_pockets_distributions<D: DeckModel + ?Sized>(
    deck: &D,
    board: CardMask,
    dead: CardMask,
    text: &str,
) -> Result<Vec<PocketsDistribution>, RangeError> {
    let mut used = board | dead;
    let mut distributions = Vec::new();
    for (player, player_text) in text.split(PLAYER_SEPARATOR).enumerate() {
        let distribution = parse_distribution(player_text, used, deck)?;
        debug!(
            "player {} range '{}' expands to {} hands",
            player,
            player_text.trim(),
            distribution.len()
        );
        if let [hand] = distribution.combos() {
            used |= *hand;
        }
        distributions.push(distribution);
    }
    Ok(distributions)
}

/// four symbols with suits in the second and fourth place, like `AhKh` or `Ah Kh`
fn is_explicit_hand<D: DeckModel + ?Sized>(token: &str, deck: &D) -> bool {
    let chars: Vec<char> = token.chars().filter(|c| !c.is_whitespace()).collect();
    chars.len() == 4 && deck.suit_index_of(chars[1]).is_some() && deck.suit_index_of(chars[3]).is_some()
}

fn parse_shorthand<D: DeckModel + ?Sized>(token: &str, deck: &D) -> Result<Shorthand, RangeError> {
    let invalid = || RangeError::InvalidRangeToken(token.to_string());
    let chars: Vec<char> = token.trim().chars().collect();
    if chars.len() < 2 {
        return Err(invalid());
    }
    let r1 = deck.rank_index_of(chars[0]).ok_or_else(invalid)?;
    let r2 = deck.rank_index_of(chars[1]).ok_or_else(invalid)?;

    let mut rest = &chars[2..];
    let suitedness = match rest.first().map(|c| c.to_ascii_lowercase()) {
        Some('s') => Suitedness::Suited,
        Some('o') => Suitedness::Offsuit,
        _ => Suitedness::Any,
    };
    if suitedness != Suitedness::Any {
        rest = &rest[1..];
    }
    let plus = match rest {
        [] => false,
        ['+'] => true,
        _ => return Err(invalid()),
    };

    Ok(Shorthand {
        high: r1.max(r2),
        low: r1.min(r2),
        suitedness,
        plus,
    })
}

fn add_shorthand<D: DeckModel + ?Sized>(
    shorthand: &Shorthand,
    dead: CardMask,
    deck: &D,
    combos: &mut Vec<CardMask>,
) {
    let Shorthand {
        high,
        low,
        suitedness,
        plus,
    } = *shorthand;
    let top_rank = deck.rank_count() - 1;

    if !plus {
        add_rank_pair(high, low, suitedness, dead, deck, combos);
    } else if high == low {
        // pairs climb to aces
        for r in high..=top_rank {
            add_rank_pair(r, r, suitedness, dead, deck, combos);
        }
    } else if high - low == 1 {
        // connectors climb the top card, the kicker stays
        for r in high..=top_rank {
            add_rank_pair(r, low, suitedness, dead, deck, combos);
        }
    } else {
        // the kicker climbs up to one below the top card
        for r in low..high {
            add_rank_pair(high, r, suitedness, dead, deck, combos);
        }
    }
}

/// `ceiling-floor`, every moving card steps down in lock step
fn add_dash_range<D: DeckModel + ?Sized>(
    token: &str,
    dead: CardMask,
    deck: &D,
    combos: &mut Vec<CardMask>,
) -> Result<(), RangeError> {
    let invalid = || RangeError::InvalidRangeToken(token.to_string());
    let mut sides = token.split(RANGE_SEPARATOR);
    let (ceiling, floor) = match (sides.next(), sides.next(), sides.next()) {
        (Some(c), Some(f), None) => (parse_shorthand(c, deck)?, parse_shorthand(f, deck)?),
        _ => return Err(invalid()),
    };
    if ceiling.plus || floor.plus {
        return Err(invalid());
    }
    let suitedness = match (ceiling.suitedness, floor.suitedness) {
        (Suitedness::Any, s) => s,
        (s, Suitedness::Any) => s,
        (a, b) if a == b => a,
        _ => return Err(invalid()),
    };

    if ceiling.high < floor.high || ceiling.low < floor.low {
        return Ok(());
    }
    let high_moves = ceiling.high != floor.high;
    let low_moves = ceiling.low != floor.low;
    let high_steps = ceiling.high - floor.high;
    let low_steps = ceiling.low - floor.low;
    if high_moves && low_moves && high_steps != low_steps {
        return Err(invalid());
    }

    let steps = high_steps.max(low_steps);
    for step in 0..=steps {
        let high = if high_moves { floor.high + step } else { floor.high };
        let low = if low_moves { floor.low + step } else { floor.low };
        if low > high {
            continue;
        }
        add_rank_pair(high, low, suitedness, dead, deck, combos);
    }
    Ok(())
}

/// adds every suit combination of one rank pair
fn add_rank_pair<D: DeckModel + ?Sized>(
    high: usize,
    low: usize,
    suitedness: Suitedness,
    dead: CardMask,
    deck: &D,
    combos: &mut Vec<CardMask>,
) {
    let n_suits = deck.suit_count();
    for s1 in 0..n_suits {
        for s2 in 0..n_suits {
            let keep = if high == low {
                s1 < s2 && suitedness != Suitedness::Suited
            } else {
                match suitedness {
                    Suitedness::Any => true,
                    Suitedness::Suited => s1 == s2,
                    Suitedness::Offsuit => s1 != s2,
                }
            };
            if !keep {
                continue;
            }
            let hand = deck.to_card_mask(deck.to_card_index_parts(high, s1))
                | deck.to_card_mask(deck.to_card_index_parts(low, s2));
            if !hand.intersects(dead) {
                combos.push(hand);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::STANDARD_DECK;

    fn sizes(text: &str, board: &str) -> Vec<usize> {
        let board = STANDARD_DECK.parse_cards(board).unwrap();
        parse_pockets_distributions(&STANDARD_DECK, board, CardMask::EMPTY, text)
            .unwrap()
            .iter()
            .map(PocketsDistribution::len)
            .collect()
    }

    fn size(text: &str) -> usize {
        parse_distribution(text, CardMask::EMPTY, &STANDARD_DECK)
            .unwrap()
            .len()
    }

    #[test]
    fn test_non_pair_plus() {
        assert_eq!(sizes("AQ|AQs|AQo|AQ+|AQs+|AQo+", ""), vec![16, 4, 12, 32, 8, 24]);
        assert_eq!(sizes("AK|AKs|AKo|AK+|AKs+|AKo+", ""), vec![16, 4, 12, 16, 4, 12]);
        assert_eq!(sizes("KQ|KQs|KQo|KQ+|KQs+|KQo+", ""), vec![16, 4, 12, 32, 8, 24]);
        // the kicker climbs up to the king
        assert_eq!(size("A2s+"), 48);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            sizes("AA|AAs|AAo|AA+|AAs+|AAo+|QQ|QQs|QQo|QQ+|QQs+|QQo+", ""),
            vec![6, 0, 6, 6, 0, 6, 6, 0, 6, 18, 0, 18]
        );
        assert_eq!(size("22+"), 78);
    }

    #[test]
    fn test_pair_dash_ranges() {
        assert_eq!(
            sizes("JJ-JJ|JJs-JJ|JJo-JJ|JJ-99|JJs-99|JJo-99|99-JJ", ""),
            vec![6, 0, 6, 18, 0, 18, 0]
        );
    }

    #[test]
    fn test_connector_dash_ranges() {
        assert_eq!(
            sizes("JT-JT|JTs-JT|JTo-JT|JT-98|JTs-98|JTo-98|98-JT", ""),
            vec![16, 4, 12, 48, 12, 36, 0]
        );
        assert_eq!(
            sizes("J9-J9|J9s-J9|J9o-J9|J9-97|J9s-97|J9o-97|97-J9", ""),
            vec![16, 4, 12, 48, 12, 36, 0]
        );
    }

    #[test]
    fn test_kicker_dash_ranges() {
        assert_eq!(sizes("Q9-Q3|Q9s-Q3|Q9o-Q3", ""), vec![112, 28, 84]);
    }

    #[test]
    fn test_mixed_tokens() {
        assert_eq!(
            sizes("XxXx|88+,AJs+,KQs,AKo|QQ+,AQs+,AQo+", ""),
            vec![1326, 70, 50]
        );
    }

    #[test]
    fn test_fixed_hand_removes_cards() {
        assert_eq!(sizes("AhKh|QQ+,AQs+,AQo+", "Ks7d4d"), vec![1, 28]);
        // the fixed hand is dead for the wildcard too
        assert_eq!(sizes("AhKh|XxXx", "Ks7d4d"), vec![1, 1081]);
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(size("XxXx"), 1326);
        assert_eq!(size(""), 1326);
        assert_eq!(size("xxxx"), 1326);
    }

    #[test]
    fn test_duplicates_removed() {
        assert_eq!(size("AA,AA,AhAd"), 6);
        assert_eq!(size("AK,AKs"), 16);
        assert_eq!(size("KA"), 16);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let dead = STANDARD_DECK.parse_cards("2c3c").unwrap();
        let text = "88+,AJs+,KQs,AKo,T9s-65s";
        let first = parse_distribution(text, dead, &STANDARD_DECK).unwrap();
        let second = parse_distribution(text, dead, &STANDARD_DECK).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_hands() {
        let range = parse_distribution("AhKh", CardMask::EMPTY, &STANDARD_DECK).unwrap();
        assert_eq!(range.combos(), &[STANDARD_DECK.parse_cards("AhKh").unwrap()]);
        assert!(range.contains(STANDARD_DECK.parse_cards("KhAh").unwrap()));
        let dead = STANDARD_DECK.parse_cards("Kh").unwrap();
        assert!(parse_distribution("AhKh", dead, &STANDARD_DECK).unwrap().is_empty());
        // spaces inside an explicit hand
        assert_eq!(size("Ah Kh"), 1);
        assert_eq!(size(" Ah Kh , Qs Qd"), 2);
    }

    #[test]
    fn test_invalid_tokens() {
        let bad = ["AhAh", "AxKx", "A", "ZZ", "AK+s", "AKx", "QQ+-JJ", "JJ-", "AKs-QJo", "JT-96", "A-K-Q"];
        for token in bad.iter() {
            assert!(
                parse_distribution(token, CardMask::EMPTY, &STANDARD_DECK).is_err(),
                "{} should not parse",
                token
            );
        }
    }
}
