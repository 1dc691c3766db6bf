use super::{Card, CardMask, DeckModel, Rank, Suit};
use crate::constants::*;

/// The standard 52 card deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardDeck;

/// Process wide deck, nothing to build at runtime
pub static STANDARD_DECK: StandardDeck = StandardDeck;

/// Table for card index to single bit card mask
static CARD_MASKS: [CardMask; CARD_COUNT] = init_card_masks();

const fn init_card_masks() -> [CardMask; CARD_COUNT] {
    let mut masks = [CardMask::EMPTY; CARD_COUNT];
    let mut c = 0;
    while c < CARD_COUNT {
        let rank = c % RANK_COUNT;
        let suit = c / RANK_COUNT;
        masks[c] = CardMask::from_bits(1u64 << (SUIT_LANE_SHIFT[suit] as usize + rank));
        c += 1;
    }
    masks
}

impl DeckModel for StandardDeck {
    fn card_count(&self) -> usize {
        CARD_COUNT
    }

    fn rank_count(&self) -> usize {
        RANK_COUNT
    }

    fn suit_count(&self) -> usize {
        SUIT_COUNT
    }

    fn rank_symbols(&self) -> &str {
        RANK_SYMBOLS
    }

    fn suit_symbols(&self) -> &str {
        SUIT_SYMBOLS
    }

    fn card_masks(&self) -> &[CardMask] {
        &CARD_MASKS
    }

    fn to_card(&self, card_index: usize) -> Option<Card> {
        if card_index >= CARD_COUNT {
            return None;
        }
        let rank = Rank::from_index(self.to_rank_index(card_index))?;
        let suit = Suit::from_index(self.to_suit_index(card_index))?;
        Some(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardParseError;

    #[test]
    fn test_card_mask_table() {
        // rebuild the table the slow way
        for suit in Suit::ALL.iter() {
            for rank in Rank::ALL.iter() {
                let index = suit.index() * RANK_COUNT + rank.index();
                let lane = match suit {
                    Suit::Hearts => 0,
                    Suit::Diamonds => 32,
                    Suit::Clubs => 16,
                    Suit::Spades => 48,
                };
                let expected = CardMask::from_bits((1u64 << rank.index()) << lane);
                assert_eq!(STANDARD_DECK.to_card_mask(index), expected);
            }
        }
    }

    #[test]
    fn test_card_masks_are_distinct() {
        let all = CARD_MASKS
            .iter()
            .fold(CardMask::EMPTY, |acc, &m| acc | m);
        assert_eq!(all.count() as usize, CARD_COUNT);
        assert!(CARD_MASKS.iter().all(|m| m.count() == 1));
    }

    #[test]
    fn test_card_index_round_trip() {
        let deck = StandardDeck;
        for index in 0..CARD_COUNT {
            let card = deck.to_card(index).unwrap();
            assert_eq!(deck.to_card_index(card), index);
        }
        assert_eq!(deck.to_card(CARD_COUNT), None);
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(deck.to_card_index(ace_spades), 51);
        assert_eq!(deck.to_rank_index(51), 12);
        assert_eq!(deck.to_suit_index(51), 3);
    }

    #[test]
    fn test_parse_cards() {
        let deck = StandardDeck;
        let mask = deck.parse_cards("Ks7d4d").unwrap();
        assert_eq!(mask.count(), 3);
        assert_eq!(mask.spades(), 1 << Rank::King.index());
        assert_eq!(
            mask.diamonds(),
            (1 << Rank::Seven.index()) | (1 << Rank::Four.index())
        );
        // case insensitive and whitespace tolerant
        assert_eq!(deck.parse_cards(" ks 7D 4d ").unwrap(), mask);
        assert_eq!(deck.parse_cards("").unwrap(), CardMask::EMPTY);
    }

    #[test]
    fn test_parse_cards_errors() {
        let deck = StandardDeck;
        assert_eq!(
            deck.parse_cards("Kx"),
            Err(CardParseError::InvalidCardSyntax {
                symbol: 'x',
                position: 1
            })
        );
        assert!(matches!(
            deck.parse_cards("Ks7"),
            Err(CardParseError::OddCardText(_))
        ));
        assert!(matches!(
            deck.parse_cards("KsKs"),
            Err(CardParseError::DuplicateCard(_))
        ));
        assert_eq!(deck.try_parse_cards("1s"), None);
        assert!(deck.try_parse_cards("As").is_some());
    }

    #[test]
    fn test_format_cards() {
        let deck = StandardDeck;
        let mask = deck.parse_cards("AhKh").unwrap();
        assert_eq!(deck.format_cards(mask), "KhAh");
        assert_eq!(deck.parse_cards(&deck.format_cards(mask)).unwrap(), mask);
    }
}
