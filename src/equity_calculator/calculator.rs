use crate::deck::{CardMask, DeckModel, StandardDeck, STANDARD_DECK};
use crate::constants::BOARD_CARDS;
use crate::hand_evaluator::{evaluate, ShowdownValue};

/// Rules of one game: the deck, the board size and showdown scoring
pub trait Calculator: Sync {
    type Deck: DeckModel + Sync;

    fn deck(&self) -> &Self::Deck;

    /// cards on a complete board
    fn board_card_count(&self) -> usize;

    /// Scores a player's pocket against a complete board
    fn evaluate(&self, board: CardMask, pocket: CardMask) -> ShowdownValue;
}

/// Texas holdem, best five of seven cards, high only
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldemCalculator;

impl Calculator for HoldemCalculator {
    type Deck = StandardDeck;

    fn deck(&self) -> &StandardDeck {
        &STANDARD_DECK
    }

    fn board_card_count(&self) -> usize {
        BOARD_CARDS
    }

    fn evaluate(&self, board: CardMask, pocket: CardMask) -> ShowdownValue {
        let cards = board | pocket;
        ShowdownValue::high_only(evaluate(cards, cards.count() as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_evaluator::HandCategory;

    #[test]
    fn test_holdem_showdown() {
        let calc = HoldemCalculator;
        let board = calc.deck().parse_cards("Ks7d4d2c9h").unwrap();
        let pocket = calc.deck().parse_cards("AhKh").unwrap();
        let showdown = calc.evaluate(board, pocket);
        assert_eq!(showdown.low, None);
        assert_eq!(showdown.high.map(|h| h.category()), Some(HandCategory::OnePair));
    }
}
