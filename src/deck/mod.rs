//! Card identity, dense card indexes and 64 bit card masks
//!
//! Card indexes are laid out as `suit_index * ranks_per_suit + rank_index`.
//! The evaluator tables depend on this order.

mod card;
mod card_mask;
mod standard_deck;

pub use card::{Card, Rank, Suit};
pub use card_mask::CardMask;
pub use standard_deck::{StandardDeck, STANDARD_DECK};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("invalid card symbol '{symbol}' at position {position}")]
    InvalidCardSyntax { symbol: char, position: usize },
    #[error("card text '{0}' does not split into rank and suit pairs")]
    OddCardText(String),
    #[error("card {0} appears more than once")]
    DuplicateCard(String),
}

/// The deck shape seen by the parser, enumerators and evaluator
pub trait DeckModel {
    fn card_count(&self) -> usize;
    fn rank_count(&self) -> usize;
    fn suit_count(&self) -> usize;

    /// rank symbols ordered by rank index
    fn rank_symbols(&self) -> &str;
    /// suit symbols ordered by suit index
    fn suit_symbols(&self) -> &str;

    /// single bit mask for every card index
    fn card_masks(&self) -> &[CardMask];

    fn to_card(&self, card_index: usize) -> Option<Card>;

    fn to_card_index(&self, card: Card) -> usize {
        self.to_card_index_parts(card.rank.index(), card.suit.index())
    }

    fn to_card_index_parts(&self, rank_index: usize, suit_index: usize) -> usize {
        suit_index * self.rank_count() + rank_index
    }

    fn to_rank_index(&self, card_index: usize) -> usize {
        card_index % self.rank_count()
    }

    fn to_suit_index(&self, card_index: usize) -> usize {
        card_index / self.rank_count()
    }

    fn to_card_mask(&self, card_index: usize) -> CardMask {
        self.card_masks()[card_index]
    }

    /// Case insensitive rank symbol lookup
    fn rank_index_of(&self, c: char) -> Option<usize> {
        let upper = c.to_ascii_uppercase();
        self.rank_symbols().chars().position(|s| s == upper)
    }

    /// Case insensitive suit symbol lookup
    fn suit_index_of(&self, c: char) -> Option<usize> {
        let upper = c.to_ascii_uppercase();
        self.suit_symbols().chars().position(|s| s == upper)
    }

    /// Converts a string of rank then suit pairs into a card mask
    ///
    /// Whitespace between symbols is skipped, the empty string is the empty
    /// mask.
    ///
    /// # Example
    ///
    /// ```
    /// use poker_equity::deck::{DeckModel, STANDARD_DECK};
    /// let board = STANDARD_DECK.parse_cards("Ks 7d 4d").unwrap();
    /// assert_eq!(board.count(), 3);
    /// ```
    fn parse_cards(&self, text: &str) -> Result<CardMask, CardParseError> {
        let symbols: Vec<(usize, char)> = text
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .collect();
        if symbols.len() % 2 != 0 {
            return Err(CardParseError::OddCardText(text.to_string()));
        }

        let mut cards = CardMask::EMPTY;
        for pair in symbols.chunks_exact(2) {
            let (rank_pos, rank_char) = pair[0];
            let (suit_pos, suit_char) = pair[1];
            let rank = self
                .rank_index_of(rank_char)
                .ok_or(CardParseError::InvalidCardSyntax {
                    symbol: rank_char,
                    position: rank_pos,
                })?;
            let suit = self
                .suit_index_of(suit_char)
                .ok_or(CardParseError::InvalidCardSyntax {
                    symbol: suit_char,
                    position: suit_pos,
                })?;
            let card = self.to_card_mask(self.to_card_index_parts(rank, suit));
            if cards.intersects(card) {
                return Err(CardParseError::DuplicateCard(format!(
                    "{}{}",
                    rank_char, suit_char
                )));
            }
            cards |= card;
        }
        Ok(cards)
    }

    /// Same as `parse_cards` but without the error detail
    fn try_parse_cards(&self, text: &str) -> Option<CardMask> {
        self.parse_cards(text).ok()
    }

    /// Converts a card mask back into rank then suit pairs, lowest card index first
    fn format_cards(&self, mask: CardMask) -> String {
        let mut text = String::new();
        for card_index in 0..self.card_count() {
            if mask.intersects(self.to_card_mask(card_index)) {
                if let Some(card) = self.to_card(card_index) {
                    text.push_str(&card.to_string());
                }
            }
        }
        text
    }
}
