use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CardParseError;
use crate::constants::{RANK_SYMBOLS, SUIT_SYMBOLS};

/// Card rank, ordered from deuce to ace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// 0 for a deuce up to 12 for an ace
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        Rank::ALL.get(index).copied()
    }

    /// Case insensitive rank symbol lookup
    ///
    /// # Example
    ///
    /// ```
    /// use poker_equity::deck::Rank;
    /// assert_eq!(Rank::from_char('q'), Some(Rank::Queen));
    /// assert_eq!(Rank::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Rank> {
        let upper = c.to_ascii_uppercase();
        RANK_SYMBOLS
            .chars()
            .position(|s| s == upper)
            .and_then(Rank::from_index)
    }

    pub fn to_char(self) -> char {
        RANK_SYMBOLS.as_bytes()[self.index()] as char
    }
}

/// Card suit, ordered by suit index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Suit> {
        Suit::ALL.get(index).copied()
    }

    /// Case insensitive suit symbol lookup
    pub fn from_char(c: char) -> Option<Suit> {
        let upper = c.to_ascii_uppercase();
        SUIT_SYMBOLS
            .chars()
            .position(|s| s == upper)
            .and_then(Suit::from_index)
    }

    /// Lower case suit symbol
    pub fn to_char(self) -> char {
        (SUIT_SYMBOLS.as_bytes()[self.index()] as char).to_ascii_lowercase()
    }
}

/// A single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    /// Writes the card as rank then suit
    ///
    /// # Example
    /// ```
    /// // prints 'Ah'
    /// use poker_equity::deck::{Card, Rank, Suit};
    /// let card = Card::new(Rank::Ace, Suit::Hearts);
    /// assert_eq!(card.to_string(), "Ah");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(CardParseError::OddCardText(s.to_string()));
        }
        let rank = Rank::from_char(chars[0]).ok_or(CardParseError::InvalidCardSyntax {
            symbol: chars[0],
            position: 0,
        })?;
        let suit = Suit::from_char(chars[1]).ok_or(CardParseError::InvalidCardSyntax {
            symbol: chars[1],
            position: 1,
        })?;
        Ok(Card::new(rank, suit))
    }
}
