use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::{is_cancelled, CancelToken};
use crate::deck::CardMask;

/// Yields every k card combination of `cards` that avoids the dead mask
///
/// Card indexes are walked in decreasing order on every level and a level
/// is backtracked once its counter runs out, so each combination comes out
/// exactly once. `k == 0` yields a single empty mask.
#[derive(Debug, Clone)]
pub struct ExhaustiveEnumerator<'a> {
    cards: &'a [CardMask],
    k: usize,
    dead: CardMask,
    /// next card index to try on each level, counting down
    index: Vec<usize>,
    /// cards chosen up to and including each level
    partial: Vec<CardMask>,
    level: usize,
    exhausted: bool,
    cancel: Option<CancelToken>,
}

impl<'a> ExhaustiveEnumerator<'a> {
    pub fn new(cards: &'a [CardMask], k: usize, dead: CardMask) -> Self {
        let mut enumerator = ExhaustiveEnumerator {
            cards,
            k,
            dead,
            index: vec![0; k.max(1)],
            partial: vec![CardMask::EMPTY; k.max(1)],
            level: 0,
            exhausted: false,
            cancel: None,
        };
        enumerator.reset();
        enumerator
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Restart from the first combination
    pub fn reset(&mut self) {
        self.level = 0;
        self.index[0] = self.cards.len();
        self.exhausted = false;
    }
}

impl<'a> Iterator for ExhaustiveEnumerator<'a> {
    type Item = CardMask;

    fn next(&mut self) -> Option<CardMask> {
        if self.exhausted {
            return None;
        }
        if is_cancelled(&self.cancel) {
            self.exhausted = true;
            return None;
        }
        if self.k == 0 {
            self.exhausted = true;
            return Some(CardMask::EMPTY);
        }
        loop {
            let level = self.level;
            if self.index[level] == 0 {
                if level == 0 {
                    self.exhausted = true;
                    return None;
                }
                self.level -= 1;
                continue;
            }
            self.index[level] -= 1;
            let card = self.cards[self.index[level]];
            if card.intersects(self.dead) {
                continue;
            }
            self.partial[level] = if level == 0 {
                card
            } else {
                self.partial[level - 1] | card
            };
            if level + 1 == self.k {
                return Some(self.partial[level]);
            }
            self.level += 1;
            self.index[level + 1] = self.index[level];
        }
    }
}

/// Draws k distinct live cards per trial for a fixed number of trials
///
/// Cards are unique within one trial, trials are independent of each other.
/// Nothing is yielded when fewer than k cards are live.
#[derive(Debug, Clone)]
pub struct RandomEnumerator<'a, R: Rng> {
    cards: &'a [CardMask],
    /// every card in `cards`
    all: CardMask,
    k: usize,
    dead: CardMask,
    trials_left: u64,
    rng: R,
    card_dist: Option<Uniform<usize>>,
    cancel: Option<CancelToken>,
}

impl<'a, R: Rng> RandomEnumerator<'a, R> {
    pub fn new(cards: &'a [CardMask], k: usize, dead: CardMask, trials: u64, rng: R) -> Self {
        let all = cards.iter().fold(CardMask::EMPTY, |acc, &c| acc | c);
        let card_dist = if cards.is_empty() {
            None
        } else {
            Some(Uniform::from(0..cards.len()))
        };
        let mut enumerator = RandomEnumerator {
            cards,
            all,
            k,
            dead,
            trials_left: trials,
            rng,
            card_dist,
            cancel: None,
        };
        if enumerator.live_count(dead) < k {
            enumerator.trials_left = 0;
        }
        enumerator
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn trials_left(&self) -> u64 {
        self.trials_left
    }

    fn live_count(&self, dead: CardMask) -> usize {
        (self.all & !dead).count() as usize
    }

    /// Draws k live cards avoiding `dead` instead of the enumerator's own
    /// dead mask, outside of the trial budget
    ///
    /// `None` when fewer than k cards are live.
    pub fn sample(&mut self, dead: CardMask) -> Option<CardMask> {
        if self.live_count(dead) < self.k {
            return None;
        }
        let mut drawn = CardMask::EMPTY;
        if let Some(card_dist) = &self.card_dist {
            let mut used = dead;
            let mut n_drawn = 0;
            while n_drawn < self.k {
                let card = self.cards[card_dist.sample(&mut self.rng)];
                if card.intersects(used) {
                    continue;
                }
                used |= card;
                drawn |= card;
                n_drawn += 1;
            }
        }
        Some(drawn)
    }
}

impl<'a, R: Rng> Iterator for RandomEnumerator<'a, R> {
    type Item = CardMask;

    fn next(&mut self) -> Option<CardMask> {
        if self.trials_left == 0 || is_cancelled(&self.cancel) {
            return None;
        }
        self.trials_left -= 1;
        self.sample(self.dead)
    }
}
