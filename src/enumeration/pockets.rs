use log::warn;
use rand::Rng;

use super::{is_cancelled, CancelToken};
use crate::constants::{DEFAULT_RANDOM_TRIALS, MAX_PLAYERS, MAX_REJECTED_DEALS, POCKET_SAMPLE_RETRIES};
use crate::deck::CardMask;
use crate::hand_range::PocketsDistribution;

/// One pocket hand per player, in player order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    hands: [CardMask; MAX_PLAYERS],
    len: usize,
}

impl Deal {
    fn new(len: usize) -> Self {
        Deal {
            hands: [CardMask::EMPTY; MAX_PLAYERS],
            len,
        }
    }

    pub fn hands(&self) -> &[CardMask] {
        &self.hands[..self.len]
    }

    /// every card held by any player
    pub fn mask(&self) -> CardMask {
        self.hands()
            .iter()
            .fold(CardMask::EMPTY, |acc, &hand| acc | hand)
    }
}

/// Players whose distribution holds a single hand are dealt once up front
struct Setup {
    deal: Deal,
    fixed: [bool; MAX_PLAYERS],
    /// dead cards plus every fixed hand
    base: CardMask,
    valid: bool,
}

impl Setup {
    fn new(distributions: &[PocketsDistribution], dead: CardMask) -> Self {
        let n_players = distributions.len();
        let mut setup = Setup {
            deal: Deal::new(n_players.min(MAX_PLAYERS)),
            fixed: [false; MAX_PLAYERS],
            base: dead,
            valid: n_players > 0 && n_players <= MAX_PLAYERS,
        };
        if !setup.valid {
            return setup;
        }
        for (i, dist) in distributions.iter().enumerate() {
            match dist.combos() {
                [] => setup.valid = false,
                [hand] => {
                    // fixed hands may not share cards with each other or the dead cards
                    if hand.intersects(setup.base) {
                        setup.valid = false;
                    }
                    setup.fixed[i] = true;
                    setup.deal.hands[i] = *hand;
                    setup.base |= *hand;
                }
                _ => {}
            }
        }
        setup
    }
}

/// Yields every collision free deal across the players' distributions
///
/// `dead` holds the board and dead cards and must not already contain the
/// players' own hands.
pub struct ExhaustivePocketsEnumerator<'a> {
    distributions: &'a [PocketsDistribution],
    deal: Deal,
    /// players with more than one option
    free: Vec<usize>,
    /// next option to try for each free player
    cursor: Vec<usize>,
    /// cards taken before each free player is dealt
    used: Vec<CardMask>,
    level: usize,
    valid: bool,
    exhausted: bool,
    cancel: Option<CancelToken>,
}

impl<'a> ExhaustivePocketsEnumerator<'a> {
    pub fn new(distributions: &'a [PocketsDistribution], dead: CardMask) -> Self {
        let setup = Setup::new(distributions, dead);
        let free: Vec<usize> = (0..setup.deal.len).filter(|&i| !setup.fixed[i]).collect();
        let levels = free.len().max(1);
        let mut used = vec![CardMask::EMPTY; levels];
        used[0] = setup.base;
        ExhaustivePocketsEnumerator {
            distributions,
            deal: setup.deal,
            free,
            cursor: vec![0; levels],
            used,
            level: 0,
            valid: setup.valid,
            exhausted: !setup.valid,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn reset(&mut self) {
        self.level = 0;
        self.cursor[0] = 0;
        self.exhausted = !self.valid;
    }
}

impl<'a> Iterator for ExhaustivePocketsEnumerator<'a> {
    type Item = Deal;

    fn next(&mut self) -> Option<Deal> {
        if self.exhausted {
            return None;
        }
        if is_cancelled(&self.cancel) {
            self.exhausted = true;
            return None;
        }
        if self.free.is_empty() {
            self.exhausted = true;
            return Some(self.deal);
        }
        loop {
            let level = self.level;
            let player = self.free[level];
            let options = self.distributions[player].combos();
            if self.cursor[level] >= options.len() {
                if level == 0 {
                    self.exhausted = true;
                    return None;
                }
                self.level -= 1;
                continue;
            }
            let hand = options[self.cursor[level]];
            self.cursor[level] += 1;
            if hand.intersects(self.used[level]) {
                continue;
            }
            self.deal.hands[player] = hand;
            if level + 1 == self.free.len() {
                return Some(self.deal);
            }
            self.used[level + 1] = self.used[level] | hand;
            self.cursor[level + 1] = 0;
            self.level += 1;
        }
    }
}

/// Samples collision free deals for a fixed number of trials
///
/// Every player gets a few tries to draw a hand that does not collide with
/// the cards dealt so far, otherwise the deal is thrown away and retried.
/// The first player to draw rotates by one seat per deal.
pub struct RandomPocketsEnumerator<'a, R: Rng> {
    distributions: &'a [PocketsDistribution],
    deal: Deal,
    fixed: [bool; MAX_PLAYERS],
    base: CardMask,
    trials_left: u64,
    first: usize,
    rng: R,
    cancel: Option<CancelToken>,
}

impl<'a, R: Rng> RandomPocketsEnumerator<'a, R> {
    pub fn new(distributions: &'a [PocketsDistribution], dead: CardMask, trials: u64, mut rng: R) -> Self {
        let setup = Setup::new(distributions, dead);
        let n_players = setup.deal.len;
        let first = if n_players > 0 {
            rng.gen_range(0, n_players)
        } else {
            0
        };
        RandomPocketsEnumerator {
            distributions,
            deal: setup.deal,
            fixed: setup.fixed,
            base: setup.base,
            trials_left: if setup.valid { trials } else { 0 },
            first,
            rng,
            cancel: None,
        }
    }

    pub fn with_default_trials(distributions: &'a [PocketsDistribution], dead: CardMask, rng: R) -> Self {
        RandomPocketsEnumerator::new(distributions, dead, DEFAULT_RANDOM_TRIALS, rng)
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Tries to deal every player once, `false` if someone ran out of tries
    fn try_deal(&mut self) -> bool {
        let n_players = self.deal.len;
        let mut used = self.base;
        for step in 0..n_players {
            let player = (self.first + step) % n_players;
            if self.fixed[player] {
                continue;
            }
            let options = self.distributions[player].combos();
            let mut placed = false;
            for _ in 0..POCKET_SAMPLE_RETRIES {
                let hand = options[self.rng.gen_range(0, options.len())];
                if !hand.intersects(used) {
                    self.deal.hands[player] = hand;
                    used |= hand;
                    placed = true;
                    break;
                }
            }
            if !placed {
                return false;
            }
        }
        true
    }
}

impl<'a, R: Rng> Iterator for RandomPocketsEnumerator<'a, R> {
    type Item = Deal;

    fn next(&mut self) -> Option<Deal> {
        let mut rejected = 0;
        loop {
            if self.trials_left == 0 || is_cancelled(&self.cancel) {
                return None;
            }
            if self.try_deal() {
                self.trials_left -= 1;
                self.first = (self.first + 1) % self.deal.len;
                return Some(self.deal);
            }
            rejected += 1;
            if rejected >= MAX_REJECTED_DEALS {
                warn!(
                    "gave up after {} rejected deals, {} trials left unused",
                    rejected, self.trials_left
                );
                self.trials_left = 0;
                return None;
            }
        }
    }
}
