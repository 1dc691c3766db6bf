use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use super::{Calculator, EnumerationType, EquityConfig, EvaluationResult, Tally};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::{CardMask, CardParseError, DeckModel};
use crate::enumeration::{
    CancelToken, Deal, ExhaustiveEnumerator, ExhaustivePocketsEnumerator, RandomEnumerator,
    RandomPocketsEnumerator,
};
use crate::hand_evaluator::ShowdownValue;
use crate::hand_range::{parse_pockets_distributions, PocketsDistribution, RangeError};

#[derive(Debug, Error)]
pub enum EquityError {
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("too few players")]
    TooFewPlayers,
    #[error("too many players")]
    TooManyPlayers,
    #[error("too many board cards")]
    TooManyBoardCards,
    #[error("range of player {player} has no live hands")]
    EmptyRange { player: usize },
    #[error("conflicting ranges")]
    ConflictingRanges,
    #[error("equity computation cancelled")]
    Cancelled,
    #[error("equity worker thread panicked")]
    WorkerPanicked,
    #[error("invalid equity config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Parses the board, dead cards and player ranges, then computes equities
///
/// # Arguments
///
/// * `calculator` Game rules used to score showdowns
/// * `board_text` Known board cards, e.g. "Ks7d4d"
/// * `dead_text` Cards known to be out of play
/// * `pockets_text` Player ranges separated by '|'
/// * `config` Enumeration mode, trial budget and threads
///
/// # Example
/// ```
/// use poker_equity::equity_calculator::{enumerate_and_evaluate, EquityConfig, HoldemCalculator};
/// let config = EquityConfig::default().exhaustive();
/// let results = enumerate_and_evaluate(&HoldemCalculator, "Ks7d4d", "", "AhKh|Td9s", &config).unwrap();
/// assert_eq!(results.len(), 2);
/// assert!(results[0].probability > results[1].probability);
/// ```
pub fn enumerate_and_evaluate<C: Calculator>(
    calculator: &C,
    board_text: &str,
    dead_text: &str,
    pockets_text: &str,
    config: &EquityConfig,
) -> Result<Vec<EvaluationResult>, EquityError> {
    let deck = calculator.deck();
    let board = deck.parse_cards(board_text)?;
    let dead = deck.parse_cards(dead_text)?;
    if board.intersects(dead) {
        return Err(CardParseError::DuplicateCard(deck.format_cards(board & dead)).into());
    }
    let distributions = parse_pockets_distributions(deck, board, dead, pockets_text)?;
    compute_equity(calculator, config, board, dead, &distributions)
}

/// Computes equities for already parsed ranges
///
/// Returns one result per player in range order.
pub fn compute_equity<C: Calculator>(
    calculator: &C,
    config: &EquityConfig,
    board: CardMask,
    dead: CardMask,
    distributions: &[PocketsDistribution],
) -> Result<Vec<EvaluationResult>, EquityError> {
    compute_equity_with_cancel(calculator, config, board, dead, distributions, &CancelToken::new())
}

/// Same as `compute_equity`, stopping early once `cancel` is set
pub fn compute_equity_with_cancel<C: Calculator>(
    calculator: &C,
    config: &EquityConfig,
    board: CardMask,
    dead: CardMask,
    distributions: &[PocketsDistribution],
    cancel: &CancelToken,
) -> Result<Vec<EvaluationResult>, EquityError> {
    let n_players = distributions.len();
    if n_players < MIN_PLAYERS {
        return Err(EquityError::TooFewPlayers);
    }
    if n_players > MAX_PLAYERS {
        return Err(EquityError::TooManyPlayers);
    }
    if board.count() as usize > calculator.board_card_count() {
        return Err(EquityError::TooManyBoardCards);
    }
    if let Some(player) = distributions.iter().position(PocketsDistribution::is_empty) {
        return Err(EquityError::EmptyRange { player });
    }

    let n_threads = config.threads.max(1);
    info!(
        "computing equity for {} players, {:?} enumeration, {} threads",
        n_players, config.enumeration, n_threads
    );

    let sim = Simulator {
        calculator,
        distributions,
        board,
        base: board | dead,
        board_cards_left: calculator.board_card_count() - board.count() as usize,
        n_threads,
        cancel: cancel.clone(),
    };

    let joined = crossbeam::scope(|scope| {
        let sim = &sim;
        let handles: Vec<_> = (0..n_threads)
            .map(|t| {
                scope.spawn(move |_| match config.enumeration {
                    EnumerationType::Exhaustive => sim.enumerate_all(t),
                    EnumerationType::Random => sim.sample_random(t, config.trials, config.seed),
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| EquityError::WorkerPanicked))
            .collect::<Result<Vec<Tally>, EquityError>>()
    })
    .map_err(|_| EquityError::WorkerPanicked)?;
    let tallies = joined?;

    if cancel.is_cancelled() {
        info!("equity computation cancelled");
        return Err(EquityError::Cancelled);
    }

    let tally = tallies
        .iter()
        .fold(Tally::new(n_players), |acc, t| acc.merge(t));
    let requested_none = config.enumeration == EnumerationType::Random && config.trials == 0;
    if tally.trials() == 0 && !requested_none {
        return Err(EquityError::ConflictingRanges);
    }
    info!("equity computed over {} trials", tally.trials());
    Ok(tally.into_results())
}

/// Shared read only state of one equity computation
struct Simulator<'a, C: Calculator> {
    calculator: &'a C,
    distributions: &'a [PocketsDistribution],
    board: CardMask,
    /// board and dead cards
    base: CardMask,
    board_cards_left: usize,
    n_threads: usize,
    cancel: CancelToken,
}

impl<'a, C: Calculator> Simulator<'a, C> {
    /// Walks every deal and board completion, keeping trials where
    /// `index % n_threads == thread`
    fn enumerate_all(&self, thread: usize) -> Tally {
        let cards = self.calculator.deck().card_masks();
        let n_threads = self.n_threads as u64;
        let thread = thread as u64;
        let mut tally = Tally::new(self.distributions.len());
        let mut trial_idx = 0u64;

        let deals = ExhaustivePocketsEnumerator::new(self.distributions, self.base)
            .with_cancel(self.cancel.clone());
        for deal in deals {
            let board_dead = self.base | deal.mask();
            let completions = ExhaustiveEnumerator::new(cards, self.board_cards_left, board_dead)
                .with_cancel(self.cancel.clone());
            let mut any_completion = false;
            for completion in completions {
                any_completion = true;
                if trial_idx % n_threads == thread {
                    self.play_trial(&deal, completion, &mut tally);
                }
                trial_idx += 1;
            }
            // not enough live cards left, showdown on the board as it is
            if !any_completion && !self.cancel.is_cancelled() {
                if trial_idx % n_threads == thread {
                    self.play_trial(&deal, CardMask::EMPTY, &mut tally);
                }
                trial_idx += 1;
            }
        }
        debug!("worker {} played {} of {} trials", thread, tally.trials(), trial_idx);
        tally
    }

    /// Plays this worker's share of the random trial budget
    fn sample_random(&self, thread: usize, trials: u64, seed: Option<u64>) -> Tally {
        let cards = self.calculator.deck().card_masks();
        let n_threads = self.n_threads as u64;
        let thread = thread as u64;
        let budget = trials / n_threads + if thread < trials % n_threads { 1 } else { 0 };
        let (pocket_rng, board_rng) = match seed {
            Some(seed) => (
                SmallRng::seed_from_u64(seed.wrapping_add(2 * thread)),
                SmallRng::seed_from_u64(seed.wrapping_add(2 * thread + 1)),
            ),
            None => (SmallRng::from_entropy(), SmallRng::from_entropy()),
        };

        let mut tally = Tally::new(self.distributions.len());
        let mut boards = RandomEnumerator::new(cards, self.board_cards_left, self.base, 0, board_rng);
        let deals = RandomPocketsEnumerator::new(self.distributions, self.base, budget, pocket_rng)
            .with_cancel(self.cancel.clone());
        for deal in deals {
            // not enough live cards left, showdown on the board as it is
            let completion = boards
                .sample(self.base | deal.mask())
                .unwrap_or(CardMask::EMPTY);
            self.play_trial(&deal, completion, &mut tally);
        }
        debug!("worker {} played {} of {} trials", thread, tally.trials(), budget);
        tally
    }

    fn play_trial(&self, deal: &Deal, completion: CardMask, tally: &mut Tally) {
        let board = self.board | completion;
        let mut showdowns = [ShowdownValue::default(); MAX_PLAYERS];
        for (showdown, &pocket) in showdowns.iter_mut().zip(deal.hands()) {
            *showdown = self.calculator.evaluate(board, pocket);
        }
        tally.record(&showdowns[..deal.hands().len()]);
    }
}
