use serde::Serialize;

use crate::hand_evaluator::ShowdownValue;

// pot share that counts as winning the whole pot
const SCOOP_SHARE: f64 = 0.99;

/// Showdown statistics for one player
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub high_win: u64,
    pub high_tie: u64,
    pub high_lose: u64,
    pub low_win: u64,
    pub low_tie: u64,
    pub low_lose: u64,
    pub scoop: u64,
    /// sum of pot shares over all trials
    pub expected_value: f64,
    /// share of the pot won on average, 0 to 100
    pub probability: f64,
}

impl EvaluationResult {
    fn merge(&mut self, other: &EvaluationResult) {
        self.high_win += other.high_win;
        self.high_tie += other.high_tie;
        self.high_lose += other.high_lose;
        self.low_win += other.low_win;
        self.low_tie += other.low_tie;
        self.low_lose += other.low_lose;
        self.scoop += other.scoop;
        self.expected_value += other.expected_value;
    }
}

/// Results of one worker, merged once every worker is done
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    results: Vec<EvaluationResult>,
    trials: u64,
}

impl Tally {
    pub fn new(n_players: usize) -> Self {
        Tally {
            results: vec![EvaluationResult::default(); n_players],
            trials: 0,
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Splits the pot of a single trial
    ///
    /// Half the pot goes to the best high hand and half to the best low hand
    /// when someone qualifies for low, otherwise high takes it all. Tied
    /// winners share their half evenly.
    pub fn record(&mut self, showdowns: &[ShowdownValue]) {
        let best_high = showdowns.iter().filter_map(|s| s.high).max();
        let best_low = showdowns.iter().filter_map(|s| s.low).min();
        let high_winners = showdowns
            .iter()
            .filter(|s| s.high.is_some() && s.high == best_high)
            .count();
        let low_winners = showdowns
            .iter()
            .filter(|s| s.low.is_some() && s.low == best_low)
            .count();

        let (high_pot, low_pot) = match (best_high, best_low) {
            (Some(_), Some(_)) => (0.5, 0.5),
            (Some(_), None) => (1.0, 0.0),
            (None, Some(_)) => (0.0, 1.0),
            (None, None) => (0.0, 0.0),
        };

        for (result, showdown) in self.results.iter_mut().zip(showdowns) {
            let mut share = 0.0;
            if showdown.high.is_some() {
                if showdown.high == best_high {
                    if high_winners == 1 {
                        result.high_win += 1;
                    } else {
                        result.high_tie += 1;
                    }
                    share += high_pot / high_winners as f64;
                } else {
                    result.high_lose += 1;
                }
            }
            if showdown.low.is_some() {
                if showdown.low == best_low {
                    if low_winners == 1 {
                        result.low_win += 1;
                    } else {
                        result.low_tie += 1;
                    }
                    share += low_pot / low_winners as f64;
                } else {
                    result.low_lose += 1;
                }
            }
            result.expected_value += share;
            if share >= SCOOP_SHARE {
                result.scoop += 1;
            }
        }
        self.trials += 1;
    }

    pub fn merge(mut self, other: &Tally) -> Tally {
        for (result, other) in self.results.iter_mut().zip(other.results.iter()) {
            result.merge(other);
        }
        self.trials += other.trials;
        self
    }

    /// Turns the expected value sums into percentages
    pub fn into_results(mut self) -> Vec<EvaluationResult> {
        let trials = self.trials;
        for result in self.results.iter_mut() {
            result.probability = if trials == 0 {
                0.0
            } else {
                result.expected_value / trials as f64 * 100.0
            };
        }
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_evaluator::{HandValue, LowValue};

    fn high(bits: u32) -> ShowdownValue {
        ShowdownValue::high_only(HandValue::new(bits))
    }

    fn high_low(high: u32, low: u32) -> ShowdownValue {
        ShowdownValue {
            high: Some(HandValue::new(high)),
            low: Some(LowValue::new(low)),
        }
    }

    #[test]
    fn test_high_only_win() {
        let mut tally = Tally::new(2);
        tally.record(&[high(10), high(5)]);
        let results = tally.into_results();
        assert_eq!(results[0].high_win, 1);
        assert_eq!(results[0].scoop, 1);
        assert_eq!(results[0].probability, 100.0);
        assert_eq!(results[1].high_lose, 1);
        assert_eq!(results[1].probability, 0.0);
        // nobody qualifies for low
        assert_eq!(results[1].low_lose, 0);
    }

    #[test]
    fn test_three_way_tie() {
        let mut tally = Tally::new(3);
        tally.record(&[high(7), high(7), high(7)]);
        let results = tally.into_results();
        for result in &results {
            assert_eq!(result.high_tie, 1);
            assert_eq!(result.scoop, 0);
            assert!((result.probability - 100.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_split_pot() {
        let mut tally = Tally::new(3);
        tally.record(&[
            high_low(10, 0x76543),
            high(5),
            high_low(3, 0x54321),
        ]);
        let results = tally.into_results();
        // high half only
        assert_eq!(results[0].high_win, 1);
        assert_eq!(results[0].low_lose, 1);
        assert_eq!(results[0].expected_value, 0.5);
        assert_eq!(results[0].scoop, 0);
        // low half only
        assert_eq!(results[2].low_win, 1);
        assert_eq!(results[2].high_lose, 1);
        assert_eq!(results[2].probability, 50.0);
        assert_eq!(results[1].expected_value, 0.0);
    }

    #[test]
    fn test_scoop_both_halves() {
        let mut tally = Tally::new(2);
        tally.record(&[high_low(10, 0x54321), high_low(3, 0x76543)]);
        let results = tally.into_results();
        assert_eq!(results[0].scoop, 1);
        assert_eq!(results[0].expected_value, 1.0);
    }

    #[test]
    fn test_merge_and_zero_trials() {
        let mut a = Tally::new(2);
        a.record(&[high(10), high(5)]);
        let mut b = Tally::new(2);
        b.record(&[high(5), high(10)]);
        let merged = a.merge(&b);
        assert_eq!(merged.trials(), 2);
        let results = merged.into_results();
        assert_eq!(results[0].probability, 50.0);
        assert_eq!(results[1].high_win, 1);

        let empty = Tally::new(2).into_results();
        assert_eq!(empty[0].probability, 0.0);
    }
}
