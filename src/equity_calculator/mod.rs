mod calculator;
mod config;
mod evaluation_result;
mod simulator;

pub use calculator::{Calculator, HoldemCalculator};
pub use config::{EnumerationType, EquityConfig};
pub use evaluation_result::{EvaluationResult, Tally};
pub use simulator::{
    compute_equity, compute_equity_with_cancel, enumerate_and_evaluate, EquityError,
};
