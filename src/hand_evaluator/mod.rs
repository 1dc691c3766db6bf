//! Constant time 5 to 7 card hand evaluation over card masks

mod evaluator;
mod hand_value;
pub mod tables;

pub use evaluator::evaluate;
pub use hand_value::{HandCategory, HandValue, LowValue, ShowdownValue};
