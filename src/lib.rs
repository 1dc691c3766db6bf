//! # Poker Equity
//! Multi-way range vs range equity for texas holdem
//!
//! Currently supports
//!  - exhaustive and monte carlo equity with high/low pot splitting
//!  - constant time hand evaluation over 64 bit card masks
//!  - range notation such as `QQ+,AQs+,AQo+` or `JT-98`
//!
//! ## Equity Calculator
//!
//! ```
//! use poker_equity::equity_calculator::{enumerate_and_evaluate, EquityConfig, HoldemCalculator};
//! let config = EquityConfig::default().random(10000).with_threads(2);
//! let results = enumerate_and_evaluate(
//!     &HoldemCalculator,
//!     "Ks7d4d",
//!     "",
//!     "AhKh|QQ+,AQs+,AQo+|XxXx",
//!     &config,
//! ).unwrap();
//! let total: f64 = results.iter().map(|r| r.probability).sum();
//! assert!((total - 100.0).abs() < 1e-6);
//! ```
//!
//! ## Hand Evaluator
//!
//! ```
//! use poker_equity::deck::{DeckModel, STANDARD_DECK};
//! use poker_equity::hand_evaluator::{evaluate, HandCategory};
//! // card indexes are suit * 13 + rank
//! let hand = STANDARD_DECK.parse_cards("2h2d2c2s3h").unwrap();
//! let score = evaluate(hand, 5);
//! assert_eq!(score.category(), HandCategory::Quads);
//! ```

extern crate crossbeam;
extern crate rand;
extern crate serde;
extern crate serde_json;

pub use read_write;

pub mod constants;
pub mod deck;
pub mod enumeration;
pub mod equity_calculator;
pub mod hand_evaluator;
pub mod hand_range;
