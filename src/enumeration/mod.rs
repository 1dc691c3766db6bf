//! Card combination enumerators
//!
//! Every enumerator is a plain `Iterator` that skips cards in a dead mask
//! and stops early once its `CancelToken` is set.

mod combinations;
mod pockets;

pub use combinations::{ExhaustiveEnumerator, RandomEnumerator};
pub use pockets::{Deal, ExhaustivePocketsEnumerator, RandomPocketsEnumerator};

use std::sync::Arc;

use crossbeam::atomic::AtomicCell;

/// Shared stop flag for long running enumerations
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicCell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load()
    }
}

pub(crate) fn is_cancelled(token: &Option<CancelToken>) -> bool {
    token.as_ref().map_or(false, CancelToken::is_cancelled)
}
