//! Intents for the photo fetch lifecycle.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarsIntent {
    /// A fetch was triggered (on startup or by retry).
    FetchStarted,

    /// The repository returned `count` photos.
    FetchSucceeded { count: usize },

    /// The repository failed. The cause is intentionally not carried.
    FetchFailed,
}

impl Intent for MarsIntent {}
