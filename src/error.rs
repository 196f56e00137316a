//! Error types for deck and hand operations.

use thiserror::Error;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer undealt cards remain than were requested.
    #[error("not enough cards remaining (requested {requested}, remaining {remaining})")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of undealt cards left.
        remaining: usize,
    },
}

/// Errors that can occur when building a poker hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A poker hand must contain exactly five cards.
    #[error("poker hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The community pool must match a hold'em street: 0, 3, 4, or 5 cards.
    #[error("community pool must contain 0, 3, 4, or 5 cards, got {0}")]
    InvalidCommunitySize(usize),
}
