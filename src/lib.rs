//! Card-handling primitives for tabletop card games, with optional `no_std`
//! support.
//!
//! The crate provides a shuffled multi-deck [`Deck`] with sequential
//! dealing, blackjack scoring via [`BlackjackHand`], and poker hand
//! classification via [`PokerHand`] and the community-card search in
//! [`HoldemHand`]. There is no betting, turn orchestration, or I/O here;
//! game logic consumes the dealt cards, scores, and categories.
//!
//! # Example
//!
//! ```
//! use cardrs::{Deck, PokerHand};
//!
//! let mut deck = Deck::single(42);
//! let cards = deck.deal(5)?;
//! let hand = PokerHand::new(cards)?;
//! let _category = hand.category();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod holdem;
pub mod poker;

// Re-export main types
pub use blackjack::BlackjackHand;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, HandError};
pub use holdem::HoldemHand;
pub use poker::{HandCategory, PokerHand};
