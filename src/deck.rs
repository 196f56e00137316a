//! Deck construction, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// A shuffled shoe of one or more 52-card decks with a deal cursor.
///
/// Cards are dealt sequentially from the front of the shuffled sequence.
/// Cards before the cursor count as dealt and are never returned again.
///
/// # Example
///
/// ```
/// use cardrs::Deck;
///
/// let mut deck = Deck::single(42);
/// let hole = deck.deal(2)?;
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.cards_remaining(), 50);
/// # Ok::<(), cardrs::DealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    cursor: usize,
    /// Generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled shoe containing `num_decks` copies of every
    /// (rank, suit) combination.
    ///
    /// The shoe is shuffled immediately with a generator seeded from `seed`,
    /// so construction with the same arguments always yields the same deal
    /// order.
    ///
    /// `num_decks` is expected to be at least 1. Passing 0 is not rejected,
    /// but the resulting shoe is empty and every deal fails with
    /// [`DealError::InsufficientCards`].
    #[must_use]
    pub fn new(num_decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(&mut rng);

        Self {
            cards,
            cursor: 0,
            rng,
        }
    }

    /// Creates a shuffled single-deck shoe.
    #[must_use]
    pub fn single(seed: u64) -> Self {
        Self::new(1, seed)
    }

    /// Reshuffles the entire card sequence in place.
    ///
    /// The deal cursor is left untouched, and the reorder spans dealt and
    /// undealt positions alike, so a card dealt earlier may land in the
    /// undealt region again. Shuffle only before dealing begins or when the
    /// cards dealt so far no longer matter.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals the next `num_cards` cards and advances the cursor.
    ///
    /// Dealing exactly the remaining count succeeds and exhausts the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] when fewer than `num_cards`
    /// undealt cards remain. A failed deal does not advance the cursor and
    /// returns no cards.
    pub fn deal(&mut self, num_cards: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards_remaining();
        if remaining < num_cards {
            return Err(DealError::InsufficientCards {
                requested: num_cards,
                remaining,
            });
        }

        let dealt = self.cards[self.cursor..self.cursor + num_cards].to_vec();
        self.cursor += num_cards;
        Ok(dealt)
    }

    /// Deals a single card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] when the deck is exhausted.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        if self.cards_remaining() == 0 {
            return Err(DealError::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }

        let card = self.cards[self.cursor];
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards yet to be dealt.
    ///
    /// Reaches 0 exactly when the deck is exhausted.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the total number of cards in the shoe, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe contains no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
