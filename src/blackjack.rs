//! Blackjack hand scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Rank};

/// Blackjack value of a rank, counting the ace as 11.
const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

/// A blackjack hand scored under the sequential ace rule.
///
/// Each ace is resolved in hand order against the score accumulated so far:
/// it counts as 1 when the running total before it already exceeds 10, and
/// as 11 otherwise. An ace counted as 11 is never demoted by a later card,
/// so this is not a best-total-at-most-21 assignment: `A 5 10` scores 26
/// where an optimal solver would score 16. Hands with two or more aces can
/// likewise disagree with the textbook rule.
///
/// Hands grow by [`add_card`](Self::add_card) (hits) and the score is
/// recomputed on every call, so it stays correct across mutation.
///
/// # Example
///
/// ```
/// use cardrs::{BlackjackHand, Card, Rank, Suit};
///
/// let hand = BlackjackHand::new(vec![
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Hearts),
/// ]);
/// assert_eq!(hand.score(), 21);
/// assert!(hand.is_blackjack());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlackjackHand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl BlackjackHand {
    /// Creates a hand from the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand (a hit).
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the hand score under the sequential ace rule.
    ///
    /// Numeric ranks score face value and J/Q/K score 10. Each ace scores 1
    /// when the total accumulated before it exceeds 10, and 11 otherwise.
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut total: u8 = 0;

        for card in &self.cards {
            let value = if card.rank == Rank::Ace {
                if total > 10 { 1 } else { 11 }
            } else {
                card_value(card.rank)
            };
            total = total.saturating_add(value);
        }

        total
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is a natural blackjack (two cards, 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }
}

/// Equality compares scores, not card composition: a `K Q` hand equals a
/// `10 J` hand.
impl PartialEq for BlackjackHand {
    fn eq(&self, other: &Self) -> bool {
        self.score() == other.score()
    }
}

impl Eq for BlackjackHand {}

impl PartialOrd for BlackjackHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hands are totally ordered by score so dealer and player hands compare
/// directly. Note that a bust hand still compares as its raw score.
impl Ord for BlackjackHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}
