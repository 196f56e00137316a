//! Hold'em-style best-hand search over community cards.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::HandError;
use crate::poker::{HandCategory, classify_five};

/// Two hole cards plus a pool of shared community cards.
///
/// The best hand is always formed from both hole cards plus exactly three
/// community cards. With five community cards dealt this is narrower than
/// the full "best five of seven" hold'em rule: hands using one or zero hole
/// cards are never considered.
///
/// # Example
///
/// ```
/// use cardrs::{Card, HandCategory, HoldemHand, Rank, Suit};
///
/// let hole = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Spades),
/// ];
/// let community = vec![
///     Card::new(Rank::Three, Suit::Hearts),
///     Card::new(Rank::Four, Suit::Diamonds),
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::King, Suit::Spades),
/// ];
/// let hand = HoldemHand::new(hole, community)?;
/// // A-2 plus 3-4-5 makes the wheel straight, beating the pair of kings.
/// assert_eq!(hand.category(), HandCategory::Straight);
/// # Ok::<(), cardrs::HandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HoldemHand {
    /// The two cards held privately.
    hole: [Card; 2],
    /// Shared cards on the table: 0 pre-flop, then 3, 4, or 5 by street.
    community: Vec<Card>,
}

impl HoldemHand {
    /// Creates a hand from two hole cards and the community pool.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidCommunitySize`] unless the pool holds 0,
    /// 3, 4, or 5 cards (pre-flop, flop, turn, river).
    pub fn new(hole: [Card; 2], community: Vec<Card>) -> Result<Self, HandError> {
        match community.len() {
            0 | 3..=5 => Ok(Self { hole, community }),
            n => Err(HandError::InvalidCommunitySize(n)),
        }
    }

    /// Returns the two hole cards.
    #[must_use]
    pub const fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    /// Returns the community cards.
    #[must_use]
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Returns the strongest category reachable with both hole cards plus
    /// any three community cards.
    ///
    /// Before the flop there is no five-card hand to classify; the two hole
    /// cards alone rate as [`HandCategory::Pair`] when their ranks match
    /// and [`HandCategory::HighCard`] otherwise. That rating describes an
    /// incomplete hand and is only meaningful against other pre-flop hands.
    #[must_use]
    pub fn category(&self) -> HandCategory {
        if self.community.is_empty() {
            return if self.hole[0].rank == self.hole[1].rank {
                HandCategory::Pair
            } else {
                HandCategory::HighCard
            };
        }

        // At most C(5, 3) = 10 classifications, so brute force is fine.
        let n = self.community.len();
        let mut best = HandCategory::HighCard;
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let five = [
                        self.hole[0],
                        self.hole[1],
                        self.community[i],
                        self.community[j],
                        self.community[k],
                    ];
                    let category = classify_five(&five);
                    if category > best {
                        best = category;
                    }
                }
            }
        }
        best
    }
}

/// Equality compares the derived categories, as for
/// [`PokerHand`](crate::PokerHand).
impl PartialEq for HoldemHand {
    fn eq(&self, other: &Self) -> bool {
        self.category() == other.category()
    }
}

impl Eq for HoldemHand {}

impl PartialOrd for HoldemHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hands are ordered by the strongest reachable category; greater means
/// stronger.
impl Ord for HoldemHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category())
    }
}
