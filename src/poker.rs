//! Poker hand classification.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Rank};
use crate::error::HandError;

/// The ten poker hand categories, declared weakest to strongest.
///
/// The derived ordering compares strength directly: a greater category beats
/// a lesser one, so `HandCategory::Flush > HandCategory::Pair`. Under the
/// rules this crate models, four of a kind outranks a straight flush and
/// sits below only the royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// Five distinct ranks with no straight and no flush.
    HighCard,
    /// One rank appears exactly twice.
    Pair,
    /// Two distinct ranks appear exactly twice each.
    TwoPair,
    /// One rank appears three times.
    ThreeOfAKind,
    /// Five consecutive ranks; the ace plays only in the A-2-3-4-5 wheel.
    Straight,
    /// All five cards share one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// A straight whose five cards share one suit.
    StraightFlush,
    /// One rank appears four times.
    FourOfAKind,
    /// The 10-J-Q-K-A straight flush.
    RoyalFlush,
}

/// The A-2-3-4-5 wheel, the only straight where the ace counts low.
const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

/// The rank set of a royal flush.
const ROYAL: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

fn sorted_ranks(cards: &[Card]) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
    ranks.sort_unstable();
    ranks
}

/// Occurrences of each rank, indexed by [`Rank::index`].
fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank.index() as usize] += 1;
    }
    counts
}

fn has_rank_count(cards: &[Card], count: u8) -> bool {
    rank_counts(cards).contains(&count)
}

fn has_five_distinct_ranks(ranks: &[Rank]) -> bool {
    ranks.len() == 5 && ranks.windows(2).all(|pair| pair[0] != pair[1])
}

fn is_pair(cards: &[Card]) -> bool {
    has_rank_count(cards, 2)
}

fn is_two_pair(cards: &[Card]) -> bool {
    let pairs = rank_counts(cards)
        .iter()
        .filter(|&&count| count == 2)
        .count();
    pairs == 2
}

fn is_three_of_a_kind(cards: &[Card]) -> bool {
    has_rank_count(cards, 3)
}

fn is_four_of_a_kind(cards: &[Card]) -> bool {
    has_rank_count(cards, 4)
}

fn is_straight(cards: &[Card]) -> bool {
    let ranks = sorted_ranks(cards);
    // An ace only ever plays low here: a hand holding an ace is a straight
    // iff it is the wheel, so unsuited 10-J-Q-K-A is not a straight. The
    // royal flush is recognized by its own predicate, not this one.
    if ranks.contains(&Rank::Ace) {
        return ranks == WHEEL;
    }
    let (Some(low), Some(high)) = (ranks.first(), ranks.last()) else {
        return false;
    };
    has_five_distinct_ranks(&ranks) && high.index() - low.index() == 4
}

fn is_flush(cards: &[Card]) -> bool {
    cards.len() == 5 && cards.windows(2).all(|pair| pair[0].suit == pair[1].suit)
}

fn is_full_house(cards: &[Card]) -> bool {
    is_pair(cards) && is_three_of_a_kind(cards)
}

fn is_straight_flush(cards: &[Card]) -> bool {
    is_straight(cards) && is_flush(cards)
}

fn is_royal_flush(cards: &[Card]) -> bool {
    is_flush(cards) && sorted_ranks(cards) == ROYAL
}

fn is_high_card(cards: &[Card]) -> bool {
    !is_straight(cards) && !is_flush(cards) && has_five_distinct_ranks(&sorted_ranks(cards))
}

/// Classifies exactly five cards into the strongest matching category.
///
/// Categories are tested strongest first and the first match wins. The
/// predicates overlap (a straight flush also satisfies the straight and
/// flush checks), so the check order is the tie-break, not a table lookup.
pub(crate) fn classify_five(cards: &[Card]) -> HandCategory {
    debug_assert_eq!(cards.len(), 5);
    if is_royal_flush(cards) {
        HandCategory::RoyalFlush
    } else if is_four_of_a_kind(cards) {
        HandCategory::FourOfAKind
    } else if is_straight_flush(cards) {
        HandCategory::StraightFlush
    } else if is_full_house(cards) {
        HandCategory::FullHouse
    } else if is_flush(cards) {
        HandCategory::Flush
    } else if is_straight(cards) {
        HandCategory::Straight
    } else if is_three_of_a_kind(cards) {
        HandCategory::ThreeOfAKind
    } else if is_two_pair(cards) {
        HandCategory::TwoPair
    } else if is_pair(cards) {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

/// Exactly five cards classified into a [`HandCategory`].
///
/// Comparison operators order hands by category strength alone; kickers and
/// in-category rank differences are not considered, so any two flushes
/// compare as equal.
///
/// # Example
///
/// ```
/// use cardrs::{Card, HandCategory, PokerHand, Rank, Suit};
///
/// let hand = PokerHand::new(vec![
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Hearts),
///     Card::new(Rank::Four, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Six, Suit::Hearts),
/// ])?;
/// assert_eq!(hand.category(), HandCategory::StraightFlush);
/// # Ok::<(), cardrs::HandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PokerHand {
    /// The five cards under classification.
    cards: Vec<Card>,
}

impl PokerHand {
    /// Creates a hand from exactly five cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandSize`] when `cards` does not contain
    /// exactly five cards; the straight and flush predicates are undefined
    /// for other sizes.
    pub fn new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() == 5 {
            Ok(Self { cards })
        } else {
            Err(HandError::InvalidHandSize(cards.len()))
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the strongest category the hand satisfies.
    #[must_use]
    pub fn category(&self) -> HandCategory {
        classify_five(&self.cards)
    }

    /// Returns whether any rank appears exactly twice.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    /// Returns whether exactly two distinct ranks appear twice each.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        is_two_pair(&self.cards)
    }

    /// Returns whether any rank appears three times.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        is_three_of_a_kind(&self.cards)
    }

    /// Returns whether any rank appears four times.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        is_four_of_a_kind(&self.cards)
    }

    /// Returns whether the five ranks are consecutive.
    ///
    /// The ace plays only in the A-2-3-4-5 wheel: any other hand holding an
    /// ace, including unsuited 10-J-Q-K-A, is not a straight. The suited
    /// 10-J-Q-K-A is classified by [`is_royal_flush`](Self::is_royal_flush)
    /// instead.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        is_straight(&self.cards)
    }

    /// Returns whether all five cards share one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        is_flush(&self.cards)
    }

    /// Returns whether the hand is a three of a kind plus a pair.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        is_full_house(&self.cards)
    }

    /// Returns whether the hand is both a straight and a flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        is_straight_flush(&self.cards)
    }

    /// Returns whether the hand is the 10-J-Q-K-A flush.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        is_royal_flush(&self.cards)
    }

    /// Returns whether no other category applies: five distinct ranks,
    /// no straight, no flush.
    #[must_use]
    pub fn is_high_card(&self) -> bool {
        is_high_card(&self.cards)
    }
}

/// Equality compares categories, not cards: any two straights are equal.
impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        self.category() == other.category()
    }
}

impl Eq for PokerHand {}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hands are ordered by category strength: greater means stronger, so a
/// flush compares greater than a pair.
impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category())
    }
}
