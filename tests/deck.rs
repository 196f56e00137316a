//! Deck integration tests.

use std::collections::{HashMap, HashSet};

use cardrs::{Card, DECK_SIZE, DealError, Deck, Rank, Suit};

#[test]
fn fresh_deck_has_full_product() {
    let mut deck = Deck::single(7);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards_remaining(), DECK_SIZE);

    let cards = deck.deal(DECK_SIZE).unwrap();
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(counts[&Card::new(rank, suit)], 1);
        }
    }
}

#[test]
fn multi_deck_contains_exact_copies() {
    let mut deck = Deck::new(2, 3);
    assert_eq!(deck.len(), 2 * DECK_SIZE);
    assert_eq!(deck.cards_remaining(), 2 * DECK_SIZE);

    let cards = deck.deal(2 * DECK_SIZE).unwrap();
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card).or_default() += 1;
    }
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(counts[&Card::new(rank, suit)], 2);
        }
    }
}

#[test]
fn deal_decreases_remaining_by_count() {
    let mut deck = Deck::single(1);
    let dealt = deck.deal(5).unwrap();
    assert_eq!(dealt.len(), 5);
    assert_eq!(deck.cards_remaining(), 47);

    deck.deal(45).unwrap();
    assert_eq!(deck.cards_remaining(), 2);
}

#[test]
fn deals_never_repeat_cards() {
    let mut deck = Deck::single(11);
    let first = deck.deal(20).unwrap();
    let second = deck.deal(32).unwrap();

    // A single deck has 52 distinct card values, so disjoint deals must
    // union to the full deck.
    let all: HashSet<Card> = first.iter().chain(second.iter()).copied().collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn dealing_exact_remainder_succeeds() {
    let mut deck = Deck::single(5);
    deck.deal(40).unwrap();

    let rest = deck.deal(12).unwrap();
    assert_eq!(rest.len(), 12);
    assert_eq!(deck.cards_remaining(), 0);

    assert_eq!(
        deck.deal_one().unwrap_err(),
        DealError::InsufficientCards {
            requested: 1,
            remaining: 0
        }
    );
}

#[test]
fn dealing_too_many_fails_without_advancing() {
    let mut deck = Deck::single(9);
    let err = deck.deal(53).unwrap_err();
    assert_eq!(
        err,
        DealError::InsufficientCards {
            requested: 53,
            remaining: 52
        }
    );
    assert_eq!(deck.cards_remaining(), 52);

    // The failed deal must not have consumed anything.
    assert_eq!(deck.deal(52).unwrap().len(), 52);
}

#[test]
fn same_seed_deals_same_order() {
    let mut a = Deck::new(2, 99);
    let mut b = Deck::new(2, 99);
    assert_eq!(a.deal(20).unwrap(), b.deal(20).unwrap());
}

#[test]
fn shuffle_keeps_cursor_and_size() {
    let mut deck = Deck::single(4);
    deck.deal(10).unwrap();

    deck.shuffle();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards_remaining(), 42);
}

#[test]
fn zero_decks_is_empty() {
    let mut deck = Deck::new(0, 0);
    assert!(deck.is_empty());
    assert_eq!(deck.cards_remaining(), 0);
    assert!(deck.deal(1).is_err());
    assert_eq!(deck.deal(0).unwrap(), Vec::new());
}
