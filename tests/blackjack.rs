//! Blackjack scoring tests.

use cardrs::{BlackjackHand, Card, Rank, Suit};

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Hearts)
}

#[test]
fn face_cards_score_ten_each() {
    let hand = BlackjackHand::new(vec![card(Rank::King), card(Rank::Queen)]);
    assert_eq!(hand.score(), 20);
    assert!(!hand.is_bust());
    assert!(!hand.is_blackjack());
}

#[test]
fn ace_counts_eleven_when_total_allows() {
    let hand = BlackjackHand::new(vec![card(Rank::Ace), card(Rank::King)]);
    assert_eq!(hand.score(), 21);
    assert!(hand.is_blackjack());
}

#[test]
fn sequential_ace_rule_on_multi_ace_hands() {
    // First ace counts 11; the second sees a total over 10 and counts 1.
    let hand = BlackjackHand::new(vec![card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]);
    assert_eq!(hand.score(), 21);

    let hand = BlackjackHand::new(vec![
        card(Rank::Ace),
        card(Rank::Ace),
        card(Rank::Seven),
        card(Rank::Two),
    ]);
    assert_eq!(hand.score(), 21);
}

#[test]
fn sequential_ace_rule_can_bust_where_optimal_would_not() {
    // An ace counted as 11 is never demoted by a later card: A 5 10 scores
    // 26 under the sequential rule, not the optimal 16.
    let hand = BlackjackHand::new(vec![card(Rank::Ace), card(Rank::Five), card(Rank::Ten)]);
    assert_eq!(hand.score(), 26);
    assert!(hand.is_bust());
}

#[test]
fn score_recomputes_after_hits() {
    let mut hand = BlackjackHand::default();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);

    hand.add_card(card(Rank::King));
    assert_eq!(hand.score(), 10);

    hand.add_card(card(Rank::Five));
    assert_eq!(hand.score(), 15);

    hand.add_card(card(Rank::Nine));
    assert_eq!(hand.score(), 24);
    assert!(hand.is_bust());
    assert_eq!(hand.len(), 3);
}

#[test]
fn hands_order_by_score() {
    let twenty = BlackjackHand::new(vec![card(Rank::King), card(Rank::Queen)]);
    let twenty_one = BlackjackHand::new(vec![card(Rank::Ace), card(Rank::King)]);
    let also_twenty = BlackjackHand::new(vec![card(Rank::Ten), card(Rank::Jack)]);

    assert!(twenty < twenty_one);
    assert!(twenty_one > twenty);
    assert!(twenty <= also_twenty);
    assert!(twenty >= also_twenty);
    assert_eq!(twenty, also_twenty);
}
