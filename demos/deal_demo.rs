//! Deals a few hands from a shared deck and prints their ratings.

use std::time::{SystemTime, UNIX_EPOCH};

use cardrs::{BlackjackHand, Deck, HoldemHand, PokerHand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::single(seed);

    let blackjack = BlackjackHand::new(deck.deal(2)?);
    print_cards("blackjack hand", blackjack.cards());
    println!("  scores {}", blackjack.score());

    let poker = PokerHand::new(deck.deal(5)?)?;
    print_cards("poker hand", poker.cards());
    println!("  rates as {:?}", poker.category());

    let hole = [deck.deal_one()?, deck.deal_one()?];
    let community = deck.deal(5)?;
    let holdem = HoldemHand::new(hole, community)?;
    print_cards("hold'em hole", holdem.hole());
    print_cards("community", holdem.community());
    println!("  best hand rates as {:?}", holdem.category());

    println!("{} cards left in the deck", deck.cards_remaining());
    Ok(())
}

fn print_cards(label: &str, cards: &[cardrs::Card]) {
    print!("{label}:");
    for card in cards {
        print!(" {card}");
    }
    println!();
}
