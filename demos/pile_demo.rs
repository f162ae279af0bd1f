//! Pile demo: builds a small pile, picks a run out of it, and prints both.

use pickcard::{Card, CardComparator, Pile, Rank, Suit};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let mut pile = Pile::new();
    for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts] {
        for rank in [Rank::Two, Rank::Three, Rank::Four] {
            pile.add_card(Card::face_down(suit, rank));
        }
    }
    println!("{pile}");

    let mut picked = match pile.pick_cards_at(2, 2) {
        Ok(picked) => picked,
        Err(err) => {
            eprintln!("Pick error: {err}");
            return;
        }
    };

    picked.toggle_face_up();
    println!("{picked}");

    pile.sort(CardComparator::BySuitReversedThenRankReversed);
    println!("{pile}");

    pile.shuffle();
    match pile.pick_card() {
        Ok(Some(card)) => println!("Top card after shuffle: {card}"),
        Ok(None) => println!("Top slot after shuffle is empty"),
        Err(err) => eprintln!("Pick error: {err}"),
    }
}
