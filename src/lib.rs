//! Playing card primitives with optional `no_std` support.
//!
//! The crate provides [`Card`] values, named sort orders, and a [`Pile`]
//! type: an ordered stack of cards addressed from the bottom (index 0) to the
//! top, where negative and out-of-range indices are clamped instead of
//! rejected.
//!
//! # Example
//!
//! ```
//! use pickcard::{Card, CardComparator, Pile, Rank, Suit};
//!
//! let mut pile = Pile::new();
//! pile.add_card(Card::face_up(Suit::Diamonds, Rank::Four));
//! pile.add_card(Card::face_up(Suit::Clubs, Rank::Two));
//! pile.add_card(Card::face_up(Suit::Hearts, Rank::Three));
//!
//! pile.sort(CardComparator::ByRankThenSuit);
//! let top = pile.pick_card_at(-1).unwrap();
//! assert_eq!(top, Some(Card::face_up(Suit::Diamonds, Rank::Four)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod ordering;
pub mod pile;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, Colour, DECK_SIZE, Rank, Suit};
pub use error::PileError;
pub use ordering::{CardComparator, Direction, SortKey, SortOrder};
pub use pile::Pile;
pub use shared::SharedPile;
