//! A pile behind a single exclusive lock.

use crate::card::Card;
use crate::error::PileError;
use crate::pile::Pile;
use crate::sync::Mutex;

/// A [`Pile`] that can be shared between threads.
///
/// [`Pile`] itself does no locking. Range operations read the size and then
/// act on it, so concurrent callers must hold one lock around the whole pile;
/// this type holds that lock for the duration of each call.
///
/// ```
/// use pickcard::{Pile, SharedPile};
///
/// let shared = SharedPile::new(Pile::standard_deck(false));
/// let hand = shared.deal(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(shared.len(), 47);
/// ```
#[derive(Debug, Default)]
pub struct SharedPile {
    pile: Mutex<Pile>,
}

impl SharedPile {
    /// Wraps a pile.
    #[must_use]
    pub const fn new(pile: Pile) -> Self {
        Self {
            pile: Mutex::new(pile),
        }
    }

    /// Runs `f` with exclusive access to the pile.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pile) -> R) -> R {
        let mut pile = self.pile.lock();
        f(&mut pile)
    }

    /// Removes and returns the top slot.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn draw(&self) -> Result<Option<Card>, PileError> {
        self.with(Pile::pick_card)
    }

    /// Removes up to `quantity` slots from the top as one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidQuantity`] if `quantity` is negative.
    pub fn deal(&self, quantity: isize) -> Result<Pile, PileError> {
        self.with(|pile| pile.pick_cards(quantity))
    }

    /// Adds a card (or an empty slot) to the top. Returns the new size.
    pub fn put(&self, card: impl Into<Option<Card>>) -> usize {
        self.with(|pile| pile.add_card(card))
    }

    /// Returns a copy of the pile as it is now.
    #[must_use]
    pub fn snapshot(&self) -> Pile {
        self.with(|pile| pile.deep_copy())
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with(|pile| pile.len())
    }

    /// Returns whether the pile has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with(|pile| pile.is_empty())
    }

    /// Unwraps the pile.
    #[must_use]
    pub fn into_inner(self) -> Pile {
        self.pile.into_inner()
    }
}

impl From<Pile> for SharedPile {
    fn from(pile: Pile) -> Self {
        Self::new(pile)
    }
}
