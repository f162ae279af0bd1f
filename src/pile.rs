//! Ordered piles of cards.
//!
//! Index 0 is the bottom of a pile and the highest index is its top. Every
//! positional argument goes through [`Pile::normalize_index`], so negative
//! indices count back from the top and out-of-range indices are clamped
//! rather than rejected.

use core::fmt;
use core::ops::Range;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::PileError;
use crate::ordering::SortOrder;

/// An ordered, mutable sequence of card slots.
///
/// A slot holds either a card or nothing. Empty slots take up a position and
/// count towards [`len`](Self::len), but bulk card mutations skip them.
///
/// Range reads such as [`get_cards_at`](Self::get_cards_at) return
/// independent piles: the cards are copied, so later changes to either pile
/// never show through in the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    /// Slots from bottom (index 0) to top.
    cards: Vec<Option<Card>>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a 52-card deck, bottom to top in suit then rank order.
    #[must_use]
    pub fn standard_deck(face_up: bool) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Some(Card::new(suit, rank, face_up)));
            }
        }

        Self { cards }
    }

    /// Maps any index onto a position within this pile.
    ///
    /// Returns 0 for an empty pile. Otherwise an index already in bounds is
    /// returned unchanged, an index past the top resolves to the top (or to
    /// `len` when `use_len_as_upper_bound` is set, for insertion), a negative
    /// index counts back from the top, and an index at or below `-len`
    /// resolves to the bottom.
    ///
    /// ```
    /// use pickcard::{Card, Pile, Rank, Suit};
    ///
    /// let pile: Pile = [Rank::Two, Rank::Three, Rank::Four]
    ///     .into_iter()
    ///     .map(|rank| Card::face_down(Suit::Clubs, rank))
    ///     .collect();
    ///
    /// assert_eq!(pile.normalize_index(1, false), 1);
    /// assert_eq!(pile.normalize_index(7, false), 2);
    /// assert_eq!(pile.normalize_index(7, true), 3);
    /// assert_eq!(pile.normalize_index(-1, false), 2);
    /// assert_eq!(pile.normalize_index(-9, true), 0);
    /// ```
    #[must_use]
    pub fn normalize_index(&self, index: isize, use_len_as_upper_bound: bool) -> usize {
        let len = self.cards.len();
        if len == 0 {
            return 0;
        }

        if index >= 0 {
            let index = index as usize;
            if index < len {
                index
            } else if use_len_as_upper_bound {
                len
            } else {
                len - 1
            }
        } else {
            let back = index.unsigned_abs();
            if back < len { len - back } else { 0 }
        }
    }

    fn validate_quantity(quantity: isize) -> Result<usize, PileError> {
        usize::try_from(quantity).map_err(|_| PileError::InvalidQuantity(quantity))
    }

    /// Resolves a starting index and quantity into a clamped range.
    fn range_at(&self, index: isize, quantity: isize) -> Result<Range<usize>, PileError> {
        let quantity = Self::validate_quantity(quantity)?;
        let start = self.normalize_index(index, false);
        let end = start + quantity.min(self.cards.len() - start);
        Ok(start..end)
    }

    /// Resolves a quantity counted down from the top into a clamped range.
    fn range_from_top(&self, quantity: isize) -> Result<Range<usize>, PileError> {
        let quantity = Self::validate_quantity(quantity)?;
        let len = self.cards.len();
        Ok(len - quantity.min(len)..len)
    }

    fn out_of_bounds(&self, index: usize) -> PileError {
        PileError::OutOfBounds {
            index,
            len: self.cards.len(),
        }
    }

    /// Adds a card (or an empty slot) to the top of the pile.
    ///
    /// Returns the new size of the pile.
    pub fn add_card(&mut self, card: impl Into<Option<Card>>) -> usize {
        self.cards.push(card.into());
        self.cards.len()
    }

    /// Inserts a card (or an empty slot) at the given index.
    ///
    /// An index past the top appends. Returns the new size of the pile.
    pub fn add_card_at(&mut self, index: isize, card: impl Into<Option<Card>>) -> usize {
        let at = self.normalize_index(index, true);
        trace!(index, at, "inserting card");
        self.cards.insert(at, card.into());
        self.cards.len()
    }

    /// Adds cards to the top of the pile, keeping their order.
    ///
    /// An empty collection leaves the pile unchanged. Returns the new size of
    /// the pile.
    pub fn add_cards<I>(&mut self, cards: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Option<Card>>,
    {
        self.cards.extend(cards.into_iter().map(Into::into));
        self.cards.len()
    }

    /// Inserts cards at the given index, keeping their order.
    ///
    /// An empty collection leaves the pile unchanged. Returns the new size of
    /// the pile.
    #[instrument(level = "trace", skip(self, cards), fields(len = self.cards.len()))]
    pub fn add_cards_at<I>(&mut self, index: isize, cards: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Option<Card>>,
    {
        let at = self.normalize_index(index, true);
        let above = self.cards.split_off(at);
        self.cards.extend(cards.into_iter().map(Into::into));
        self.cards.extend(above);
        self.cards.len()
    }

    /// Returns whether the pile holds a slot equal to `card`.
    #[must_use]
    pub fn contains_card(&self, card: impl Into<Option<Card>>) -> bool {
        self.cards.contains(&card.into())
    }

    /// Returns whether the pile holds a slot equal to each of `cards`.
    ///
    /// An empty collection is trivially contained.
    #[must_use]
    pub fn contains_cards<I>(&self, cards: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Option<Card>>,
    {
        cards
            .into_iter()
            .all(|card| self.cards.contains(&card.into()))
    }

    /// Deletes every slot equal to `card`.
    ///
    /// Returns whether the pile changed.
    pub fn delete_all_of_type(&mut self, card: impl Into<Option<Card>>) -> bool {
        let card = card.into();
        let before = self.cards.len();
        self.cards.retain(|slot| *slot != card);
        let deleted = before - self.cards.len();
        if deleted > 0 {
            debug!(deleted, "deleted matching cards");
        }
        deleted > 0
    }

    /// Deletes every slot equal to any of `cards`.
    ///
    /// Returns whether the pile changed.
    pub fn delete_all_of_types<I>(&mut self, cards: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Option<Card>>,
    {
        let targets: HashSet<Option<Card>> = cards.into_iter().map(Into::into).collect();
        if targets.is_empty() {
            return false;
        }

        let before = self.cards.len();
        self.cards.retain(|slot| !targets.contains(slot));
        let deleted = before - self.cards.len();
        if deleted > 0 {
            debug!(deleted, kinds = targets.len(), "deleted matching cards");
        }
        deleted > 0
    }

    /// Deletes the topmost slot equal to `card`.
    ///
    /// Returns whether a match was found.
    pub fn delete_highest_of_type(&mut self, card: impl Into<Option<Card>>) -> bool {
        self.highest_index_of(card)
            .map(|index| self.cards.remove(index))
            .is_some()
    }

    /// Deletes the bottommost slot equal to `card`.
    ///
    /// Returns whether a match was found.
    pub fn delete_lowest_of_type(&mut self, card: impl Into<Option<Card>>) -> bool {
        self.lowest_index_of(card)
            .map(|index| self.cards.remove(index))
            .is_some()
    }

    /// Returns the top slot.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn get_card(&self) -> Result<Option<&Card>, PileError> {
        self.cards
            .last()
            .map(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(0))
    }

    /// Returns a mutable handle to the top slot.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn get_card_mut(&mut self) -> Result<Option<&mut Card>, PileError> {
        let error = self.out_of_bounds(0);
        self.cards.last_mut().map(Option::as_mut).ok_or(error)
    }

    /// Returns the slot at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn get_card_at(&self, index: isize) -> Result<Option<&Card>, PileError> {
        let at = self.normalize_index(index, false);
        self.cards
            .get(at)
            .map(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(at))
    }

    /// Returns a mutable handle to the slot at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn get_card_at_mut(&mut self, index: isize) -> Result<Option<&mut Card>, PileError> {
        let at = self.normalize_index(index, false);
        let error = self.out_of_bounds(at);
        self.cards.get_mut(at).map(Option::as_mut).ok_or(error)
    }

    /// Returns a copy of up to `quantity` slots from the top of the pile.
    ///
    /// Asking for more slots than the pile holds returns the whole pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidQuantity`] if `quantity` is negative.
    pub fn get_cards(&self, quantity: isize) -> Result<Self, PileError> {
        let range = self.range_from_top(quantity)?;
        trace!(quantity, start = range.start, end = range.end, "copying cards from top");
        Ok(Self::from(self.cards[range].to_vec()))
    }

    /// Returns a copy of up to `quantity` slots starting at `index` and
    /// moving towards the top.
    ///
    /// ```
    /// use pickcard::{Card, Pile, Rank, Suit};
    ///
    /// let pile: Pile = [Rank::Two, Rank::Three, Rank::Four]
    ///     .into_iter()
    ///     .map(|rank| Card::face_down(Suit::Clubs, rank))
    ///     .collect();
    ///
    /// let view = pile.get_cards_at(1, 10).unwrap();
    /// assert_eq!(view.len(), 2);
    /// assert_eq!(pile.len(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidQuantity`] if `quantity` is negative.
    pub fn get_cards_at(&self, index: isize, quantity: isize) -> Result<Self, PileError> {
        let range = self.range_at(index, quantity)?;
        trace!(index, quantity, start = range.start, end = range.end, "copying cards");
        Ok(Self::from(self.cards[range].to_vec()))
    }

    /// Returns the index of the topmost slot equal to `card`.
    #[must_use]
    pub fn highest_index_of(&self, card: impl Into<Option<Card>>) -> Option<usize> {
        let card = card.into();
        self.cards.iter().rposition(|slot| *slot == card)
    }

    /// Returns the index of the topmost slot equal to `card` strictly below
    /// `from_index`.
    ///
    /// `from_index` is normalised with the size of the pile as its upper
    /// bound, so any index past the top searches the whole pile.
    #[must_use]
    pub fn highest_index_of_from(
        &self,
        card: impl Into<Option<Card>>,
        from_index: isize,
    ) -> Option<usize> {
        let card = card.into();
        let bound = self.normalize_index(from_index, true);
        self.cards[..bound].iter().rposition(|slot| *slot == card)
    }

    /// Returns the index of the bottommost slot equal to `card`.
    #[must_use]
    pub fn lowest_index_of(&self, card: impl Into<Option<Card>>) -> Option<usize> {
        let card = card.into();
        self.cards.iter().position(|slot| *slot == card)
    }

    /// Returns the index of the bottommost slot equal to `card` at or above
    /// `from_index`.
    #[must_use]
    pub fn lowest_index_of_from(
        &self,
        card: impl Into<Option<Card>>,
        from_index: isize,
    ) -> Option<usize> {
        let card = card.into();
        let start = self.normalize_index(from_index, true);
        self.cards[start..]
            .iter()
            .position(|slot| *slot == card)
            .map(|offset| start + offset)
    }

    /// Removes and returns the top slot.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn pick_card(&mut self) -> Result<Option<Card>, PileError> {
        let error = self.out_of_bounds(0);
        self.cards.pop().ok_or(error)
    }

    /// Removes and returns the slot at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfBounds`] if the pile is empty.
    pub fn pick_card_at(&mut self, index: isize) -> Result<Option<Card>, PileError> {
        let at = self.normalize_index(index, false);
        if at < self.cards.len() {
            Ok(self.cards.remove(at))
        } else {
            Err(self.out_of_bounds(at))
        }
    }

    /// Removes up to `quantity` slots from the top and returns them as a new
    /// pile, in their original order.
    ///
    /// Asking for more slots than the pile holds empties the pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidQuantity`] if `quantity` is negative.
    pub fn pick_cards(&mut self, quantity: isize) -> Result<Self, PileError> {
        let range = self.range_from_top(quantity)?;
        trace!(quantity, start = range.start, end = range.end, "picking cards from top");
        Ok(self.cards.drain(range).collect())
    }

    /// Removes up to `quantity` slots starting at `index` and moving towards
    /// the top, and returns them as a new pile.
    ///
    /// ```
    /// use pickcard::{Card, Pile, Rank, Suit};
    ///
    /// let mut pile = Pile::standard_deck(false);
    /// let picked = pile.pick_cards_at(-2, 5).unwrap();
    ///
    /// assert_eq!(picked.len(), 2);
    /// assert_eq!(pile.len(), 50);
    /// assert!(picked.contains_card(Card::face_down(Suit::Spades, Rank::Ace)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidQuantity`] if `quantity` is negative.
    #[instrument(level = "trace", skip(self), fields(len = self.cards.len()))]
    pub fn pick_cards_at(&mut self, index: isize, quantity: isize) -> Result<Self, PileError> {
        let range = self.range_at(index, quantity)?;
        Ok(self.cards.drain(range).collect())
    }

    /// Returns a pile holding a fresh copy of every card, with empty slots
    /// kept in place.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.cards
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|card| Card::new(card.suit(), card.rank(), card.is_face_up()))
            })
            .collect()
    }

    /// Reverses the order of the pile in place.
    pub fn reverse(&mut self) {
        debug!(len = self.cards.len(), "reversing pile");
        self.cards.reverse();
    }

    /// Turns every card face up or face down.
    pub fn set_face_up(&mut self, face_up: bool) {
        for card in self.cards.iter_mut().flatten() {
            card.set_face_up(face_up);
        }
    }

    /// Turns every card over.
    pub fn toggle_face_up(&mut self) {
        for card in self.cards.iter_mut().flatten() {
            card.toggle_face_up();
        }
    }

    /// Shuffles the pile using the thread-local random number generator.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the pile using the given random number generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!(len = self.cards.len(), "shuffling pile");
        self.cards.shuffle(rng);
    }

    /// Shuffles the pile deterministically from a seed.
    ///
    /// ```
    /// use pickcard::Pile;
    ///
    /// let mut a = Pile::standard_deck(false);
    /// let mut b = Pile::standard_deck(false);
    /// a.shuffle_seeded(7);
    /// b.shuffle_seeded(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Sorts the pile in place, keeping the relative order of equal slots.
    ///
    /// Accepts a [`SortOrder`] or any of the named
    /// [`CardComparator`](crate::CardComparator) strategies.
    pub fn sort(&mut self, order: impl Into<SortOrder>) {
        let order = order.into();
        debug!(?order, len = self.cards.len(), "sorting pile");
        self.cards
            .sort_by(|a, b| order.compare(a.as_ref(), b.as_ref()));
    }

    /// Returns the number of slots, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the slots from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Option<Card>] {
        &self.cards
    }

    /// Iterates over the slots from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Option<Card>> {
        self.cards.iter()
    }
}

impl From<Vec<Option<Card>>> for Pile {
    fn from(cards: Vec<Option<Card>>) -> Self {
        Self { cards }
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

impl<const N: usize> From<[Card; N]> for Pile {
    fn from(cards: [Card; N]) -> Self {
        cards.into_iter().collect()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().map(Some).collect(),
        }
    }
}

impl FromIterator<Option<Card>> for Pile {
    fn from_iter<I: IntoIterator<Item = Option<Card>>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pile {
    type Item = Option<Card>;
    type IntoIter = alloc::vec::IntoIter<Option<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Option<Card>;
    type IntoIter = core::slice::Iter<'a, Option<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.cards.len();
        let suffix = match len {
            0 => "s",
            1 => ":",
            _ => "s:",
        };
        write!(f, "Pile of {len} card{suffix}")?;

        for (index, slot) in self.cards.iter().enumerate().rev() {
            match slot {
                Some(card) => write!(f, "\n  {index:>7}   :\t{card}")?,
                None => write!(f, "\n  {index:>7}   : ( NULL )")?,
            }
        }

        Ok(())
    }
}
