//! Sort order configuration for piles.
//!
//! A [`SortOrder`] compares two card slots by a primary key and then a
//! secondary key, each ascending or descending on its own. Empty slots
//! always sort before cards, and two empty slots compare equal.

use core::cmp::Ordering;

use crate::card::Card;

/// A card attribute used as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Sort by rank declaration order.
    #[default]
    Rank,
    /// Sort by suit declaration order.
    Suit,
}

/// Direction applied to a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Natural declaration order.
    #[default]
    Ascending,
    /// Reversed declaration order.
    Descending,
}

impl Direction {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A two-key ordering over card slots.
///
/// Use the builder methods to customise the order:
///
/// ```
/// use pickcard::{Direction, SortKey, SortOrder};
///
/// let order = SortOrder::default()
///     .with_primary(SortKey::Suit)
///     .with_rank_direction(Direction::Descending);
/// assert_eq!(order.primary, SortKey::Suit);
/// assert_eq!(order.suit, Direction::Ascending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOrder {
    /// The key compared first.
    pub primary: SortKey,
    /// Direction for rank comparisons.
    pub rank: Direction,
    /// Direction for suit comparisons.
    pub suit: Direction,
}

impl SortOrder {
    /// Sets the key compared first.
    #[must_use]
    pub const fn with_primary(mut self, primary: SortKey) -> Self {
        self.primary = primary;
        self
    }

    /// Sets the direction for rank comparisons.
    #[must_use]
    pub const fn with_rank_direction(mut self, direction: Direction) -> Self {
        self.rank = direction;
        self
    }

    /// Sets the direction for suit comparisons.
    #[must_use]
    pub const fn with_suit_direction(mut self, direction: Direction) -> Self {
        self.suit = direction;
        self
    }

    fn compare_key(&self, key: SortKey, a: &Card, b: &Card) -> Ordering {
        match key {
            SortKey::Rank => self.rank.apply(a.rank().cmp(&b.rank())),
            SortKey::Suit => self.suit.apply(a.suit().cmp(&b.suit())),
        }
    }

    /// Compares two cards.
    #[must_use]
    pub fn compare_cards(&self, a: &Card, b: &Card) -> Ordering {
        let secondary = match self.primary {
            SortKey::Rank => SortKey::Suit,
            SortKey::Suit => SortKey::Rank,
        };
        self.compare_key(self.primary, a, b)
            .then_with(|| self.compare_key(secondary, a, b))
    }

    /// Compares two card slots, placing empty slots first.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use pickcard::{Card, Rank, SortOrder, Suit};
    ///
    /// let ace = Card::face_up(Suit::Spades, Rank::Ace);
    /// let order = SortOrder::default();
    /// assert_eq!(order.compare(None, Some(&ace)), Ordering::Less);
    /// assert_eq!(order.compare(None, None), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare(&self, a: Option<&Card>, b: Option<&Card>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare_cards(a, b),
        }
    }
}

/// The named sort strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CardComparator {
    /// Rank ascending, then suit ascending.
    ByRankThenSuit,
    /// Rank ascending, then suit descending.
    ByRankThenSuitReversed,
    /// Rank descending, then suit ascending.
    ByRankReversedThenSuit,
    /// Rank descending, then suit descending.
    ByRankReversedThenSuitReversed,
    /// Suit ascending, then rank ascending.
    BySuitThenRank,
    /// Suit ascending, then rank descending.
    BySuitThenRankReversed,
    /// Suit descending, then rank ascending.
    BySuitReversedThenRank,
    /// Suit descending, then rank descending.
    BySuitReversedThenRankReversed,
}

impl CardComparator {
    /// Every named strategy.
    pub const ALL: [Self; 8] = [
        Self::ByRankThenSuit,
        Self::ByRankThenSuitReversed,
        Self::ByRankReversedThenSuit,
        Self::ByRankReversedThenSuitReversed,
        Self::BySuitThenRank,
        Self::BySuitThenRankReversed,
        Self::BySuitReversedThenRank,
        Self::BySuitReversedThenRankReversed,
    ];

    /// Returns the sort order this strategy stands for.
    ///
    /// ```
    /// use pickcard::{CardComparator, Direction, SortKey};
    ///
    /// let order = CardComparator::BySuitThenRankReversed.order();
    /// assert_eq!(order.primary, SortKey::Suit);
    /// assert_eq!(order.suit, Direction::Ascending);
    /// assert_eq!(order.rank, Direction::Descending);
    /// ```
    #[must_use]
    pub const fn order(self) -> SortOrder {
        use Direction::{Ascending, Descending};

        let (primary, rank, suit) = match self {
            Self::ByRankThenSuit => (SortKey::Rank, Ascending, Ascending),
            Self::ByRankThenSuitReversed => (SortKey::Rank, Ascending, Descending),
            Self::ByRankReversedThenSuit => (SortKey::Rank, Descending, Ascending),
            Self::ByRankReversedThenSuitReversed => (SortKey::Rank, Descending, Descending),
            Self::BySuitThenRank => (SortKey::Suit, Ascending, Ascending),
            Self::BySuitThenRankReversed => (SortKey::Suit, Descending, Ascending),
            Self::BySuitReversedThenRank => (SortKey::Suit, Ascending, Descending),
            Self::BySuitReversedThenRankReversed => (SortKey::Suit, Descending, Descending),
        };

        SortOrder {
            primary,
            rank,
            suit,
        }
    }

    /// Compares two card slots under this strategy.
    #[must_use]
    pub fn compare(self, a: Option<&Card>, b: Option<&Card>) -> Ordering {
        self.order().compare(a, b)
    }
}

impl From<CardComparator> for SortOrder {
    fn from(comparator: CardComparator) -> Self {
        comparator.order()
    }
}
