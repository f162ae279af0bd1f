//! Card identities and card instances.
//!
//! Suits and ranks sort by declaration order. [`Rank::value`] is a scoring
//! value only and never takes part in comparisons.

use core::fmt;

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    /// Black.
    Black,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
}

impl Colour {
    /// Every colour in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
    ];

    /// Returns the display name of the colour.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit in declaration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the colour printed on cards of this suit.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Clubs | Self::Spades => Colour::Black,
            Self::Diamonds | Self::Hearts => Colour::Red,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Card rank.
///
/// Ace is declared last, so it sorts above King, but its scoring value is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// Every rank in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns the scoring value (Ace = 1, Jack = 11, Queen = 12, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A playing card.
///
/// Equality covers suit, rank and orientation, so a face-up and a face-down
/// Two of Clubs are different cards as far as searching a pile goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    suit: Suit,
    /// The rank of the card.
    rank: Rank,
    /// Whether the card is face up.
    face_up: bool,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, face_up: bool) -> Self {
        Self {
            suit,
            rank,
            face_up,
        }
    }

    /// Creates a new face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self::new(suit, rank, true)
    }

    /// Creates a new face-down card.
    #[must_use]
    pub const fn face_down(suit: Suit, rank: Rank) -> Self {
        Self::new(suit, rank, false)
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Sets the suit of the card.
    pub const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
    }

    /// Sets the rank of the card.
    pub const fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
    }

    /// Sets whether the card is face up.
    pub const fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Turns the card over.
    pub const fn toggle_face_up(&mut self) {
        self.face_up = !self.face_up;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8}   of   {:<8} ( face {:<4} )",
            self.rank,
            self.suit,
            if self.face_up { "up" } else { "down" }
        )
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
