//! Error types for pile operations.

use thiserror::Error;

/// Errors that can occur when acting on a pile.
///
/// Only two situations are errors: there is no card to act on, or a range
/// was requested with a negative quantity. Every other out-of-range input
/// is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no card at the resolved position.
    #[error("index {index} out of bounds for pile of {len} cards")]
    OutOfBounds {
        /// The resolved index that was accessed.
        index: usize,
        /// The size of the pile at the time of access.
        len: usize,
    },
    /// A range was requested with a negative quantity.
    #[error("quantity must not be negative, got {0}")]
    InvalidQuantity(isize),
}
