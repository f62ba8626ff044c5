//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit value is out of range.
    #[error("suit {0} is out of range (valid: 1..=5)")]
    SuitOutOfRange(u8),
    /// Rank value is out of range.
    #[error("rank {0} is out of range (valid: 2..=15)")]
    RankOutOfRange(u8),
}
