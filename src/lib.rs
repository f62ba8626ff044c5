//! A playing-card library with optional `no_std` support.
//!
//! The crate provides a validated [`Card`] value type with rank-primary
//! comparison, a [`CardStack`] LIFO container, and a [`populate`] routine
//! that fills any [`Deck`] with a shuffled standard 52-card set plus an
//! optional joker.
//!
//! # Example
//!
//! ```
//! use cardstack::{CardStack, populate_seeded};
//!
//! let mut deck = CardStack::new();
//! populate_seeded(&mut deck, true, 42);
//! assert_eq!(deck.len(), 53);
//!
//! while let Some(card) = deck.pop() {
//!     let _ = card.to_string();
//! }
//! assert!(deck.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{
    Card, DECK_SIZE, JOKER_RANK, JOKER_SUIT, RANK_ACE, RANK_MIN, SUIT_MAX, SUIT_MIN,
};
pub use deck::{CardStack, Deck, populate, populate_seeded};
pub use error::CardError;
