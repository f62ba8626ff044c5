//! Deck containers and the shuffle-and-fill population routine.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANK_ACE, RANK_MIN, SUIT_MAX, SUIT_MIN};

/// The capability of accepting pushed cards.
///
/// [`populate`] is generic over this trait, so alternative container
/// disciplines (for example a FIFO queue) can reuse the same population
/// logic. The trait imposes no internal storage order; implementations
/// decide what "recording a card" means.
pub trait Deck {
    /// Accepts a card and records it.
    fn push(&mut self, card: Card);
}

/// A LIFO stack of cards.
///
/// Cards are appended and removed at the tail. An empty stack is the normal
/// terminal state of a drained deck, so [`CardStack::pop`] signals it with
/// `None` rather than an error.
#[derive(Debug, Clone)]
pub struct CardStack {
    /// Cards in the stack; the tail is the top.
    cards: Vec<Card>,
}

impl CardStack {
    /// Creates a new empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Pushes a card onto the top of the stack.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns whether the stack has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards in stack order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Deck for CardStack {
    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Card codes joined by commas in current stack order.
impl fmt::Display for CardStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Fills `deck` with a shuffled standard card set.
///
/// Builds all 52 suit and rank combinations, appends one joker when
/// `include_joker` is set, shuffles them uniformly with `rng`, and pushes
/// every card into `deck` in permuted order, one at a time.
pub fn populate<D, R>(deck: &mut D, include_joker: bool, rng: &mut R)
where
    D: Deck + ?Sized,
    R: Rng + ?Sized,
{
    let mut cards = Vec::with_capacity(DECK_SIZE + 1);

    for suit in SUIT_MIN..=SUIT_MAX {
        for rank in RANK_MIN..=RANK_ACE {
            cards.push(Card::from_parts(suit, rank));
        }
    }

    if include_joker {
        cards.push(Card::joker());
    }

    cards.shuffle(rng);

    for card in cards {
        deck.push(card);
    }
}

/// Fills `deck` with a shuffled standard card set using a seeded generator.
///
/// Equal seeds produce equal deck orders, which makes shuffled decks
/// reproducible in tests and replays. See [`populate`] for the injected
/// generator variant.
pub fn populate_seeded<D>(deck: &mut D, include_joker: bool, seed: u64)
where
    D: Deck + ?Sized,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    populate(deck, include_joker, &mut rng);
}
