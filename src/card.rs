//! The playing-card value type.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Lowest valid suit value (club).
pub const SUIT_MIN: u8 = 1;
/// Highest standard suit value (spade).
pub const SUIT_MAX: u8 = 4;
/// Reserved suit value for the joker.
pub const JOKER_SUIT: u8 = 5;
/// Lowest valid rank value.
pub const RANK_MIN: u8 = 2;
/// Highest standard rank value (ace).
pub const RANK_ACE: u8 = 14;
/// Reserved rank value for the joker.
pub const JOKER_RANK: u8 = 15;
/// Number of cards in a standard deck, joker excluded.
pub const DECK_SIZE: usize = 52;

/// Suit names, indexed by `suit - 1`.
const SUIT_NAMES: [&str; 4] = ["club", "diamond", "heart", "spade"];
/// Rank display characters, indexed by `rank - 2`.
const RANK_CHARS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K", "A",
];

/// A single playing card with a validated suit and rank.
///
/// Suits 1 through 4 are club, diamond, heart, and spade; suit 5 is reserved
/// for the joker. Ranks run from 2 up to 14 (ace); rank 15 is reserved for
/// the joker. Validation is per field, so `(5, 15)` is the only joker form
/// that [`Card::new`] can produce, and it is what [`Card::default`] yields.
///
/// Comparison is rank-primary: `==` ignores suit entirely, while `<` and `>`
/// break rank ties by suit. Two cards of equal rank but different suits are
/// therefore equal under `==` yet still ordered under [`Ord`]. This suits
/// rank-based game logic; callers needing identity comparison should compare
/// `(suit(), rank())` pairs directly.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// Suit value, `1..=5`.
    suit: u8,
    /// Rank value, `2..=15`.
    rank: u8,
}

impl Card {
    /// Creates a new card from raw suit and rank values.
    ///
    /// # Errors
    ///
    /// Returns an error if `suit` is outside `1..=5` or `rank` is outside
    /// `2..=15`.
    pub const fn new(suit: u8, rank: u8) -> Result<Self, CardError> {
        if !matches!(suit, SUIT_MIN..=JOKER_SUIT) {
            return Err(CardError::SuitOutOfRange(suit));
        }
        if !matches!(rank, RANK_MIN..=JOKER_RANK) {
            return Err(CardError::RankOutOfRange(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Creates a card from values already known to be in range.
    pub(crate) const fn from_parts(suit: u8, rank: u8) -> Self {
        debug_assert!(matches!(suit, SUIT_MIN..=JOKER_SUIT));
        debug_assert!(matches!(rank, RANK_MIN..=JOKER_RANK));
        Self { suit, rank }
    }

    /// Creates the joker, suit 5 and rank 15.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: JOKER_SUIT,
            rank: JOKER_RANK,
        }
    }

    /// Returns the suit value.
    #[must_use]
    pub const fn suit(&self) -> u8 {
        self.suit
    }

    /// Returns the rank value.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit name: `"club"`, `"diamond"`, `"heart"`, `"spade"`,
    /// or `"joker"` for suit 5.
    #[must_use]
    pub const fn suit_name(&self) -> &'static str {
        if self.suit == JOKER_SUIT {
            "joker"
        } else {
            SUIT_NAMES[(self.suit - SUIT_MIN) as usize]
        }
    }

    /// Returns the rank display character (`"2"` through `"9"`, `"T"`,
    /// `"J"`, `"Q"`, `"K"`, `"A"`), or the empty string for rank 15.
    #[must_use]
    pub const fn rank_char(&self) -> &'static str {
        if self.rank == JOKER_RANK {
            ""
        } else {
            RANK_CHARS[(self.rank - RANK_MIN) as usize]
        }
    }

    /// Returns whether this card is the joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK
    }
}

/// The joker.
impl Default for Card {
    fn default() -> Self {
        Self::joker()
    }
}

/// Two-character card code: the first letter of the suit name followed by
/// the rank character (`"hQ"`, `"dA"`), or `"JK"` for the joker.
///
/// Joker detection keys off the rank having no display character.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank_char();
        if rank.is_empty() {
            f.write_str("JK")
        } else {
            write!(f, "{}{rank}", &self.suit_name()[..1])
        }
    }
}

/// Rank-only equality: suit is ignored.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

/// Rank-primary ordering with suit as the tie-break.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then(self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
