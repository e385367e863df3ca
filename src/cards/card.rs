//! Playing card identity.
//!
//! A `Card` is an immutable (rank, suit) pair. It is `Copy` and doubles
//! as its own identifier: a standard deck holds each pair exactly once,
//! so the engine tracks cards by value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Card rank, 1 (Ace) through 13 (King).
///
/// Construction is validated; an out-of-range rank is a caller bug and
/// is rejected with `EngineError::InvalidRank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, rejecting values outside `1..=13`.
    pub fn new(value: u8) -> Result<Self, EngineError> {
        Self::checked(value).ok_or_else(|| {
            log::warn!("rejected card rank {}", value);
            EngineError::InvalidRank(value)
        })
    }

    /// Quiet range check for parsers that expect junk input.
    fn checked(value: u8) -> Option<Self> {
        (1..=13).contains(&value).then_some(Self(value))
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Short label: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits. Declaration order is the foundation index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Foundation index (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit for a foundation index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Suit> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Letter used in art-pack card codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Inverse of [`Suit::letter`], case-insensitive.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Suit> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// A playing card.
///
/// ```
/// use freecell_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::try_new(12, Suit::Hearts).unwrap();
/// assert_eq!(card.display_name(), "Q of Hearts");
/// assert!(card.is_red());
/// assert_eq!(card.rank(), Rank::QUEEN);
///
/// assert!(Card::try_new(0, Suit::Clubs).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card from a validated rank.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Create a card from a raw rank value.
    pub fn try_new(rank: u8, suit: Suit) -> Result<Self, EngineError> {
        Ok(Self::new(Rank::new(rank)?, suit))
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    /// Human-readable name, e.g. `"10 of Spades"`.
    #[must_use]
    pub fn display_name(self) -> String {
        format!("{} of {}", self.rank, self.suit)
    }

    /// Art-pack code: suit letter plus two-digit rank (`H01`, `S13`).
    #[must_use]
    pub fn code(self) -> String {
        format!("{}{:02}", self.suit.letter(), self.rank.value())
    }

    /// Parse an art-pack code such as `C01`, `h13` or `D7`.
    pub fn from_code(code: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidCardCode(code.to_string());

        let mut chars = code.trim().chars();
        let suit = chars.next().and_then(Suit::from_letter).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u8 = digits.parse().map_err(|_| invalid())?;
        let rank = Rank::checked(value).ok_or_else(invalid)?;

        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(0).is_err());
        assert!(Rank::new(14).is_err());
        assert_eq!(Rank::new(1).unwrap(), Rank::ACE);
        assert_eq!(Rank::new(13).unwrap(), Rank::KING);
        assert_eq!(Rank::new(99), Err(EngineError::InvalidRank(99)));
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Card::new(Rank::ACE, Suit::Hearts).display_name(), "A of Hearts");
        assert_eq!(Card::try_new(10, Suit::Spades).unwrap().display_name(), "10 of Spades");
        assert_eq!(Card::new(Rank::JACK, Suit::Diamonds).to_string(), "J of Diamonds");
        assert_eq!(Card::new(Rank::KING, Suit::Clubs).to_string(), "K of Clubs");
    }

    #[test]
    fn test_color() {
        assert!(Card::new(Rank::ACE, Suit::Hearts).is_red());
        assert!(Card::new(Rank::ACE, Suit::Diamonds).is_red());
        assert!(!Card::new(Rank::ACE, Suit::Spades).is_red());
        assert_eq!(Card::new(Rank::ACE, Suit::Clubs).color(), Color::Black);
    }

    #[test]
    fn test_suit_index() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
            assert_eq!(Suit::from_index(i), Some(*suit));
        }
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn test_codes() {
        let card = Card::new(Rank::ACE, Suit::Hearts);
        assert_eq!(card.code(), "H01");
        assert_eq!(Card::from_code("H01").unwrap(), card);
        assert_eq!(Card::from_code("h1").unwrap(), card);
        assert_eq!(Card::from_code("S13").unwrap(), Card::new(Rank::KING, Suit::Spades));

        assert!(Card::from_code("X01").is_err());
        assert!(Card::from_code("H14").is_err());
        assert!(Card::from_code("H00").is_err());
        assert!(Card::from_code("H").is_err());
        assert!(Card::from_code("H+1").is_err());
        assert!(Card::from_code("").is_err());
    }

    #[test]
    fn test_serde_rejects_bad_rank() {
        let card = Card::try_new(7, Suit::Clubs).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"suit":"Clubs","rank":7}"#);
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

        assert!(serde_json::from_str::<Card>(r#"{"suit":"Clubs","rank":0}"#).is_err());
    }
}
