// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions and card token parsing.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The separator between the rank and the suit in a card token.
pub const TOKEN_SEPARATOR: char = '_';

/// Errors returned when parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token has no rank/suit separator.
    #[error("card token {0:?} is missing the '_' separator")]
    MissingSeparator(String),
    /// The rank symbol is not one of A,2..10,J,Q,K.
    #[error("unknown rank {rank:?} in card token {token:?}")]
    InvalidRank {
        /// The full token.
        token: String,
        /// The rank part of the token.
        rank: String,
    },
    /// The suit symbol is not one of S,H,D,C.
    #[error("unknown suit {suit:?} in card token {token:?}")]
    InvalidSuit {
        /// The full token.
        token: String,
        /// The suit part of the token.
        suit: String,
    },
}

/// A Poker card.
///
/// Cards are written as `<rank>_<suit>` tokens where rank is one of
/// `A,2,3,4,5,6,7,8,9,10,J,Q,K` and suit is one of `S,H,D,C`:
///
/// ```
/// # use handrank_cards::{Card, Rank, Suit};
/// let card = "10_H".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card.to_string(), "10_H");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = token
            .split_once(TOKEN_SEPARATOR)
            .ok_or_else(|| ParseCardError::MissingSeparator(token.to_string()))?;

        let rank = Rank::from_symbol(rank).ok_or_else(|| ParseCardError::InvalidRank {
            token: token.to_string(),
            rank: rank.to_string(),
        })?;

        let suit = Suit::from_symbol(suit).ok_or_else(|| ParseCardError::InvalidSuit {
            token: token.to_string(),
            suit: suit.to_string(),
        })?;

        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TOKEN_SEPARATOR}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Parses a sequence of card tokens, stops at the first invalid token.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ParseCardError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Card rank.
///
/// The discriminant is the ace-high rank value used for ranking hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The ace-high value of this rank (deuce=2, ..., king=13, ace=14).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The value as written on a card token, the ace is 1.
    pub fn face_value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            rank => rank.value(),
        }
    }

    /// Converts a rank value to a rank, the ace can be either 1 or 14.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 => Some(Rank::Ace),
            v => Rank::ranks().find(|r| r.value() == v),
        }
    }

    /// Parses a token rank symbol.
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        let rank = match symbol {
            "A" => Rank::Ace,
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return None,
        };

        Some(rank)
    }

    /// The token symbol for this rank.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit position in `0..Suit::COUNT`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a token suit symbol.
    pub fn from_symbol(symbol: &str) -> Option<Suit> {
        match symbol {
            "S" => Some(Suit::Spades),
            "H" => Some(Suit::Hearts),
            "D" => Some(Suit::Diamonds),
            "C" => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// The token symbol for this suit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
