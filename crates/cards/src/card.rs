// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions and card tokens parsing.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A card rank.
///
/// Ranks use the face value of the card with the Jack, Queen, King, and Ace
/// mapped to 11, 12, 13, and 14. The value is not range checked when parsing a
/// token, a token like `99S` gives a rank of 99 and `-1S` a rank of -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(i64);

impl Rank {
    /// Deuce
    pub const DEUCE: Rank = Rank(2);
    /// Trey
    pub const TREY: Rank = Rank(3);
    /// Four
    pub const FOUR: Rank = Rank(4);
    /// Five
    pub const FIVE: Rank = Rank(5);
    /// Six
    pub const SIX: Rank = Rank(6);
    /// Seven
    pub const SEVEN: Rank = Rank(7);
    /// Eight
    pub const EIGHT: Rank = Rank(8);
    /// Nine
    pub const NINE: Rank = Rank(9);
    /// Ten
    pub const TEN: Rank = Rank(10);
    /// Jack
    pub const JACK: Rank = Rank(11);
    /// Queen
    pub const QUEEN: Rank = Rank(12);
    /// King
    pub const KING: Rank = Rank(13);
    /// Ace
    pub const ACE: Rank = Rank(14);

    /// Creates a rank with the given value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The rank integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parses the rank part of a card token, surrounding whitespace is ignored
    /// for numeric ranks.
    fn parse(rank: &str) -> Option<Rank> {
        match rank {
            "A" => Some(Rank::ACE),
            "K" => Some(Rank::KING),
            "Q" => Some(Rank::QUEEN),
            "J" => Some(Rank::JACK),
            _ => rank.trim().parse::<i64>().ok().map(Rank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rank::ACE => write!(f, "A"),
            Rank::KING => write!(f, "K"),
            Rank::QUEEN => write!(f, "Q"),
            Rank::JACK => write!(f, "J"),
            Rank(v) => write!(f, "{v}"),
        }
    }
}

/// A card suit.
///
/// The suit is the last character of a card token, two suits are the same if
/// their characters are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suit(char);

impl Suit {
    /// Creates a suit from its character.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// The suit character.
    pub fn symbol(&self) -> char {
        self.0
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card token parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The rank text is neither a face letter nor an integer.
    #[error("Invalid rank '{rank}' in card '{card}'")]
    InvalidRank {
        /// The rank part of the token.
        rank: String,
        /// The whole card token.
        card: String,
    },
    /// The token has no suit character.
    #[error("Missing suit in card '{card}'")]
    MissingSuit {
        /// The whole card token.
        card: String,
    },
}

/// A Poker card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
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

    /// Parses a card token like `KH` or `10C`.
    ///
    /// The suit is the last character of the token and the preceding text is
    /// the rank, either a `A`, `K`, `Q`, `J` face letter or a decimal number.
    pub fn parse(token: &str) -> Result<Card, ParseError> {
        let mut chars = token.chars();
        let suit = chars.next_back().ok_or_else(|| ParseError::MissingSuit {
            card: token.to_string(),
        })?;

        let rank_text = chars.as_str();
        let rank = Rank::parse(rank_text).ok_or_else(|| ParseError::InvalidRank {
            rank: rank_text.to_string(),
            card: token.to_string(),
        })?;

        Ok(Card::new(rank, Suit(suit)))
    }

    /// Parses a sequence of card tokens, fails on the first invalid token.
    pub fn parse_hand<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ParseError> {
        tokens.iter().map(|t| Card::parse(t.as_ref())).collect()
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}
