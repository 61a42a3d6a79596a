// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the category resolution table.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::features::HandFeatures;

/// A hand category, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pattern.
    HighCard = 1,
    /// Two cards with the same rank.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// A ten to ace straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// The category strength from 1 (high card) to 10 (royal flush).
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// Gets the category with the given strength.
    pub fn from_strength(strength: u8) -> Option<HandCategory> {
        Self::ALL.into_iter().find(|c| c.strength() == strength)
    }

    /// The category canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Resolves the category of a hand from its features.
    ///
    /// The flush and straight features propose at most one category, the rank
    /// multiplicities propose their own independently, and the strongest
    /// proposed category wins.
    pub fn resolve(features: &HandFeatures) -> HandCategory {
        let mut candidates = Vec::with_capacity(3);

        if features.is_flush() && features.is_royal() {
            candidates.push(HandCategory::RoyalFlush);
        } else if features.is_flush() && features.is_straight() {
            candidates.push(HandCategory::StraightFlush);
        } else if features.is_flush() {
            candidates.push(HandCategory::Flush);
        } else if features.is_straight() {
            candidates.push(HandCategory::Straight);
        }

        // Four of a kind and full house are checked independently, both fire
        // only with duplicated cards.
        match features.unique_ranks() {
            2 => {
                if features.has_multiplicity(4) {
                    candidates.push(HandCategory::FourOfAKind);
                }

                if features.has_multiplicity(3) {
                    candidates.push(HandCategory::FullHouse);
                }
            }
            3 => {
                if features.has_multiplicity(3) {
                    candidates.push(HandCategory::ThreeOfAKind);
                }

                if features.ranks_with_multiplicity(2) == 2 {
                    candidates.push(HandCategory::TwoPair);
                }
            }
            4 => candidates.push(HandCategory::Pair),
            _ => {}
        }

        candidates
            .into_iter()
            .max()
            .unwrap_or(HandCategory::HighCard)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a name that is not a category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown hand category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for HandCategory {
    type Err = UnknownCategory;

    /// Parses a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
