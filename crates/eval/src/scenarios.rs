// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bundled hands with their expected evaluation.
use std::fmt;

use crate::{HandCategory, ParseError};

/// The expected result of evaluating a scenario hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The hand category.
    Category(HandCategory),
    /// A card token is invalid.
    ParseError,
}

impl Expected {
    /// Checks if a result matches this expectation.
    pub fn matches(&self, result: &Result<HandCategory, ParseError>) -> bool {
        match (self, result) {
            (Expected::Category(expected), Ok(category)) => expected == category,
            (Expected::ParseError, Err(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Category(category) => write!(f, "{category}"),
            Expected::ParseError => write!(f, "ParseError"),
        }
    }
}

/// A hand and its expected evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// The hand card tokens.
    pub hand: [&'static str; 5],
    /// The expected result.
    pub expected: Expected,
}

const fn scenario(hand: [&'static str; 5], category: HandCategory) -> Scenario {
    Scenario {
        hand,
        expected: Expected::Category(category),
    }
}

/// The bundled scenarios.
pub const SCENARIOS: [Scenario; 13] = [
    scenario(["KH", "AH", "QH", "JH", "10H"], HandCategory::RoyalFlush),
    scenario(["QC", "JC", "10C", "9C", "8C"], HandCategory::StraightFlush),
    scenario(["5C", "5S", "5H", "5D", "QH"], HandCategory::FourOfAKind),
    scenario(["2H", "2D", "2S", "10H", "10C"], HandCategory::FullHouse),
    scenario(["2D", "KD", "7D", "6D", "5D"], HandCategory::Flush),
    scenario(["JC", "10H", "9C", "8C", "7D"], HandCategory::Straight),
    scenario(["10H", "10C", "10D", "2D", "5S"], HandCategory::ThreeOfAKind),
    scenario(["KD", "KH", "5C", "5S", "6D"], HandCategory::TwoPair),
    scenario(["2D", "2S", "9C", "KD", "10C"], HandCategory::Pair),
    scenario(["KD", "5H", "2D", "10C", "JH"], HandCategory::HighCard),
    // Ace low.
    scenario(["AD", "2S", "3H", "4C", "5D"], HandCategory::Straight),
    scenario(["AH", "2H", "3H", "4H", "5H"], HandCategory::StraightFlush),
    Scenario {
        hand: ["XH", "AH", "QH", "JH", "10H"],
        expected: Expected::ParseError,
    },
];
