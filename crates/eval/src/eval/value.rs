// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation entry points.
use log::info;
use std::fmt;

use handrank_cards::{Card, ParseError};

use super::{category::HandCategory, features::HandFeatures};

/// A hand with its resolved category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandValue {
    cards: Vec<Card>,
    category: HandCategory,
}

impl HandValue {
    /// Evaluates a hand.
    ///
    /// The hand size and duplicated cards are not checked.
    pub fn eval(cards: &[Card]) -> HandValue {
        let features = HandFeatures::new(cards);
        HandValue {
            cards: cards.to_vec(),
            category: HandCategory::resolve(&features),
        }
    }

    /// Parses the card tokens and evaluates the hand.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<HandValue, ParseError> {
        Card::parse_hand(tokens).map(|cards| HandValue::eval(&cards))
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The evaluated cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand: [")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] --> {}", self.category)
    }
}

/// Evaluates a hand of card tokens and returns its category.
///
/// Logs a line with the hand tokens and the category name.
pub fn evaluate<S: AsRef<str>>(hand: &[S]) -> Result<HandCategory, ParseError> {
    let category = HandValue::parse(hand)?.category();
    let tokens = hand.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
    info!("Hand: {tokens:?} --> {category}");
    Ok(category)
}

/// Evaluates a hand of card tokens and returns the category name.
pub fn find_poker_hand<S: AsRef<str>>(hand: &[S]) -> Result<&'static str, ParseError> {
    evaluate(hand).map(|category| category.name())
}
