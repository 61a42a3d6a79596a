// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank five cards Poker hand evaluator.
//!
//! The evaluator classifies a hand of card tokens into its strongest
//! [HandCategory], from a high card to a royal flush:
//!
//! ```
//! # use handrank_eval::*;
//! let category = evaluate(&["KH", "AH", "QH", "JH", "10H"]).unwrap();
//! assert_eq!(category, HandCategory::RoyalFlush);
//! assert_eq!(category.name(), "Royal Flush");
//!
//! // The ace can play low in a straight.
//! let name = find_poker_hand(&["AD", "2S", "3H", "4C", "5D"]).unwrap();
//! assert_eq!(name, "Straight");
//! ```
//!
//! Categories are compared by strength, for parsed cards use [HandValue]:
//!
//! ```
//! # use handrank_eval::*;
//! let flush = Card::parse_hand(&["2D", "KD", "7D", "6D", "5D"]).unwrap();
//! let pair = Card::parse_hand(&["2D", "2S", "9C", "KD", "10C"]).unwrap();
//! assert!(HandValue::eval(&flush).category() > HandValue::eval(&pair).category());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandFeatures, HandValue, evaluate, find_poker_hand};

pub mod scenarios;

// Reexport cards types.
pub use handrank_cards::{Card, ParseError, Rank, Suit};
