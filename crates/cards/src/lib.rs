// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank cards types.
//!
//! This crate defines the cards types and the parser for card tokens, where a
//! token is a rank text followed by a single suit character:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::parse("AH").unwrap();
//! assert_eq!(ah, Card::new(Rank::ACE, Suit::new('H')));
//!
//! let tc = "10C".parse::<Card>().unwrap();
//! assert_eq!(tc.rank().value(), 10);
//! ```
//!
//! Invalid ranks are reported with a [ParseError]:
//!
//! ```
//! # use handrank_cards::{Card, ParseError};
//! let err = Card::parse("XH").unwrap_err();
//! assert!(matches!(err, ParseError::InvalidRank { .. }));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseError, Rank, Suit};
