// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand is classified in two steps, first [HandFeatures] computes the hand
//! flush, straight, and rank multiplicity features, then
//! [HandCategory::resolve] maps the features to the strongest category they
//! satisfy.
//!
//! [HandValue::eval] evaluates parsed cards, [evaluate] and [find_poker_hand]
//! parse card tokens and log the hand with its category.

mod category;
pub use category::{HandCategory, UnknownCategory};

mod features;
pub use features::HandFeatures;

mod value;
pub use value::{HandValue, evaluate, find_poker_hand};
