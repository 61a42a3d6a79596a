// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand features used to classify a hand.
use ahash::AHashMap;

use handrank_cards::{Card, Rank};

/// The ace-low straight sorted ranks.
const WHEEL: [i64; 5] = [2, 3, 4, 5, 14];

/// The ranks of a royal flush.
const ROYAL: [i64; 5] = [10, 11, 12, 13, 14];

/// Structural features of a hand.
///
/// The features are split in two families, the suit and sequence features
/// (flush and straight) and the rank multiplicity features.
#[derive(Debug, Clone)]
pub struct HandFeatures {
    sorted_ranks: Vec<i64>,
    straight_ranks: Vec<i64>,
    rank_counts: AHashMap<Rank, usize>,
    is_flush: bool,
    is_straight: bool,
}

impl HandFeatures {
    /// Computes the features of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_ranks = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
        sorted_ranks.sort_unstable();

        let is_flush = cards.windows(2).all(|w| w[0].suit() == w[1].suit());

        // An ace plays low in a 5-4-3-2-A straight, the shifted ranks are only
        // used for straights, rank counts use the card ranks.
        let (is_straight, straight_ranks) = if sorted_ranks == WHEEL {
            (true, vec![1, 2, 3, 4, 5])
        } else {
            let consecutive = sorted_ranks
                .windows(2)
                .all(|w| w[0].checked_add(1) == Some(w[1]));
            (consecutive, sorted_ranks.clone())
        };

        let mut rank_counts = AHashMap::with_capacity(cards.len());
        for card in cards {
            *rank_counts.entry(card.rank()).or_insert(0) += 1;
        }

        Self {
            sorted_ranks,
            straight_ranks,
            rank_counts,
            is_flush,
            is_straight,
        }
    }

    /// The hand ranks in non-decreasing order.
    pub fn sorted_ranks(&self) -> &[i64] {
        &self.sorted_ranks
    }

    /// The number of distinct ranks.
    pub fn unique_ranks(&self) -> usize {
        self.rank_counts.len()
    }

    /// How many cards have the given rank.
    pub fn rank_count(&self, rank: Rank) -> usize {
        self.rank_counts.get(&rank).copied().unwrap_or_default()
    }

    /// Checks if any rank appears exactly `n` times.
    pub fn has_multiplicity(&self, n: usize) -> bool {
        self.rank_counts.values().any(|&count| count == n)
    }

    /// The number of ranks that appear exactly `n` times.
    pub fn ranks_with_multiplicity(&self, n: usize) -> usize {
        self.rank_counts.values().filter(|&&count| count == n).count()
    }

    /// All cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.is_flush
    }

    /// The ranks are consecutive, with the ace playing high or low.
    pub fn is_straight(&self) -> bool {
        self.is_straight
    }

    /// The straight ranks are ten to ace.
    pub fn is_royal(&self) -> bool {
        self.straight_ranks == ROYAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(tokens: &[&str]) -> HandFeatures {
        HandFeatures::new(&Card::parse_hand(tokens).unwrap())
    }

    #[test]
    fn sorted_ranks() {
        let f = features(&["KD", "5H", "2D", "10C", "JH"]);
        assert_eq!(f.sorted_ranks(), &[2, 5, 10, 11, 13]);
        assert_eq!(f.unique_ranks(), 5);
        assert!(!f.is_flush());
        assert!(!f.is_straight());
    }

    #[test]
    fn flush() {
        let f = features(&["2D", "KD", "7D", "6D", "5D"]);
        assert!(f.is_flush());
        assert!(!f.is_straight());

        let f = features(&["2D", "KD", "7D", "6D", "5C"]);
        assert!(!f.is_flush());
    }

    #[test]
    fn straight() {
        let f = features(&["JC", "10H", "9C", "8C", "7D"]);
        assert!(f.is_straight());
        assert!(!f.is_royal());

        let f = features(&["KH", "AH", "QH", "JH", "10H"]);
        assert!(f.is_straight());
        assert!(f.is_royal());

        // A pair breaks the sequence.
        let f = features(&["JC", "10H", "9C", "9D", "7D"]);
        assert!(!f.is_straight());
    }

    #[test]
    fn ace_low_straight() {
        let f = features(&["AD", "2S", "3H", "4C", "5D"]);
        assert!(f.is_straight());
        assert!(!f.is_royal());

        // Rank counts still use the ace high rank.
        assert_eq!(f.sorted_ranks(), &[2, 3, 4, 5, 14]);
        assert_eq!(f.rank_count(Rank::ACE), 1);
        assert_eq!(f.unique_ranks(), 5);

        // No wrap around.
        let f = features(&["QD", "KS", "AH", "2C", "3D"]);
        assert!(!f.is_straight());
    }

    #[test]
    fn straight_with_unchecked_ranks() {
        let f = features(&["-1H", "0H", "1H", "2H", "3H"]);
        assert_eq!(f.sorted_ranks(), &[-1, 0, 1, 2, 3]);
        assert!(f.is_straight());
        assert!(f.is_flush());
        assert!(!f.is_royal());

        // The sequence check doesn't overflow.
        let hand = vec![format!("{}H", i64::MAX); 5];
        let f = HandFeatures::new(&Card::parse_hand(&hand).unwrap());
        assert!(!f.is_straight());
        assert_eq!(f.unique_ranks(), 1);
    }

    #[test]
    fn rank_counts() {
        let f = features(&["2H", "2D", "2S", "10H", "10C"]);
        assert_eq!(f.unique_ranks(), 2);
        assert_eq!(f.rank_count(Rank::DEUCE), 3);
        assert_eq!(f.rank_count(Rank::TEN), 2);
        assert_eq!(f.rank_count(Rank::ACE), 0);
        assert!(f.has_multiplicity(3));
        assert!(f.has_multiplicity(2));
        assert!(!f.has_multiplicity(4));

        let f = features(&["KD", "KH", "5C", "5S", "6D"]);
        assert_eq!(f.unique_ranks(), 3);
        assert_eq!(f.ranks_with_multiplicity(2), 2);
        assert_eq!(f.ranks_with_multiplicity(1), 1);
    }
}
