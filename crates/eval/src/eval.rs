// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
use ahash::AHashSet;
use log::debug;

use handrank_cards::{Card, Rank, parse_cards};

use crate::{EvalConfig, EvalError, HandRank};

/// Evaluates the best 5 cards hand out of 5 to 7 cards.
///
/// The evaluator holds no state besides its configuration and can be shared
/// or copied across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    pub(crate) config: EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Result<Self, EvalError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The evaluator configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Parses the community and player card tokens and evaluates the hand.
    pub fn evaluate_hand<S, T>(&self, community: &[S], player: &[T]) -> Result<HandRank, EvalError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut cards = parse_cards(community)?;
        cards.extend(parse_cards(player)?);
        self.evaluate(&cards)
    }

    /// Evaluates a set of cards.
    pub fn evaluate(&self, cards: &[Card]) -> Result<HandRank, EvalError> {
        self.check_cards(cards)?;

        let values = self.values(cards);
        let rank = self
            .straight_flush(cards)
            .or_else(|| self.four_of_a_kind(&values))
            .or_else(|| self.full_house(&values))
            .or_else(|| self.flush(cards))
            .or_else(|| self.straight(&values))
            .or_else(|| self.three_of_a_kind(&values))
            .or_else(|| self.two_pair(&values))
            .or_else(|| self.one_pair(&values))
            .or_else(|| self.high_card(&values))
            .ok_or(EvalError::CardCount {
                count: cards.len(),
                min: self.config.min_cards,
                max: self.config.max_cards,
            })?;

        debug!("Evaluated {cards:?} as {rank}");
        Ok(rank)
    }

    /// The ace-high value of a rank.
    pub(crate) fn value(&self, rank: Rank) -> u8 {
        match rank {
            Rank::Ace => self.config.ace_high,
            rank => rank.value(),
        }
    }

    /// The ace-high values of the cards.
    pub(crate) fn values(&self, cards: &[Card]) -> Vec<u8> {
        cards.iter().map(|c| self.value(c.rank())).collect()
    }

    fn check_cards(&self, cards: &[Card]) -> Result<(), EvalError> {
        let (min, max) = (self.config.min_cards, self.config.max_cards);
        if !(min..=max).contains(&cards.len()) {
            debug!("Rejected {} cards hand {cards:?}", cards.len());
            return Err(EvalError::CardCount {
                count: cards.len(),
                min,
                max,
            });
        }

        check_duplicates(cards)
    }
}

/// Fails with the first card that appears twice.
pub(crate) fn check_duplicates(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = AHashSet::with_capacity(cards.len());
    match cards.iter().find(|&&c| !seen.insert(c)) {
        Some(&card) => Err(EvalError::DuplicateCard(card)),
        None => Ok(()),
    }
}

/// Evaluates a hand with the default evaluator.
///
/// ```
/// # use handrank_eval::*;
/// let trips = evaluate_hand(&["2_H", "7_D", "9_C", "K_S", "A_H"], &["A_S", "A_C"]).unwrap();
/// let pair = evaluate_hand(&["2_H", "7_D", "9_C", "K_S", "A_H"], &["A_S", "3_C"]).unwrap();
/// assert_eq!(trips.category(), HandCategory::ThreeOfAKind);
/// assert!(trips > pair);
/// ```
pub fn evaluate_hand<S, T>(community: &[S], player: &[T]) -> Result<HandRank, EvalError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    Evaluator::default().evaluate_hand(community, player)
}
