// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator configuration.
use serde::{Deserialize, Serialize};

use handrank_cards::{Rank, Suit};

use crate::{EvalError, histogram::RANK_OFFSET, rank::TIE_BREAK_FIELDS};

/// Constants shared by all the hand detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Value of an ace playing high.
    pub ace_high: u8,
    /// Value of an ace playing low in a wheel straight.
    pub ace_low: u8,
    /// Number of cards in a made hand.
    pub hand_size: usize,
    /// Number of suits in the deck.
    pub num_suits: usize,
    /// Top card of the wheel straight.
    pub wheel_top: u8,
    /// Number of consecutive low cards that make a wheel with an ace.
    pub wheel_run: usize,
    /// Minimum number of cards to evaluate.
    pub min_cards: usize,
    /// Maximum number of cards to evaluate.
    pub max_cards: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            ace_high: 14,
            ace_low: 1,
            hand_size: 5,
            num_suits: 4,
            wheel_top: 5,
            wheel_run: 4,
            min_cards: 5,
            max_cards: 7,
        }
    }
}

impl EvalConfig {
    /// Checks the config is consistent with the rank encoding.
    pub fn validate(&self) -> Result<(), EvalError> {
        let invalid = |msg: String| Err(EvalError::InvalidConfig(msg));

        if self.ace_high != Rank::King.value() + 1 {
            return invalid(format!("ace_high {} must follow the king", self.ace_high));
        }

        if self.ace_low == 0 || self.ace_low >= RANK_OFFSET {
            return invalid(format!("ace_low {} must be below the deuce", self.ace_low));
        }

        if self.hand_size != TIE_BREAK_FIELDS {
            return invalid(format!(
                "hand_size {} must be {TIE_BREAK_FIELDS}",
                self.hand_size
            ));
        }

        if self.num_suits != Suit::COUNT {
            return invalid(format!("num_suits {} must be {}", self.num_suits, Suit::COUNT));
        }

        if self.wheel_run + 1 != self.hand_size {
            return invalid(format!(
                "wheel_run {} plus the ace must make a hand",
                self.wheel_run
            ));
        }

        if self.wheel_top as usize + 1 != RANK_OFFSET as usize + self.wheel_run {
            return invalid(format!(
                "wheel_top {} must end a run of {} from the deuce",
                self.wheel_top, self.wheel_run
            ));
        }

        if self.min_cards < self.hand_size || self.min_cards > self.max_cards {
            return invalid(format!(
                "cards range {}..={} must start at hand_size {}",
                self.min_cards, self.max_cards, self.hand_size
            ));
        }

        // With 2 * hand_size cards two suits could hold a flush.
        if self.max_cards >= 2 * self.hand_size {
            return invalid(format!(
                "max_cards {} allows more than one flush suit",
                self.max_cards
            ));
        }

        Ok(())
    }
}
