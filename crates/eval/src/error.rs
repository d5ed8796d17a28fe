// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use handrank_cards::{Card, ParseCardError};

/// Errors returned by the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// The number of cards is outside the evaluator bounds.
    #[error("expected between {min} and {max} cards, got {count}")]
    CardCount {
        /// The number of cards given.
        count: usize,
        /// The minimum number of cards.
        min: usize,
        /// The maximum number of cards.
        max: usize,
    },
    /// The same card was given more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The evaluator configuration is inconsistent.
    #[error("invalid evaluator config: {0}")]
    InvalidConfig(String),
}
