// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker hand evaluator.
//!
//! Evaluates the best 5 cards hand out of the community cards and a player
//! hole cards (5 to 7 cards in total) and returns a [HandRank], a single
//! integer that orders hands by strength:
//!
//! ```
//! # use handrank_eval::*;
//! let board = ["5_S", "6_S", "7_S", "8_S", "2_D"];
//! let sf = evaluate_hand(&board, &["9_S", "K_C"]).unwrap();
//! let straight = evaluate_hand(&board, &["9_D", "K_C"]).unwrap();
//! assert_eq!(sf.category(), HandCategory::StraightFlush);
//! assert_eq!(straight.category(), HandCategory::Straight);
//! assert!(sf > straight);
//! ```
//!
//! The rank is built by trying a detector for each hand category from the
//! strongest (straight flush) to the weakest (high card), the first detector
//! that matches packs the category and the tie-break cards into the rank.
//!
//! Use [Evaluator::showdown] or [winners] to compare players at showdown:
//!
//! ```
//! # use handrank_eval::*;
//! let showdown = Evaluator::default()
//!     .showdown(
//!         &["2_H", "2_D", "3_C", "3_S", "9_H"],
//!         &[["4_D", "5_C"], ["2_S", "K_C"]],
//!     )
//!     .unwrap();
//! assert_eq!(showdown.winners, vec![1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod config;
pub use config::EvalConfig;

mod detect;

mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{Evaluator, evaluate_hand};

pub mod histogram;

pub mod rank;
pub use rank::{HandCategory, HandRank};

pub mod showdown;
pub use showdown::{Showdown, winners};

// Reexport cards types.
pub use handrank_cards::{Card, Deck, ParseCardError, Rank, Suit};
