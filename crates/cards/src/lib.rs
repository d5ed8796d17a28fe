// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker cards types.
//!
//! This crate define types to create cards and to parse them from the
//! `<rank>_<suit>` tokens used by game clients:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "K_D".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "A_H");
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use handrank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, TOKEN_SEPARATOR, parse_cards};

mod deck;
pub use deck::Deck;
