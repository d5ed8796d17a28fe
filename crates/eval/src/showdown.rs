// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between players sharing the same community cards.
use log::debug;
use serde::Serialize;

use handrank_cards::parse_cards;

use crate::{EvalError, Evaluator, HandRank, eval::check_duplicates};

/// The result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showdown {
    /// Each player hand rank in the order players were given.
    pub ranks: Vec<HandRank>,
    /// The indices of the players with the best hand, more than one on a split.
    pub winners: Vec<usize>,
}

/// Returns the indices of all the players with the highest rank.
pub fn winners(ranks: &[HandRank]) -> Vec<usize> {
    let Some(best) = ranks.iter().max() else {
        return Vec::new();
    };

    ranks
        .iter()
        .enumerate()
        .filter(|(_, rank)| *rank == best)
        .map(|(idx, _)| idx)
        .collect()
}

impl Evaluator {
    /// Evaluates each player hole cards with the community cards and finds
    /// the winners.
    ///
    /// Fails if any card is invalid or if a card is dealt twice across the
    /// board and all players.
    pub fn showdown<S, P>(&self, community: &[S], players: &[P]) -> Result<Showdown, EvalError>
    where
        S: AsRef<str>,
        P: AsRef<[S]>,
    {
        let board = parse_cards(community)?;
        let holes = players
            .iter()
            .map(|p| parse_cards(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let all_cards = holes.iter().flatten().chain(&board).copied().collect::<Vec<_>>();
        check_duplicates(&all_cards)?;

        let ranks = holes
            .iter()
            .map(|hole| {
                let mut cards = board.clone();
                cards.extend_from_slice(hole);
                self.evaluate(&cards)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let winners = winners(&ranks);
        debug!("Showdown on {board:?} won by {winners:?}");

        Ok(Showdown { ranks, winners })
    }
}
