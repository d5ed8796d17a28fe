// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands output.
use anyhow::{Result, anyhow};
use rand::Rng;
use std::fmt::Write;

use handrank_eval::{Card, Deck, Evaluator, HandRank, Showdown};

/// Size of a full board.
const BOARD_SIZE: usize = 5;

/// Evaluates a single hand.
pub fn eval(evaluator: &Evaluator, board: &[String], hole: &[String]) -> Result<String> {
    let rank = evaluator.evaluate_hand(board, hole)?;

    let mut out = String::new();
    writeln!(out, "Cards: {} | {}", board.join(" "), hole.join(" "))?;
    writeln!(out, "Hand:  {rank}")?;
    writeln!(out, "Rank:  0x{:06x}", rank.value())?;
    Ok(out)
}

/// Runs a showdown, each player is a comma separated list of hole cards.
pub fn showdown(evaluator: &Evaluator, board: &[String], players: &[String]) -> Result<String> {
    let holes = players
        .iter()
        .map(|p| p.split(',').map(|t| t.trim().to_string()).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let showdown = evaluator.showdown(board, &holes)?;
    format_showdown(board, &holes, &showdown)
}

/// Deals a random board and hole cards for each player and runs a showdown.
pub fn deal<R: Rng>(evaluator: &Evaluator, players: usize, rng: &mut R) -> Result<String> {
    let mut deck = Deck::new_and_shuffled(rng);
    let mut deal_tokens = |count: usize| -> Result<Vec<String>> {
        (0..count)
            .map(|_| {
                deck.deal()
                    .map(|c: Card| c.to_string())
                    .ok_or_else(|| anyhow!("Not enough cards for {players} players"))
            })
            .collect()
    };

    let holes = (0..players)
        .map(|_| deal_tokens(2))
        .collect::<Result<Vec<_>>>()?;
    let board = deal_tokens(BOARD_SIZE)?;

    let showdown = evaluator.showdown(&board, &holes)?;
    format_showdown(&board, &holes, &showdown)
}

fn format_showdown(board: &[String], holes: &[Vec<String>], showdown: &Showdown) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Board: {}", board.join(" "))?;

    for (idx, (hole, rank)) in holes.iter().zip(&showdown.ranks).enumerate() {
        writeln!(out, "Player {}: {} {}", idx + 1, hole.join(" "), describe(rank))?;
    }

    let names = showdown
        .winners
        .iter()
        .map(|idx| (idx + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    match showdown.winners.len() {
        0 => writeln!(out, "No players")?,
        1 => writeln!(out, "Winner: player {names}")?,
        _ => writeln!(out, "Split pot: players {names}")?,
    }

    Ok(out)
}

fn describe(rank: &HandRank) -> String {
    format!("{rank} (0x{:06x})", rank.value())
}
