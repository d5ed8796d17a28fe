// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example census
// ...
// Total hands      2598960
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Staight:         10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use handrank_eval::*;

fn main() {
    // Evaluate all 2.6M 5 cards hands.
    let now = Instant::now();
    let evaluator = Evaluator::default();
    let mut counts = [0usize; 10];

    Deck::default().for_each(5, |hand| {
        if let Ok(rank) = evaluator.evaluate(hand) {
            counts[rank.category().tier() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category.tier() as usize]);
    }
}
