// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per rank occurrence counts.

/// Offset from an ace-high rank value to its histogram slot (deuces in slot 0).
pub const RANK_OFFSET: u8 = 2;

/// Number of histogram slots, deuce to ace.
pub const NUM_RANKS: usize = 13;

/// Occurrences of each rank value in a set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankHistogram {
    counts: [u8; NUM_RANKS],
}

impl RankHistogram {
    /// Builds the histogram for ace-high rank values (2..=14).
    pub fn new(values: &[u8]) -> Self {
        let mut counts = [0; NUM_RANKS];
        for &v in values {
            debug_assert!(Self::slot(v).is_some(), "rank value {v} out of range");
            if let Some(slot) = Self::slot(v) {
                counts[slot] += 1;
            }
        }

        Self { counts }
    }

    /// The number of cards with the given rank value.
    pub fn count(&self, value: u8) -> u8 {
        Self::slot(value).map(|s| self.counts[s]).unwrap_or(0)
    }

    /// Returns the highest rank value with at least `size` cards.
    pub fn highest_group(&self, size: u8) -> Option<u8> {
        self.counts
            .iter()
            .rposition(|&count| count >= size)
            .map(|slot| slot as u8 + RANK_OFFSET)
    }

    fn slot(value: u8) -> Option<usize> {
        value
            .checked_sub(RANK_OFFSET)
            .map(usize::from)
            .filter(|&slot| slot < NUM_RANKS)
    }
}
