// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the packed hand rank.
//!
//! A [HandRank] packs a category tier and five tie-break card values into
//! fixed width 4 bits fields, the tier in the most significant field:
//!
//! ```text
//!   +------+------+------+------+------+------+
//!   | tier |  v4  |  v3  |  v2  |  v1  |  v0  |
//!   +------+------+------+------+------+------+
//!   tier = category (high card=0, ..., straight flush=9)
//!   v4..v0 = tie-break card values in descending significance
//! ```
//!
//! so that comparing two ranks as integers gives the poker hand ordering.
use serde::Serialize;
use std::fmt;

use handrank_cards::Rank;

/// Width in bits of a rank field.
pub const FIELD_BITS: u32 = 4;

/// Number of tie-break fields.
pub const TIE_BREAK_FIELDS: usize = 5;

/// The most significant tie-break slot.
pub(crate) const TOP_SLOT: u32 = TIE_BREAK_FIELDS as u32 - 1;

/// The slot holding the category tier.
const TIER_SLOT: u32 = TIE_BREAK_FIELDS as u32;

const FIELD_BASE: u32 = 1 << FIELD_BITS;
const FIELD_MASK: u32 = FIELD_BASE - 1;

/// Positional weight of a field slot.
#[inline]
pub(crate) fn weight(slot: u32) -> u32 {
    FIELD_BASE.pow(slot)
}

/// Packs values in descending slots starting from `top_slot`.
///
/// Results for disjoint slots can be added together.
pub(crate) fn pack(values: &[u8], top_slot: u32) -> u32 {
    debug_assert!(values.len() <= top_slot as usize + 1, "too many values");

    values
        .iter()
        .zip((0..=top_slot).rev())
        .map(|(&v, slot)| v as u32 * weight(slot))
        .sum()
}

/// A poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    /// No matches.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair = 2,
    /// Two different pairs.
    TwoPair = 3,
    /// Three cards of the same rank.
    ThreeOfAKind = 4,
    /// Five cards in a sequence.
    Straight = 5,
    /// Five cards of the same suit.
    Flush = 6,
    /// Three of one rank and two of another.
    FullHouse = 7,
    /// Four cards of the same rank.
    FourOfAKind = 8,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 9,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category tier.
    pub fn tier(&self) -> u8 {
        *self as u8
    }

    /// Converts a tier to a category.
    pub fn from_tier(tier: u8) -> Option<HandCategory> {
        HandCategory::categories().find(|c| c.tier() == tier)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// The rank of a hand.
///
/// Ranks are totally ordered, a greater rank is a stronger hand and equal
/// ranks split the pot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HandRank(u32);

impl HandRank {
    /// Creates a rank for a category given the packed tie-break fields.
    pub(crate) fn new(category: HandCategory, fields: u32) -> HandRank {
        debug_assert!(fields < weight(TIER_SLOT), "fields overflow into tier");
        HandRank(category.tier() as u32 * weight(TIER_SLOT) + fields)
    }

    /// The packed integer value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        let tier = (self.0 >> (TIER_SLOT * FIELD_BITS)) as u8;
        match HandCategory::from_tier(tier) {
            Some(category) => category,
            None => panic!("Invalid hand rank 0x{:x}", self.0),
        }
    }

    /// The tie-break card values from the most significant.
    ///
    /// An ace playing low in a wheel straight has value 1.
    pub fn values(&self) -> [u8; TIE_BREAK_FIELDS] {
        let mut values = [0; TIE_BREAK_FIELDS];
        for (v, slot) in values.iter_mut().zip((0..=TOP_SLOT).rev()) {
            *v = ((self.0 >> (slot * FIELD_BITS)) & FIELD_MASK) as u8;
        }
        values
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category())?;

        for (idx, v) in self.values().into_iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            match Rank::from_value(v) {
                Some(rank) => write!(f, "{rank}")?,
                None => write!(f, "{v}")?,
            }
        }

        f.write_str("]")
    }
}

impl fmt::Debug for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandRank(0x{:06x} {self})", self.0)
    }
}
