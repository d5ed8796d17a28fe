// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category detectors.
//!
//! Each detector looks for one category in a set of cards and returns its
//! rank, or `None` when the cards don't make that category. Detectors are
//! tried from the strongest category so the first match is the best hand.
//!
//! Rank based detectors work on ace-high card values, the flush based ones
//! need the cards suits.
use log::trace;

use handrank_cards::Card;

use crate::{
    Evaluator, HandCategory, HandRank,
    histogram::RankHistogram,
    rank::{TOP_SLOT, pack},
};

const PAIR: usize = 2;
const TRIPS: usize = 3;
const QUADS: usize = 4;

/// A group of cards with the same rank and the values left after removing it.
#[derive(Debug)]
struct Group {
    value: u8,
    remaining: Vec<u8>,
}

/// Finds the highest ranked group with at least `size` cards.
fn find_group(values: &[u8], size: usize) -> Option<Group> {
    let value = RankHistogram::new(values).highest_group(size as u8)?;

    let mut skip = size;
    let remaining = values
        .iter()
        .copied()
        .filter(|&v| {
            if v == value && skip > 0 {
                skip -= 1;
                false
            } else {
                true
            }
        })
        .collect();

    Some(Group { value, remaining })
}

/// Sorts values from the highest.
fn sorted_desc(values: &[u8]) -> Vec<u8> {
    let mut values = values.to_vec();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

impl Evaluator {
    /// Five cards in sequence all of the same suit.
    pub(crate) fn straight_flush(&self, cards: &[Card]) -> Option<HandRank> {
        let suited = self.flush_values(cards)?;
        let fields = self.straight_fields(&suited)?;
        trace!("Straight flush in {cards:?}");
        Some(HandRank::new(HandCategory::StraightFlush, fields))
    }

    /// Four cards of the same rank and the best kicker.
    pub(crate) fn four_of_a_kind(&self, values: &[u8]) -> Option<HandRank> {
        let quads = find_group(values, QUADS)?;
        let kicker = self.kickers(&quads.remaining, self.config.hand_size - QUADS)?;
        let fields = pack(&[quads.value; QUADS], TOP_SLOT) + kicker;
        Some(HandRank::new(HandCategory::FourOfAKind, fields))
    }

    /// The best three of a kind and the best pair among the other cards.
    pub(crate) fn full_house(&self, values: &[u8]) -> Option<HandRank> {
        let trips = find_group(values, TRIPS)?;
        let pair = find_group(&trips.remaining, PAIR)?;
        let fields = pack(&[trips.value; TRIPS], TOP_SLOT) + pack(&[pair.value; PAIR], 1);
        Some(HandRank::new(HandCategory::FullHouse, fields))
    }

    /// The five best cards of a suit.
    pub(crate) fn flush(&self, cards: &[Card]) -> Option<HandRank> {
        let suited = self.flush_values(cards)?;
        let fields = pack(&suited[..self.config.hand_size], TOP_SLOT);
        Some(HandRank::new(HandCategory::Flush, fields))
    }

    /// The highest five cards in sequence.
    pub(crate) fn straight(&self, values: &[u8]) -> Option<HandRank> {
        let fields = self.straight_fields(values)?;
        Some(HandRank::new(HandCategory::Straight, fields))
    }

    /// The best three of a kind and the two best kickers.
    pub(crate) fn three_of_a_kind(&self, values: &[u8]) -> Option<HandRank> {
        let trips = find_group(values, TRIPS)?;
        let kickers = self.kickers(&trips.remaining, self.config.hand_size - TRIPS)?;
        let fields = pack(&[trips.value; TRIPS], TOP_SLOT) + kickers;
        Some(HandRank::new(HandCategory::ThreeOfAKind, fields))
    }

    /// The two best pairs and the best kicker.
    pub(crate) fn two_pair(&self, values: &[u8]) -> Option<HandRank> {
        let high = find_group(values, PAIR)?;
        let low = find_group(&high.remaining, PAIR)?;
        let kicker = self.kickers(&low.remaining, self.config.hand_size - 2 * PAIR)?;
        let fields = pack(&[high.value, high.value, low.value, low.value], TOP_SLOT) + kicker;
        Some(HandRank::new(HandCategory::TwoPair, fields))
    }

    /// The best pair and the three best kickers.
    pub(crate) fn one_pair(&self, values: &[u8]) -> Option<HandRank> {
        let pair = find_group(values, PAIR)?;
        let kickers = self.kickers(&pair.remaining, self.config.hand_size - PAIR)?;
        let fields = pack(&[pair.value; PAIR], TOP_SLOT) + kickers;
        Some(HandRank::new(HandCategory::OnePair, fields))
    }

    /// The five best cards.
    pub(crate) fn high_card(&self, values: &[u8]) -> Option<HandRank> {
        let fields = self.kickers(values, self.config.hand_size)?;
        Some(HandRank::new(HandCategory::HighCard, fields))
    }

    /// Packs the `count` highest values in the lowest `count` slots.
    ///
    /// Returns `None` if there are less than `count` values.
    fn kickers(&self, values: &[u8], count: usize) -> Option<u32> {
        if count > values.len() {
            return None;
        }

        match count.checked_sub(1) {
            Some(top_slot) => Some(pack(&sorted_desc(values)[..count], top_slot as u32)),
            None => Some(0),
        }
    }

    /// Values of the cards of a suit with at least a hand size cards, sorted
    /// from the highest.
    fn flush_values(&self, cards: &[Card]) -> Option<Vec<u8>> {
        let mut suits = vec![Vec::new(); self.config.num_suits];
        for card in cards {
            suits[card.suit().index()].push(self.value(card.rank()));
        }

        let mut flushes = suits
            .into_iter()
            .filter(|suited| suited.len() >= self.config.hand_size);
        let flush = flushes.next()?;
        debug_assert!(flushes.next().is_none(), "more than one flush suit");

        Some(sorted_desc(&flush))
    }

    /// Packs the highest straight in the values, an ace plays low when it
    /// completes a wheel.
    fn straight_fields(&self, values: &[u8]) -> Option<u32> {
        let mut distinct = sorted_desc(values);
        distinct.dedup();

        let needed = self.config.hand_size;
        let mut run = 1;
        for idx in 1..distinct.len() {
            if distinct[idx - 1] == distinct[idx] + 1 {
                run += 1;
                if run == needed {
                    let top = idx + 1 - needed;
                    return Some(pack(&distinct[top..=idx], TOP_SLOT));
                }
            } else {
                run = 1;
            }
        }

        let wheel = (0..self.config.wheel_run)
            .map(|k| self.config.wheel_top - k as u8)
            .collect::<Vec<_>>();

        if distinct.contains(&self.config.ace_high) && wheel.iter().all(|v| distinct.contains(v)) {
            let fields = pack(&wheel, TOP_SLOT) + pack(&[self.config.ace_low], 0);
            return Some(fields);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_cards::parse_cards;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        parse_cards(tokens).unwrap()
    }

    fn values(tokens: &[&str]) -> Vec<u8> {
        Evaluator::default().values(&cards(tokens))
    }

    #[test]
    fn groups() {
        let g = find_group(&[9, 4, 9, 12, 4, 9, 2], TRIPS).unwrap();
        assert_eq!(g.value, 9);
        assert_eq!(g.remaining, vec![4, 12, 4, 2]);

        let g = find_group(&[9, 4, 9, 12, 4, 9, 2], PAIR).unwrap();
        assert_eq!(g.value, 9);
        assert_eq!(g.remaining, vec![4, 12, 4, 9, 2]);

        assert!(find_group(&[9, 4, 9, 12, 4, 9, 2], QUADS).is_none());
    }

    #[test]
    fn kickers() {
        let e = Evaluator::default();
        assert_eq!(e.kickers(&[3, 14, 9], 2), Some(0xE9));
        assert_eq!(e.kickers(&[3, 14, 9], 0), Some(0));
        assert_eq!(e.kickers(&[3, 14, 9], 4), None);
    }

    #[test]
    fn straight_flush() {
        let e = Evaluator::default();
        let r = e
            .straight_flush(&cards(&["5_S", "6_S", "7_S", "8_S", "2_D", "9_S", "K_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x998765);

        // Royal flush.
        let r = e
            .straight_flush(&cards(&["10_H", "J_H", "Q_H", "K_H", "A_H", "9_D", "2_C"]))
            .unwrap();
        assert_eq!(r.values(), [14, 13, 12, 11, 10]);

        // Steel wheel.
        let r = e
            .straight_flush(&cards(&["A_D", "2_D", "3_D", "4_D", "5_D", "K_C", "K_S"]))
            .unwrap();
        assert_eq!(r.values(), [5, 4, 3, 2, 1]);

        // Straight and flush with different cards.
        assert!(
            e.straight_flush(&cards(&["5_S", "6_S", "7_S", "8_D", "9_S", "K_S", "2_C"]))
                .is_none()
        );
    }

    #[test]
    fn four_of_a_kind() {
        let e = Evaluator::default();
        let r = e
            .four_of_a_kind(&values(&["7_S", "7_H", "7_D", "7_C", "2_D", "K_S", "9_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x87777D);

        assert!(
            e.four_of_a_kind(&values(&["7_S", "7_H", "7_D", "2_D", "K_S"]))
                .is_none()
        );
    }

    #[test]
    fn full_house() {
        let e = Evaluator::default();
        let r = e
            .full_house(&values(&["Q_S", "Q_H", "Q_D", "4_C", "4_D", "K_S", "9_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x7CCC44);

        // Two trips, the lower one plays as the pair.
        let r = e
            .full_house(&values(&["3_S", "3_H", "3_D", "8_C", "8_D", "8_S", "A_C"]))
            .unwrap();
        assert_eq!(r.values(), [8, 8, 8, 3, 3]);

        // Trips and two pairs, the higher pair plays.
        let r = e
            .full_house(&values(&["3_S", "3_H", "3_D", "8_C", "8_D", "K_S", "K_C"]))
            .unwrap();
        assert_eq!(r.values(), [3, 3, 3, 13, 13]);

        // Trips without a pair.
        assert!(
            e.full_house(&values(&["3_S", "3_H", "3_D", "8_C", "9_D", "K_S", "A_C"]))
                .is_none()
        );
    }

    #[test]
    fn flush() {
        let e = Evaluator::default();
        let r = e
            .flush(&cards(&["2_H", "9_H", "J_H", "A_H", "4_H", "7_H", "K_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x6EB974);

        assert!(
            e.flush(&cards(&["2_H", "9_H", "J_H", "A_H", "4_D", "7_C", "K_C"]))
                .is_none()
        );
    }

    #[test]
    fn straight() {
        let e = Evaluator::default();
        let r = e
            .straight(&values(&["9_S", "10_H", "J_D", "Q_C", "K_D", "A_S", "2_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x5EDCBA);

        // Duplicated ranks don't break the run.
        let r = e
            .straight(&values(&["4_S", "5_H", "5_D", "6_C", "7_D", "8_S", "8_C"]))
            .unwrap();
        assert_eq!(r.values(), [8, 7, 6, 5, 4]);

        // The higher of two overlapping runs.
        let r = e
            .straight(&values(&["4_S", "5_H", "6_D", "7_C", "8_D", "9_S", "10_C"]))
            .unwrap();
        assert_eq!(r.values(), [10, 9, 8, 7, 6]);

        let r = e
            .straight(&values(&["A_S", "2_H", "3_D", "4_C", "5_D"]))
            .unwrap();
        assert_eq!(r.value(), 0x554321);

        // No wraparound.
        assert!(
            e.straight(&values(&["Q_S", "K_H", "A_D", "2_C", "3_D"]))
                .is_none()
        );

        // A run of four.
        assert!(
            e.straight(&values(&["2_S", "3_H", "4_D", "5_C", "K_D", "9_C"]))
                .is_none()
        );
    }

    #[test]
    fn three_of_a_kind() {
        let e = Evaluator::default();
        let r = e
            .three_of_a_kind(&values(&["2_H", "7_D", "9_C", "K_S", "A_H", "A_S", "A_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x4EEED9);
    }

    #[test]
    fn two_pair() {
        let e = Evaluator::default();
        let r = e
            .two_pair(&values(&["2_H", "2_D", "3_C", "3_S", "9_H", "4_D", "5_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x333229);

        // Three pairs, the third pair can be the kicker.
        let r = e
            .two_pair(&values(&["2_H", "2_D", "3_C", "3_S", "9_H", "9_D", "5_C"]))
            .unwrap();
        assert_eq!(r.values(), [9, 9, 3, 3, 5]);

        let r = e
            .two_pair(&values(&["2_H", "2_D", "3_C", "3_S", "9_H", "9_D", "A_C"]))
            .unwrap();
        assert_eq!(r.values(), [9, 9, 3, 3, 14]);

        assert!(
            e.two_pair(&values(&["2_H", "2_D", "3_C", "4_S", "9_H"]))
                .is_none()
        );
    }

    #[test]
    fn one_pair() {
        let e = Evaluator::default();
        let r = e
            .one_pair(&values(&["2_H", "2_D", "7_C", "8_S", "9_H", "4_D", "5_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x222987);

        assert!(
            e.one_pair(&values(&["2_H", "3_D", "7_C", "8_S", "9_H"]))
                .is_none()
        );
    }

    #[test]
    fn high_card() {
        let e = Evaluator::default();
        let r = e
            .high_card(&values(&["2_H", "A_D", "7_C", "8_S", "9_H", "4_D", "J_C"]))
            .unwrap();
        assert_eq!(r.value(), 0x0EB987);

        assert!(e.high_card(&values(&["2_H", "A_D", "7_C", "8_S"])).is_none());
    }

    #[test]
    fn kicker_ordering() {
        let e = Evaluator::default();
        let better = e
            .one_pair(&values(&["K_H", "K_D", "A_C", "8_S", "3_H"]))
            .unwrap();
        let worse = e
            .one_pair(&values(&["K_S", "K_C", "A_D", "7_S", "6_H"]))
            .unwrap();
        assert!(better > worse);

        let better = e
            .two_pair(&values(&["J_H", "J_D", "4_C", "4_S", "3_H"]))
            .unwrap();
        let worse = e
            .two_pair(&values(&["10_H", "10_D", "9_C", "9_S", "A_H"]))
            .unwrap();
        assert!(better > worse);
    }
}
