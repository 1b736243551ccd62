//! Hint generation: enumerate legal simple combinations from a hand.
//!
//! Only singles, pairs, and triples are enumerated. Straights, flushes and
//! full houses are deliberately left out of hints; players (and the AI
//! stand-in) can still play them manually.

use std::collections::BTreeMap;

use super::cards_types::{Card, Rank};
use super::combos::{self, ComboInfo};
use super::legality::check_legal_play;

/// One suggested play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub cards: Vec<Card>,
    pub info: ComboInfo,
}

/// All legal singles/pairs/triples from `hand` against the current pile,
/// sorted weakest first so hint cycling starts with the cheapest play.
pub fn generate_hints(hand: &[Card], pile: Option<&ComboInfo>, is_first_turn: bool) -> Vec<Hint> {
    let mut hints: Vec<Hint> = Vec::new();

    let push_if_legal = |cards: Vec<Card>, hints: &mut Vec<Hint>| {
        if let Ok(info) = check_legal_play(&cards, hand, pile, is_first_turn) {
            hints.push(Hint { cards, info });
        }
    };

    for card in hand {
        push_if_legal(vec![*card], &mut hints);
    }

    let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in hand {
        by_rank.entry(card.rank).or_default().push(*card);
    }
    for cards in by_rank.values_mut() {
        cards.sort();
        if cards.len() >= 2 {
            push_if_legal(cards[..2].to_vec(), &mut hints);
        }
        if cards.len() >= 3 {
            push_if_legal(cards[..3].to_vec(), &mut hints);
        }
    }

    hints.sort_by(|a, b| combos::compare(&a.info, &b.info));
    hints
}
