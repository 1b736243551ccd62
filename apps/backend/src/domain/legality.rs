//! Play legality: is this candidate set playable from this hand, against this
//! pile, right now?

use std::cmp::Ordering;
use std::collections::HashMap;

use super::cards_types::{Card, DIAMOND_FOUR};
use super::combos::{self, ComboInfo};
use crate::errors::domain::{DomainError, ValidationKind};

/// Check a candidate play and classify it on success.
///
/// Order of checks mirrors the reasons a player can be told: ownership first,
/// then shape, then the first-turn Diamond-4 rule, then the beat requirement.
pub fn check_legal_play(
    candidate: &[Card],
    hand: &[Card],
    pile: Option<&ComboInfo>,
    is_first_turn: bool,
) -> Result<ComboInfo, DomainError> {
    if !is_subset_of_hand(candidate, hand) {
        return Err(DomainError::validation(
            ValidationKind::CardsNotInHand,
            "selected cards are not all in your hand",
        ));
    }

    let info = combos::classify(candidate)?;

    if is_first_turn {
        if !candidate.contains(&DIAMOND_FOUR) {
            return Err(DomainError::validation(
                ValidationKind::FirstTurnNeedsDiamondFour,
                "the first play of the game must include the four of diamonds",
            ));
        }
        // Any classifiable combination carrying the 4♦ opens the game.
        return Ok(info);
    }

    let Some(pile) = pile else {
        // New trick-round: free lead.
        return Ok(info);
    };

    if info.kind != pile.kind || info.cards.len() != pile.cards.len() {
        return Err(DomainError::validation(
            ValidationKind::ComboMismatch,
            format!("must answer with a {:?} of {} cards", pile.kind, pile.cards.len()),
        ));
    }

    if combos::compare(&info, pile) != Ordering::Greater {
        return Err(DomainError::validation(
            ValidationKind::TooWeak,
            format!("your {:?} does not beat the pile", info.kind),
        ));
    }

    Ok(info)
}

/// Multiset containment: duplicate selections of one physical card must fail
/// even though a 52-card deal never hands out duplicates.
fn is_subset_of_hand(candidate: &[Card], hand: &[Card]) -> bool {
    let mut counts: HashMap<Card, i32> = HashMap::new();
    for c in hand {
        *counts.entry(*c).or_insert(0) += 1;
    }
    for c in candidate {
        let n = counts.entry(*c).or_insert(0);
        *n -= 1;
        if *n < 0 {
            return false;
        }
    }
    true
}
