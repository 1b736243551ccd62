//! Default stand-in policy: the weakest legal simple combination.

use crate::domain::generate_hints;
use crate::domain::{Card, ComboInfo};

use super::{AiAction, AiPolicy};

/// Plays the cheapest legal single, pair, or triple; passes when none beats
/// the pile. Leading a free trick-round always finds a play (any single is
/// legal), so `Pass` is only ever returned where passing is itself legal.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyLowest;

impl AiPolicy for GreedyLowest {
    fn decide(&self, hand: &[Card], pile: Option<&ComboInfo>, is_first_turn: bool) -> AiAction {
        match generate_hints(hand, pile, is_first_turn).into_iter().next() {
            Some(hint) => AiAction::Play(hint.cards),
            None => AiAction::Pass,
        }
    }
}
