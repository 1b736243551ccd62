//! Win detection over the finish order, and score deltas per outcome.
//!
//! A game can resolve before everyone empties their hand: the outcome is a
//! pure function of the role sequence of finishers. Outcomes form a closed
//! enum so scoring is exhaustive; there is no "unrecognized result" path.

use serde::Serialize;

use super::roles::{GameMode, Role};
use super::state::SEATS;

/// Every way a game can end, across both modes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    LandlordsBigWin,
    LandlordsWin,
    Tie,
    FarmersWin,
    FarmersBigWin,
    DoubleLandlordBigWin,
    DoubleLandlordWin,
    FarmersWinOverDouble,
    FarmersBigWinOverDouble,
}

/// Resolve the role sequence of finishers (first to last) to an outcome, if
/// the sequence already determines one.
///
/// Standard mode needs at least two finishers, double-landlord mode one. A
/// complete 4-long sequence always resolves: every arrangement of the role
/// multiset is covered below.
pub fn resolve_finish_order(mode: GameMode, finish_roles: &[Role]) -> Option<GameOutcome> {
    use Role::{DoubleLandlord as DD, Farmer as F, Landlord as D};

    match mode {
        GameMode::Standard => match finish_roles {
            [D, D, ..] => Some(GameOutcome::LandlordsBigWin),
            [F, F, ..] => Some(GameOutcome::FarmersBigWin),
            [D, F, D, ..] => Some(GameOutcome::LandlordsWin),
            [F, D, F, ..] => Some(GameOutcome::FarmersWin),
            [D, F, F, D] | [F, D, D, F] => Some(GameOutcome::Tie),
            _ => None,
        },
        GameMode::DoubleLandlord => match finish_roles {
            [DD, ..] => Some(GameOutcome::DoubleLandlordBigWin),
            [F, F, F, ..] => Some(GameOutcome::FarmersBigWinOverDouble),
            [F, DD, ..] => Some(GameOutcome::DoubleLandlordWin),
            [F, F, DD, ..] => Some(GameOutcome::FarmersWinOverDouble),
            _ => None,
        },
    }
}

/// Cumulative score change per seat for an outcome, given the seats' roles.
pub fn score_deltas(outcome: GameOutcome, roles: &[Role; SEATS]) -> [i32; SEATS] {
    let (landlord_side, farmer) = match outcome {
        GameOutcome::LandlordsBigWin => (2, -2),
        GameOutcome::LandlordsWin => (1, -1),
        GameOutcome::Tie => (0, 0),
        GameOutcome::FarmersWin => (-1, 1),
        GameOutcome::FarmersBigWin => (-2, 2),
        GameOutcome::DoubleLandlordBigWin => (6, -2),
        GameOutcome::DoubleLandlordWin => (3, -1),
        GameOutcome::FarmersWinOverDouble => (-3, 1),
        GameOutcome::FarmersBigWinOverDouble => (-6, 2),
    };

    let mut deltas = [0; SEATS];
    for (seat, role) in roles.iter().enumerate() {
        deltas[seat] = if role.is_landlord_side() {
            landlord_side
        } else {
            farmer
        };
    }
    deltas
}
