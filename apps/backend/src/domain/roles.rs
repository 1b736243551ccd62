//! Role teams and game modes.

use serde::Serialize;

/// Per-seat role for one game. Landlords are the holders of the marker cards
/// (3♠ and A♠); when a single seat holds both it plays alone as the double
/// landlord against three farmers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Landlord,
    DoubleLandlord,
    Farmer,
}

impl Role {
    pub fn is_landlord_side(self) -> bool {
        matches!(self, Role::Landlord | Role::DoubleLandlord)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Standard,
    DoubleLandlord,
}
