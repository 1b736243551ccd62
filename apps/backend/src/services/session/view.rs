//! Per-viewer projection of session state.
//!
//! Projection is a pure read: a viewer sees their own hand in full, everyone
//! else's as a count. The same projection serves reconnects and resyncs, so
//! there is no separate "redacted" path to drift out of sync.

use serde::Serialize;

use super::{GameResult, GameSession, Phase};
use crate::domain::{Card, ComboKind, GameMode, Role, Seat};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerPublic {
    pub user_id: i64,
    pub display_name: String,
    pub seat: Seat,
    pub score: i32,
    pub ready: bool,
    pub connected: bool,
    pub ai_controlled: bool,
    pub finished: bool,
    pub hand_count: usize,
    /// Present only for the viewer's own seat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<Card>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// The pile to beat, as shown to every viewer.
#[derive(Debug, Clone, Serialize)]
pub struct ComboView {
    pub kind: ComboKind,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub room_id: String,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    pub players: Vec<PlayerPublic>,
    pub center_pile: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_combo: Option<ComboView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_seat: Option<Seat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<i64>,
    pub is_first_turn: bool,
    /// Seat of the viewer, when they are seated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_seat: Option<Seat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
}

impl GameSession {
    /// Project the session as seen by `viewer_user_id`.
    pub fn project_for(&self, viewer_user_id: i64) -> SessionView {
        let players = self
            .players
            .iter()
            .map(|p| PlayerPublic {
                user_id: p.user_id,
                display_name: p.display_name.clone(),
                seat: p.seat,
                score: p.score,
                ready: p.ready,
                connected: p.connection.is_present(),
                ai_controlled: p.connection == super::ConnectionState::AiControlled,
                finished: p.finished,
                hand_count: p.hand.len(),
                hand: (p.user_id == viewer_user_id).then(|| p.hand.clone()),
                role: p.role,
            })
            .collect();

        let current_user_id = self
            .current_seat
            .and_then(|seat| self.player_at(seat))
            .map(|p| p.user_id);
        let winner_user_id = self
            .winner
            .and_then(|seat| self.player_at(seat))
            .map(|p| p.user_id);

        SessionView {
            room_id: self.room_id.clone(),
            phase: self.phase,
            mode: self.mode,
            players,
            center_pile: self.center_pile.clone(),
            last_combo: self.last_combo.as_ref().map(|c| ComboView {
                kind: c.kind,
                cards: c.cards.clone(),
            }),
            current_seat: self.current_seat,
            current_user_id,
            is_first_turn: self.is_first_turn,
            your_seat: self.seat_of(viewer_user_id),
            winner_user_id,
            result: self.result.clone(),
        }
    }
}
