//! Transport-driven connection transitions.
//!
//! The websocket layer reports drops and reconnects; mid-game drops promote
//! the seat to AI control so the table never stalls on an absent human.

use tracing::info;

use super::{ConnectionState, GameSession, Phase};
use crate::domain::Seat;

impl GameSession {
    /// The transport for this player dropped. Mid-game the seat is handed to
    /// the AI immediately; outside a game it just goes dark (and loses its
    /// ready vote so the room cannot auto-start around an absent player).
    pub fn mark_disconnected(&mut self, user_id: i64) -> Option<Seat> {
        let playing = self.phase == Phase::Playing;
        let player = self.players.iter_mut().find(|p| p.user_id == user_id)?;
        let seat = player.seat;
        player.connection = if playing {
            ConnectionState::AiControlled
        } else {
            player.ready = false;
            ConnectionState::HumanDisconnected
        };
        info!(
            room_id = %self.room_id,
            seat,
            ai = playing,
            "player disconnected"
        );
        self.bump_serial();
        Some(seat)
    }

    /// The player re-attached. Any AI handover (automatic or explicit) is
    /// revoked; control is theirs again from the next turn.
    pub fn mark_reconnected(&mut self, user_id: i64) -> Option<Seat> {
        let player = self.players.iter_mut().find(|p| p.user_id == user_id)?;
        let seat = player.seat;
        player.connection = ConnectionState::HumanConnected;
        info!(room_id = %self.room_id, seat, "player reconnected");
        self.bump_serial();
        Some(seat)
    }
}
