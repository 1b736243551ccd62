//! Session lifecycle: roster management, game start, finish detection, and
//! forced termination.

use tracing::{info, warn};

use super::{ConnectionState, GameResult, GameSession, Phase, PlayerSlot};
use crate::domain::{
    dealing, next_seat, resolve_finish_order, score_deltas, GameOutcome, Seat, SEATS,
};
use crate::errors::domain::{DomainError, FaultKind, ValidationKind};

impl GameSession {
    /// Add a player to the roster, or reconnect an existing one. Seats are
    /// handed out in join order and are stable for the session's lifetime.
    pub fn add_player(&mut self, user_id: i64, display_name: &str) -> Result<Seat, DomainError> {
        if let Some(player) = self.players.iter_mut().find(|p| p.user_id == user_id) {
            // Rejoining: refresh the name, mark connected.
            player.display_name = display_name.to_string();
            player.connection = ConnectionState::HumanConnected;
            return Ok(player.seat);
        }
        if self.players.len() >= SEATS {
            return Err(DomainError::validation(
                ValidationKind::RoomFull,
                "room already has four players",
            ));
        }
        let occupied: Vec<Seat> = self.players.iter().map(|p| p.seat).collect();
        let seat = (0..SEATS as Seat)
            .find(|s| !occupied.contains(s))
            .unwrap_or(self.players.len() as Seat);
        self.players.push(PlayerSlot {
            user_id,
            display_name: display_name.to_string(),
            seat,
            hand: Vec::new(),
            score: 0,
            connection: ConnectionState::HumanConnected,
            ready: false,
            finished: false,
            role: None,
        });
        self.players.sort_by_key(|p| p.seat);
        info!(room_id = %self.room_id, user_id, seat, "player joined session");
        Ok(seat)
    }

    /// Remove a player entirely (leaving the room, not a transport drop).
    /// Only meaningful outside a running game.
    pub fn remove_player(&mut self, user_id: i64) -> Option<Seat> {
        let seat = self.seat_of(user_id)?;
        self.players.retain(|p| p.user_id != user_id);
        info!(room_id = %self.room_id, user_id, seat, "player left session");
        Some(seat)
    }

    pub fn set_ready(&mut self, user_id: i64, ready: bool) -> Result<(), DomainError> {
        if self.phase == Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "game already in progress",
            ));
        }
        let seat = self.seat_of(user_id).ok_or_else(|| {
            DomainError::not_found(crate::errors::domain::NotFoundKind::Seat, "not seated here")
        })?;
        if let Some(player) = self.player_at_mut(seat) {
            player.ready = ready;
        }
        Ok(())
    }

    pub fn all_ready(&self) -> bool {
        self.players.len() == SEATS && self.players.iter().all(|p| p.ready && !matches!(p.connection, ConnectionState::HumanDisconnected))
    }

    /// Deal a fresh game. Requires a full roster; carries scores over from
    /// the previous game in this room.
    pub fn start_game(&mut self) -> Result<(), DomainError> {
        if self.phase == Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "game already in progress",
            ));
        }
        if self.players.len() != SEATS {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("need four players to start, have {}", self.players.len()),
            ));
        }

        self.reset_transient_state();
        let deal = dealing::deal()?;
        self.apply_deal(deal);
        info!(
            room_id = %self.room_id,
            mode = ?self.mode,
            starting_seat = self.current_seat,
            "game started"
        );
        Ok(())
    }

    /// Deterministic start for tests.
    #[cfg(test)]
    pub fn start_game_seeded(&mut self, seed: u64) -> Result<(), DomainError> {
        if self.players.len() != SEATS {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                "need four players to start",
            ));
        }
        self.reset_transient_state();
        let deal = dealing::deal_seeded(seed)?;
        self.apply_deal(deal);
        Ok(())
    }

    fn reset_transient_state(&mut self) {
        self.center_pile.clear();
        self.last_combo = None;
        self.current_seat = None;
        self.consecutive_passes = 0;
        self.last_player_to_play = None;
        self.mode = None;
        self.finish_order.clear();
        self.winner = None;
        self.result = None;
        self.hint_cycle = None;
        for player in &mut self.players {
            player.hand.clear();
            player.finished = false;
            player.role = None;
        }
    }

    fn apply_deal(&mut self, deal: dealing::Deal) {
        self.phase = Phase::Dealt;
        let dealing::Deal {
            hands,
            mode,
            roles,
            starting_seat,
        } = deal;
        for (seat, hand) in hands.into_iter().enumerate() {
            if let Some(player) = self.player_at_mut(seat as Seat) {
                player.hand = hand;
                player.role = Some(roles[seat]);
            }
        }
        self.mode = Some(mode);
        self.current_seat = Some(starting_seat);
        self.is_first_turn = true;
        self.phase = Phase::Playing;
        self.bump_serial();
    }

    /// Advance to the next seat that can act, counter-clockwise, skipping
    /// finished and human-disconnected seats. A full fruitless cycle is an
    /// invariant violation; the caller force-terminates on it.
    pub(crate) fn advance_turn(&mut self) -> Result<(), DomainError> {
        let Some(current) = self.current_seat else {
            return Err(DomainError::fault(
                FaultKind::NoEligibleSeat,
                "turn advance with no current seat",
            ));
        };
        let candidate = self.next_eligible_after(current)?;
        self.current_seat = Some(candidate);
        self.bump_serial();
        Ok(())
    }

    /// First seat after `seat` (counter-clockwise, exclusive) that can act.
    pub(crate) fn next_eligible_after(&self, seat: Seat) -> Result<Seat, DomainError> {
        let mut candidate = seat;
        for _ in 0..SEATS {
            candidate = next_seat(candidate);
            if self.is_eligible(candidate) {
                return Ok(candidate);
            }
        }
        Err(DomainError::fault(
            FaultKind::NoEligibleSeat,
            "no eligible seat found in a full cycle",
        ))
    }

    /// Record a finished seat and resolve the game if the finish order
    /// already determines an outcome.
    pub(crate) fn on_player_finished(&mut self, seat: Seat) -> Option<GameResult> {
        self.finish_order.push(seat);
        if self.winner.is_none() {
            self.winner = Some(seat);
        }
        if let Some(player) = self.player_at_mut(seat) {
            player.finished = true;
        }

        if let Some(outcome) = self.check_terminal() {
            return Some(self.apply_outcome(outcome, None));
        }

        // One seat left holding cards: fold it in and resolve the full order.
        let unfinished: Vec<Seat> = self
            .players
            .iter()
            .filter(|p| !p.finished)
            .map(|p| p.seat)
            .collect();
        if unfinished.len() == 1 {
            let last = unfinished[0];
            self.finish_order.push(last);
            if let Some(player) = self.player_at_mut(last) {
                player.finished = true;
            }
            let outcome = self.check_terminal().unwrap_or_else(|| {
                // The full-order table is total over both role multisets.
                warn!(room_id = %self.room_id, "complete finish order matched no outcome");
                GameOutcome::Tie
            });
            return Some(self.apply_outcome(outcome, None));
        }
        None
    }

    fn check_terminal(&self) -> Option<GameOutcome> {
        let mode = self.mode?;
        let roles: Vec<_> = self
            .finish_order
            .iter()
            .filter_map(|seat| self.player_at(*seat).and_then(|p| p.role))
            .collect();
        resolve_finish_order(mode, &roles)
    }

    fn apply_outcome(&mut self, outcome: GameOutcome, end_reason: Option<String>) -> GameResult {
        let mut roles = [crate::domain::Role::Farmer; SEATS];
        for player in &self.players {
            if let Some(role) = player.role {
                roles[player.seat as usize] = role;
            }
        }
        let deltas = score_deltas(outcome, &roles);
        for player in &mut self.players {
            player.score += deltas[player.seat as usize];
            // Next game needs a fresh round of ready votes.
            player.ready = false;
        }
        let finish_order = self
            .finish_order
            .iter()
            .filter_map(|seat| self.player_at(*seat).map(|p| p.user_id))
            .collect();

        let result = GameResult {
            outcome,
            deltas,
            finish_order,
            end_reason,
        };
        self.phase = Phase::Finished;
        self.current_seat = None;
        self.result = Some(result.clone());
        self.bump_serial();
        info!(room_id = %self.room_id, outcome = ?outcome, "game resolved");
        result
    }

    /// Forced external termination (insufficient players, structural error).
    ///
    /// Remaining seats are ranked by ascending hand size, seat index breaking
    /// ties, then the completed order is resolved; an unmatched order scores
    /// a tie.
    pub fn end_game(&mut self, reason: impl Into<String>) -> Option<GameResult> {
        if self.phase == Phase::Finished {
            return self.result.clone();
        }
        if !matches!(self.phase, Phase::Playing | Phase::Dealt) {
            return None;
        }
        let reason = reason.into();
        warn!(room_id = %self.room_id, reason = %reason, "game force-terminated");

        let mut remaining: Vec<(usize, Seat)> = self
            .players
            .iter()
            .filter(|p| !p.finished)
            .map(|p| (p.hand.len(), p.seat))
            .collect();
        remaining.sort();
        for (_, seat) in remaining {
            self.finish_order.push(seat);
            if let Some(player) = self.player_at_mut(seat) {
                player.finished = true;
            }
        }

        let outcome = self.check_terminal().unwrap_or(GameOutcome::Tie);
        Some(self.apply_outcome(outcome, Some(reason)))
    }
}
