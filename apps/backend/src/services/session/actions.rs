//! In-game player intents: playing cards, passing, hint cycling, and AI
//! handover toggling.
//!
//! Every method validates fully before mutating, so a rejected intent leaves
//! the session untouched.

use tracing::debug;

use super::{ConnectionState, GameResult, GameSession, HintCycle, Phase};
use crate::domain::{check_legal_play, generate_hints, Card, Hint, Seat};
use crate::errors::domain::{DomainError, FaultKind, NotFoundKind, ValidationKind};

impl GameSession {
    /// A human plays `cards`. Rejected when the seat is under AI control;
    /// the player must revoke the handover first.
    pub fn play(&mut self, user_id: i64, cards: &[Card]) -> Result<Option<GameResult>, DomainError> {
        let seat = self.human_turn_seat(user_id)?;
        self.play_from_seat(seat, cards)
    }

    /// The AI stand-in plays for a handed-over seat.
    pub fn ai_play(&mut self, seat: Seat, cards: &[Card]) -> Result<Option<GameResult>, DomainError> {
        self.ai_turn_check(seat)?;
        self.play_from_seat(seat, cards)
    }

    /// A human passes on the current pile.
    pub fn pass(&mut self, user_id: i64) -> Result<(), DomainError> {
        let seat = self.human_turn_seat(user_id)?;
        self.pass_from_seat(seat)
    }

    pub fn ai_pass(&mut self, seat: Seat) -> Result<(), DomainError> {
        self.ai_turn_check(seat)?;
        self.pass_from_seat(seat)
    }

    /// Suggest a play for the acting seat, returning the hint and the cycle
    /// index to echo on the next request. Hints cycle through the legal
    /// simple combinations, weakest first, wrapping around; a client that
    /// omits the index gets the server-tracked next entry. The cycle resets
    /// whenever the table state changes.
    pub fn request_hint(
        &mut self,
        user_id: i64,
        cycle_index: Option<u32>,
    ) -> Result<(Hint, u32), DomainError> {
        let seat = self.human_turn_seat(user_id)?;

        if let Some(cycle) = self.hint_cycle.as_mut() {
            if cycle.seat == seat && !cycle.hints.is_empty() {
                let len = cycle.hints.len() as u32;
                let index = match cycle_index {
                    Some(requested) => requested % len,
                    None => (cycle.cursor as u32 + 1) % len,
                };
                cycle.cursor = index as usize;
                return Ok((cycle.hints[cycle.cursor].clone(), index + 1));
            }
        }

        let player = self
            .player_at(seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "seat vacant"))?;
        let hints = generate_hints(&player.hand, self.last_combo.as_ref(), self.is_first_turn);
        if hints.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NoHintAvailable,
                "no playable single, pair or triple; consider passing",
            ));
        }
        let index = match cycle_index {
            Some(requested) => requested % hints.len() as u32,
            None => 0,
        };
        let hint = hints[index as usize].clone();
        self.hint_cycle = Some(HintCycle {
            seat,
            hints,
            cursor: index as usize,
        });
        Ok((hint, index + 1))
    }

    /// Hand this seat over to the AI (`enable`) or take it back. Returns the
    /// resulting AI-control flag; repeating the current setting is a no-op.
    pub fn toggle_ai(&mut self, user_id: i64, enable: bool) -> Result<bool, DomainError> {
        if self.phase != Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "AI handover only applies to a running game",
            ));
        }
        let seat = self
            .seat_of(user_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "not seated here"))?;
        let player = self
            .player_at_mut(seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "seat vacant"))?;
        let changed = match player.connection {
            ConnectionState::HumanDisconnected => {
                return Err(DomainError::validation(
                    ValidationKind::SeatDisconnected,
                    "seat is not connected",
                ));
            }
            ConnectionState::HumanConnected if enable => {
                player.connection = ConnectionState::AiControlled;
                true
            }
            ConnectionState::AiControlled if !enable => {
                player.connection = ConnectionState::HumanConnected;
                true
            }
            _ => false,
        };
        if changed {
            debug!(room_id = %self.room_id, seat, enable, "AI handover changed");
            self.bump_serial();
        }
        Ok(enable)
    }

    fn play_from_seat(
        &mut self,
        seat: Seat,
        cards: &[Card],
    ) -> Result<Option<GameResult>, DomainError> {
        let hand = &self
            .player_at(seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "seat vacant"))?
            .hand;
        let info = check_legal_play(cards, hand, self.last_combo.as_ref(), self.is_first_turn)?;

        if let Some(player) = self.player_at_mut(seat) {
            for card in &info.cards {
                if let Some(pos) = player.hand.iter().position(|c| c == card) {
                    player.hand.remove(pos);
                }
            }
        }
        self.center_pile = info.cards.clone();
        debug!(
            room_id = %self.room_id,
            seat,
            kind = ?info.kind,
            cards = info.cards.len(),
            "play accepted"
        );
        self.last_combo = Some(info);
        self.is_first_turn = false;
        self.consecutive_passes = 0;
        self.last_player_to_play = Some(seat);
        self.bump_serial();

        let emptied = self
            .player_at(seat)
            .map(|p| p.hand.is_empty())
            .unwrap_or(false);
        if emptied {
            if let Some(result) = self.on_player_finished(seat) {
                return Ok(Some(result));
            }
        }
        self.advance_turn()?;
        Ok(None)
    }

    fn pass_from_seat(&mut self, seat: Seat) -> Result<(), DomainError> {
        if self.last_combo.is_none() {
            return Err(DomainError::validation(
                ValidationKind::CannotPassNow,
                "nothing to pass on; you lead this trick-round",
            ));
        }
        if self.last_player_to_play == Some(seat) {
            return Err(DomainError::validation(
                ValidationKind::CannotPassNow,
                "the pile is yours; play any combination",
            ));
        }

        self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        debug!(
            room_id = %self.room_id,
            seat,
            passes = self.consecutive_passes,
            "pass accepted"
        );

        // Everyone else declined: the trick-round closes and the pile owner
        // leads fresh. A finished or absent owner forfeits the lead to the
        // next seat after them.
        let needed = self.active_seat_count().saturating_sub(1).max(1);
        if self.consecutive_passes as usize >= needed {
            let anchor = self.last_player_to_play.ok_or_else(|| {
                DomainError::fault(FaultKind::NoEligibleSeat, "pile present without an owner")
            })?;
            self.center_pile.clear();
            self.last_combo = None;
            self.consecutive_passes = 0;
            self.last_player_to_play = None;
            let lead = if self.is_eligible(anchor) {
                anchor
            } else {
                self.next_eligible_after(anchor)?
            };
            self.current_seat = Some(lead);
            self.bump_serial();
            debug!(room_id = %self.room_id, lead, "trick-round closed");
        } else {
            self.advance_turn()?;
        }
        Ok(())
    }

    /// Resolve a human intent to its seat, enforcing turn order and the
    /// AI-handover lockout.
    fn human_turn_seat(&self, user_id: i64) -> Result<Seat, DomainError> {
        if self.phase != Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no game in progress",
            ));
        }
        let seat = self
            .seat_of(user_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "not seated here"))?;
        let player = self
            .player_at(seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "seat vacant"))?;
        if player.connection == ConnectionState::AiControlled {
            return Err(DomainError::validation(
                ValidationKind::SeatAiControlled,
                "your seat is under AI control; toggle it off to act",
            ));
        }
        if player.finished {
            return Err(DomainError::validation(
                ValidationKind::SeatFinished,
                "your hand is already empty",
            ));
        }
        if self.current_seat != Some(seat) {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "not your turn",
            ));
        }
        Ok(seat)
    }

    fn ai_turn_check(&self, seat: Seat) -> Result<(), DomainError> {
        if self.phase != Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no game in progress",
            ));
        }
        if self.current_seat != Some(seat) {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "stale AI action",
            ));
        }
        let player = self
            .player_at(seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "seat vacant"))?;
        if player.connection != ConnectionState::AiControlled {
            return Err(DomainError::validation(
                ValidationKind::Other("seat not AI-controlled".into()),
                "seat is back under human control",
            ));
        }
        Ok(())
    }
}
