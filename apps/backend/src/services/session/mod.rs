//! Per-room game session: roster, turn state machine, and scoring.
//!
//! A `GameSession` is a single logically-owned state machine. The room layer
//! serializes every mutating intent (player messages, connection transitions,
//! timed AI actions) through one lock, so methods here are plain `&mut self`
//! and never block on I/O.

mod actions;
mod connection;
mod lifecycle;
pub mod view;


use crate::domain::{Card, ComboInfo, GameMode, GameOutcome, Hint, Role, Seat, SEATS};

/// Connection lifecycle of one seat, independent of game phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConnectionState {
    HumanConnected,
    HumanDisconnected,
    AiControlled,
}

impl ConnectionState {
    /// Present for quorum and turn eligibility. An AI-controlled seat counts
    /// as present regardless of the underlying transport.
    pub fn is_present(self) -> bool {
        !matches!(self, ConnectionState::HumanDisconnected)
    }
}

/// One seat's occupant. Seat and identity are fixed for the session's
/// lifetime; everything else mutates as play proceeds.
#[derive(Debug, Clone)]
pub struct PlayerSlot {
    pub user_id: i64,
    pub display_name: String,
    pub seat: Seat,
    pub hand: Vec<Card>,
    /// Cumulative across games in the same room.
    pub score: i32,
    pub connection: ConnectionState,
    pub ready: bool,
    pub finished: bool,
    pub role: Option<Role>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Dealt,
    Playing,
    Finished,
}

/// Terminal result of one game.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GameResult {
    pub outcome: GameOutcome,
    /// Score change per seat, already applied to the players' totals.
    pub deltas: [i32; SEATS],
    /// Identities in finish order, first to last.
    pub finish_order: Vec<i64>,
    /// Present when the game was force-terminated.
    pub end_reason: Option<String>,
}

/// Cached hint list for the seat currently cycling through hints.
/// Invalidated by any accepted mutation so a stale cache never suggests
/// cards against a changed pile.
#[derive(Debug, Clone)]
pub(crate) struct HintCycle {
    pub seat: Seat,
    pub hints: Vec<Hint>,
    pub cursor: usize,
}

#[derive(Debug)]
pub struct GameSession {
    pub room_id: String,
    players: Vec<PlayerSlot>,
    center_pile: Vec<Card>,
    last_combo: Option<ComboInfo>,
    current_seat: Option<Seat>,
    is_first_turn: bool,
    consecutive_passes: u8,
    last_player_to_play: Option<Seat>,
    mode: Option<GameMode>,
    finish_order: Vec<Seat>,
    /// First seat to empty its hand (nominal winner).
    winner: Option<Seat>,
    phase: Phase,
    result: Option<GameResult>,
    hint_cycle: Option<HintCycle>,
    /// Bumped on every accepted mutation; scheduled AI actions re-validate
    /// against it so a stale timer never acts on a moved-on session.
    turn_serial: u64,
}

impl GameSession {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            players: Vec::new(),
            center_pile: Vec::new(),
            last_combo: None,
            current_seat: None,
            is_first_turn: false,
            consecutive_passes: 0,
            last_player_to_play: None,
            mode: None,
            finish_order: Vec::new(),
            winner: None,
            phase: Phase::Idle,
            result: None,
            hint_cycle: None,
            turn_serial: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn players(&self) -> &[PlayerSlot] {
        &self.players
    }

    pub fn turn_serial(&self) -> u64 {
        self.turn_serial
    }

    pub fn current_seat(&self) -> Option<Seat> {
        self.current_seat
    }

    pub fn last_combo(&self) -> Option<&ComboInfo> {
        self.last_combo.as_ref()
    }

    pub fn is_first_turn(&self) -> bool {
        self.is_first_turn
    }

    pub fn player_at(&self, seat: Seat) -> Option<&PlayerSlot> {
        self.players.iter().find(|p| p.seat == seat)
    }

    pub(crate) fn player_at_mut(&mut self, seat: Seat) -> Option<&mut PlayerSlot> {
        self.players.iter_mut().find(|p| p.seat == seat)
    }

    pub fn seat_of(&self, user_id: i64) -> Option<Seat> {
        self.players
            .iter()
            .find(|p| p.user_id == user_id)
            .map(|p| p.seat)
    }

    /// True while the game is running and this seat is AI-controlled and
    /// expected to act. The room layer polls this to schedule AI turns.
    pub fn ai_seat_to_act(&self) -> Option<Seat> {
        if self.phase != Phase::Playing {
            return None;
        }
        let seat = self.current_seat?;
        let player = self.player_at(seat)?;
        (player.connection == ConnectionState::AiControlled && !player.finished).then_some(seat)
    }

    /// Seats that still take turns: present and not finished.
    pub(crate) fn active_seat_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.connection.is_present() && !p.finished)
            .count()
    }

    pub(crate) fn is_eligible(&self, seat: Seat) -> bool {
        self.player_at(seat)
            .map(|p| p.connection.is_present() && !p.finished)
            .unwrap_or(false)
    }

    pub(crate) fn bump_serial(&mut self) {
        self.turn_serial += 1;
        self.hint_cycle = None;
    }
}
