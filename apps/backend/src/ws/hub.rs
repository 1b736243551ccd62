//! Room registry and per-room fanout.
//!
//! A `Room` owns one `GameSession` behind a mutex plus the set of attached
//! websocket connections. Views are projected per viewer under the lock and
//! delivered after it is released, so a slow socket never stalls the game.

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::ai::{AiAction, AiPolicy, GreedyLowest};
use crate::domain::Seat;
use crate::errors::domain::DomainError;
use crate::services::session::view::SessionView;
use crate::services::session::GameSession;
use crate::utils::join_code::generate_room_code;

/// One per-viewer state frame, pushed to a session actor.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct RoomPush {
    pub view: SessionView,
}

struct Viewer {
    user_id: i64,
    recipient: Recipient<RoomPush>,
}

pub struct Room {
    pub id: String,
    session: Mutex<GameSession>,
    viewers: DashMap<Uuid, Viewer>,
    ai_delay: Duration,
    policy: Box<dyn AiPolicy>,
}

impl Room {
    fn new(id: String, ai_delay: Duration) -> Self {
        Self {
            session: Mutex::new(GameSession::new(id.clone())),
            id,
            viewers: DashMap::new(),
            ai_delay,
            policy: Box::new(GreedyLowest),
        }
    }

    /// Run a closure against the session under the room lock. Callers must
    /// not block inside the closure.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let mut session = self.session.lock();
        f(&mut session)
    }

    pub fn register_viewer(&self, conn_id: Uuid, user_id: i64, recipient: Recipient<RoomPush>) {
        self.viewers.insert(conn_id, Viewer { user_id, recipient });
    }

    pub fn unregister_viewer(&self, conn_id: Uuid) {
        self.viewers.remove(&conn_id);
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    /// Push every attached connection its own projection of the current
    /// state.
    pub fn broadcast(&self) {
        let frames: Vec<(Recipient<RoomPush>, SessionView)> = {
            let session = self.session.lock();
            self.viewers
                .iter()
                .map(|entry| {
                    let viewer = entry.value();
                    (viewer.recipient.clone(), session.project_for(viewer.user_id))
                })
                .collect()
        };
        for (recipient, view) in frames {
            let _ = recipient.do_send(RoomPush { view });
        }
    }

    /// If the acting seat is AI-controlled, schedule its turn after the
    /// configured delay. The scheduled task re-validates against the turn
    /// serial at fire time, so a human action (or reconnect) in the interim
    /// silently cancels it.
    pub fn schedule_ai_if_needed(self: &Arc<Self>) {
        let (seat, serial) = {
            let session = self.session.lock();
            match session.ai_seat_to_act() {
                Some(seat) => (seat, session.turn_serial()),
                None => return,
            }
        };
        let room = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(room.ai_delay).await;
            room.run_ai_turn(seat, serial);
        });
    }

    fn run_ai_turn(self: &Arc<Self>, seat: Seat, serial: u64) {
        {
            let mut session = self.session.lock();
            if session.turn_serial() != serial || session.ai_seat_to_act() != Some(seat) {
                return;
            }

            let hand = match session.player_at(seat) {
                Some(player) => player.hand.clone(),
                None => return,
            };
            let action = self
                .policy
                .decide(&hand, session.last_combo(), session.is_first_turn());

            let outcome = match action {
                AiAction::Play(cards) => session.ai_play(seat, &cards).map(|_| ()),
                AiAction::Pass => session.ai_pass(seat),
            };
            match outcome {
                Ok(()) => {}
                Err(DomainError::Validation(kind, detail)) => {
                    // The policy proposed something the table rejects (e.g.
                    // passing on a free lead after a race). Try the other
                    // option once, then give up on the game.
                    warn!(
                        room_id = %self.id,
                        seat,
                        ?kind,
                        detail,
                        "AI action rejected, falling back to pass"
                    );
                    if let Err(err) = session.ai_pass(seat) {
                        error!(room_id = %self.id, seat, error = %err, "AI stand-in is stuck");
                        session.end_game("AI stand-in could not take a legal turn");
                    }
                }
                Err(err) => {
                    error!(room_id = %self.id, seat, error = %err, "turn rotation failed");
                    session.end_game("turn rotation failed");
                }
            }
        }
        self.broadcast();
        self.schedule_ai_if_needed();
    }
}

/// All live rooms, keyed by join code.
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Room>>,
    ai_delay: Duration,
}

impl RoomRegistry {
    pub fn new(ai_delay: Duration) -> Self {
        Self {
            rooms: DashMap::new(),
            ai_delay,
        }
    }

    pub fn create_room(&self) -> Arc<Room> {
        loop {
            let id = generate_room_code();
            match self.rooms.entry(id.clone()) {
                Entry::Vacant(slot) => {
                    let room = Arc::new(Room::new(id.clone(), self.ai_delay));
                    slot.insert(Arc::clone(&room));
                    info!(room_id = %id, "room created");
                    return room;
                }
                // Code collision: roll again.
                Entry::Occupied(_) => continue,
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<Room>> {
        self.rooms.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop a room nobody is attached to any more. A running game is
    /// force-terminated first so scores stay consistent if anyone rejoins a
    /// later room.
    pub fn reap_if_empty(&self, room: &Arc<Room>) {
        if room.viewer_count() > 0 {
            return;
        }
        room.with_session(|session| {
            let _ = session.end_game("all players disconnected");
        });
        self.rooms.remove(&room.id);
        info!(room_id = %room.id, "room reaped");
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
