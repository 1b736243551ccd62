//! Wire protocol for the game websocket.
//!
//! Clients send tagged JSON commands; the server answers with acks, hint
//! frames, and full per-viewer room views. Cards travel as compact codes
//! ("4D", "AS") in client commands and as the same codes in views.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, ComboKind};
use crate::services::session::view::SessionView;

pub const PROTOCOL_VERSION: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Hello {
        protocol: i32,
        /// 0 requests a fresh guest identity; a previously issued id
        /// re-attaches to an existing seat.
        #[serde(default)]
        user_id: i64,
        display_name: String,
    },
    CreateRoom,
    JoinRoom {
        room_id: String,
    },
    LeaveRoom,
    Ready {
        ready: bool,
    },
    StartGame,
    Play {
        cards: Vec<String>,
    },
    Pass,
    Hint {
        /// Echo of the last `next_cycle_index` to keep cycling; omit to let
        /// the server pick up where it left off.
        #[serde(default)]
        cycle_index: Option<u32>,
    },
    ToggleAi {
        enable: bool,
    },
    Resync,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    HelloAck {
        protocol: i32,
        user_id: i64,
        display_name: String,
    },

    Ack {
        message: &'static str,
    },

    RoomCreated {
        room_id: String,
    },

    RoomJoined {
        room_id: String,
        seat: u8,
    },

    /// Full per-viewer state. Sent after every accepted mutation and on
    /// resync; clients replace, never merge.
    RoomState {
        view: SessionView,
    },

    Hint {
        cards: Vec<Card>,
        kind: ComboKind,
        next_cycle_index: u32,
    },

    AiControl {
        enabled: bool,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadProtocol,
    BadRequest,
    NotFound,
    Rejected,
    Internal,
}
