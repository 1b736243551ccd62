//! Websocket connection actor.
//!
//! One actor per connection. All game intents resolve synchronously against
//! the room's session lock, so handlers never suspend mid-intent; pushes for
//! other viewers go through `Room::broadcast`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::try_parse_cards;
use crate::errors::domain::DomainError;
use crate::services::session::GameSession;
use crate::services::users::UserIdentity;
use crate::state::app_state::AppState;
use crate::ws::hub::{Room, RoomPush};
use crate::ws::protocol::{ClientMsg, ErrorCode, ServerMsg, PROTOCOL_VERSION};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = WsSession::new(Uuid::new_v4(), app_state);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    app_state: web::Data<AppState>,
    identity: Option<UserIdentity>,
    room: Option<Arc<Room>>,
    last_heartbeat: Instant,
    hello_done: bool,
}

impl WsSession {
    fn new(conn_id: Uuid, app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id,
            app_state,
            identity: None,
            room: None,
            last_heartbeat: Instant::now(),
            hello_done: false,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error(ctx: &mut ws::WebsocketContext<Self>, code: ErrorCode, message: impl Into<String>) {
        Self::send_json(
            ctx,
            &ServerMsg::Error {
                code,
                message: message.into(),
            },
        );
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        Self::send_error(ctx, code, message);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Identity established by a successful hello, required before any room
    /// command.
    fn require_identity(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
    ) -> Option<UserIdentity> {
        if !self.hello_done {
            Self::send_error(ctx, ErrorCode::BadRequest, "Must send hello first");
            return None;
        }
        self.identity.clone()
    }

    fn require_room(&self, ctx: &mut ws::WebsocketContext<Self>) -> Option<Arc<Room>> {
        match &self.room {
            Some(room) => Some(Arc::clone(room)),
            None => {
                Self::send_error(ctx, ErrorCode::BadRequest, "Join a room first");
                None
            }
        }
    }

    /// Run a mutating intent against the room session. Rule rejections come
    /// back as error frames; structural faults force-terminate the game.
    /// Every accepted mutation fans out fresh views and re-arms the AI.
    fn apply_intent(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        room: &Arc<Room>,
        f: impl FnOnce(&mut GameSession) -> Result<(), DomainError>,
    ) {
        let outcome = room.with_session(|session| match f(session) {
            Err(DomainError::Fault(kind, detail)) => {
                error!(room_id = %room.id, ?kind, detail, "game fault, force-terminating");
                session.end_game("internal game fault");
                Ok(())
            }
            other => other,
        });
        match outcome {
            Ok(()) => {
                room.broadcast();
                room.schedule_ai_if_needed();
            }
            Err(err) => {
                let code = match &err {
                    DomainError::NotFound(_, _) => ErrorCode::NotFound,
                    _ => ErrorCode::Rejected,
                };
                Self::send_error(ctx, code, err.reason());
            }
        }
    }

    fn attach_to_room(
        &mut self,
        ctx: &mut ws::WebsocketContext<Self>,
        room: Arc<Room>,
        identity: &UserIdentity,
    ) {
        let joined = room.with_session(|session| {
            let seat = session.add_player(identity.user_id, &identity.display_name)?;
            // Rejoin revokes any AI handover and cancels pending AI timers.
            session.mark_reconnected(identity.user_id);
            Ok::<u8, DomainError>(seat)
        });
        match joined {
            Ok(seat) => {
                room.register_viewer(
                    self.conn_id,
                    identity.user_id,
                    ctx.address().recipient::<RoomPush>(),
                );
                Self::send_json(
                    ctx,
                    &ServerMsg::RoomJoined {
                        room_id: room.id.clone(),
                        seat,
                    },
                );
                self.room = Some(Arc::clone(&room));
                room.broadcast();
            }
            Err(err) => {
                Self::send_error(ctx, ErrorCode::Rejected, err.reason());
            }
        }
    }

    fn detach_from_room(&mut self) {
        let Some(room) = self.room.take() else {
            return;
        };
        room.unregister_viewer(self.conn_id);
        if let Some(identity) = &self.identity {
            room.with_session(|session| {
                session.mark_disconnected(identity.user_id);
            });
        }
        room.broadcast();
        // A dropped human mid-game may leave an AI seat on turn.
        room.schedule_ai_if_needed();
        self.app_state.rooms().reap_if_empty(&room);
    }

    fn handle_command(&mut self, cmd: ClientMsg, ctx: &mut ws::WebsocketContext<Self>) {
        match cmd {
            ClientMsg::Hello {
                protocol,
                user_id,
                display_name,
            } => {
                if protocol != PROTOCOL_VERSION {
                    self.send_error_and_close(
                        ctx,
                        ErrorCode::BadProtocol,
                        "Unsupported protocol version",
                    );
                    return;
                }
                let identity = self.app_state.identities().resolve(user_id, &display_name);
                Self::send_json(
                    ctx,
                    &ServerMsg::HelloAck {
                        protocol: PROTOCOL_VERSION,
                        user_id: identity.user_id,
                        display_name: identity.display_name.clone(),
                    },
                );
                self.identity = Some(identity);
                self.hello_done = true;
            }

            ClientMsg::CreateRoom => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                if self.room.is_some() {
                    Self::send_error(ctx, ErrorCode::BadRequest, "Already in a room");
                    return;
                }
                let room = self.app_state.rooms().create_room();
                Self::send_json(
                    ctx,
                    &ServerMsg::RoomCreated {
                        room_id: room.id.clone(),
                    },
                );
                self.attach_to_room(ctx, room, &identity);
            }

            ClientMsg::JoinRoom { room_id } => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                if self.room.is_some() {
                    Self::send_error(ctx, ErrorCode::BadRequest, "Already in a room");
                    return;
                }
                let Some(room) = self.app_state.rooms().get(&room_id) else {
                    Self::send_error(ctx, ErrorCode::NotFound, "No such room");
                    return;
                };
                self.attach_to_room(ctx, room, &identity);
            }

            ClientMsg::LeaveRoom => {
                if self.hello_done {
                    if let (Some(room), Some(identity)) = (&self.room, &self.identity) {
                        // Outside a game the seat is vacated entirely; a
                        // mid-game leave is just a disconnect, the AI takes
                        // over.
                        room.with_session(|session| {
                            if session.phase() != crate::services::session::Phase::Playing {
                                session.remove_player(identity.user_id);
                            }
                        });
                    }
                    self.detach_from_room();
                    Self::send_json(ctx, &ServerMsg::Ack { message: "left" });
                }
            }

            ClientMsg::Ready { ready } => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                self.apply_intent(ctx, &room, |session| {
                    session.set_ready(identity.user_id, ready)?;
                    if session.all_ready() {
                        session.start_game()?;
                    }
                    Ok(())
                });
            }

            ClientMsg::StartGame => {
                let Some(_identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                self.apply_intent(ctx, &room, |session| {
                    if !session.all_ready() {
                        return Err(DomainError::validation(
                            crate::errors::domain::ValidationKind::NotEnoughPlayers,
                            "everyone must be ready to start",
                        ));
                    }
                    session.start_game()
                });
            }

            ClientMsg::Play { cards } => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                let parsed = match try_parse_cards(&cards) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        Self::send_error(ctx, ErrorCode::BadRequest, err.reason());
                        return;
                    }
                };
                self.apply_intent(ctx, &room, |session| {
                    session.play(identity.user_id, &parsed).map(|_| ())
                });
            }

            ClientMsg::Pass => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                self.apply_intent(ctx, &room, |session| session.pass(identity.user_id));
            }

            ClientMsg::Hint { cycle_index } => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                // Hints mutate only the cycling cursor; nobody else sees them.
                let hint = room
                    .with_session(|session| session.request_hint(identity.user_id, cycle_index));
                match hint {
                    Ok((hint, next_cycle_index)) => Self::send_json(
                        ctx,
                        &ServerMsg::Hint {
                            cards: hint.cards,
                            kind: hint.info.kind,
                            next_cycle_index,
                        },
                    ),
                    Err(err) => Self::send_error(ctx, ErrorCode::Rejected, err.reason()),
                }
            }

            ClientMsg::ToggleAi { enable } => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                match room.with_session(|session| session.toggle_ai(identity.user_id, enable)) {
                    Ok(enabled) => {
                        Self::send_json(ctx, &ServerMsg::AiControl { enabled });
                        room.broadcast();
                        room.schedule_ai_if_needed();
                    }
                    Err(err) => Self::send_error(ctx, ErrorCode::Rejected, err.reason()),
                }
            }

            ClientMsg::Resync => {
                let Some(identity) = self.require_identity(ctx) else {
                    return;
                };
                let Some(room) = self.require_room(ctx) else {
                    return;
                };
                let view = room.with_session(|session| session.project_for(identity.user_id));
                Self::send_json(ctx, &ServerMsg::RoomState { view });
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.detach_from_room();
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let Ok(cmd) = parsed else {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    return;
                };
                self.handle_command(cmd, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(conn_id = %self.conn_id, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<RoomPush> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: RoomPush, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &ServerMsg::RoomState { view: msg.view });
    }
}
