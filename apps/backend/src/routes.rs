use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::state::app_state::AppState;
use crate::ws;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/rooms/{room_id}", web::get().to(room_info))
        .route("/ws", web::get().to(ws::session::upgrade));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Pre-join existence check so a client can validate a code before opening a
/// websocket.
async fn room_info(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let room = app_state.rooms().get(&room_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Room, format!("room {room_id} does not exist"))
    })?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "room_id": room.id,
        "viewers": room.viewer_count(),
    })))
}
