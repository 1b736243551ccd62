use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind};

/// Application-level error. The websocket layer maps these onto protocol
/// error frames; the few plain HTTP routes render them as JSON bodies.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    detail: String,
    status: u16,
}

impl AppError {
    fn code(&self) -> String {
        match self {
            AppError::Validation { code, .. } => code.to_string(),
            AppError::NotFound { code, .. } => code.to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        HttpResponse::build(status).json(ErrorBody {
            code: self.code(),
            detail: self.detail(),
            status: status.as_u16(),
        })
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation(_, _) => AppError::Validation {
                code: "GAME_RULE",
                detail: err.reason().to_string(),
            },
            DomainError::NotFound(kind, _) => AppError::NotFound {
                code: match kind {
                    NotFoundKind::Room => "ROOM_NOT_FOUND",
                    NotFoundKind::Seat => "SEAT_NOT_FOUND",
                },
                detail: err.reason().to_string(),
            },
            DomainError::Fault(_, _) => AppError::Internal {
                detail: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_room_maps_to_a_room_specific_404() {
        let err: AppError = DomainError::not_found(NotFoundKind::Room, "room ZZZZZZ").into();
        assert_eq!(err.code(), "ROOM_NOT_FOUND");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn faults_stay_opaque_internal_errors() {
        let err: AppError = DomainError::fault(
            crate::errors::domain::FaultKind::NoEligibleSeat,
            "no eligible seat",
        )
        .into();
        assert_eq!(err.code(), "INTERNAL");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
