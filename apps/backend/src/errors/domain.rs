//! Domain-level error type used across the rules module and the session
//! coordinator.
//!
//! This type is transport-agnostic. The websocket layer converts it to
//! `crate::error::AppError` through the provided `From` impl.
//!
//! Two families matter here:
//! - `Validation`: the caller did something illegal; no state was mutated.
//! - `Fault`: an invariant the engine relies on was violated. The session is
//!   force-terminated with a best-effort resolution instead of crashing.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Closed set of validation failures a player intent can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    ParseCard,
    UnrecognizedCombo,
    FourOfAKindForbidden,
    CardsNotInHand,
    FirstTurnNeedsDiamondFour,
    ComboMismatch,
    TooWeak,
    OutOfTurn,
    PhaseMismatch,
    SeatDisconnected,
    SeatFinished,
    SeatAiControlled,
    CannotPassNow,
    RoomFull,
    NotEnoughPlayers,
    NoHintAvailable,
    Other(String),
}

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    Room,
    Seat,
}

/// Structural/defensive failures. These must not occur in correct play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    MarkerCardMissing,
    LeadCardMissing,
    NoEligibleSeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    Validation(ValidationKind, String),
    NotFound(NotFoundKind, String),
    Fault(FaultKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Fault(kind, d) => write!(f, "fault {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn fault(kind: FaultKind, detail: impl Into<String>) -> Self {
        Self::Fault(kind, detail.into())
    }

    /// The player-facing reason string. Faults are deliberately opaque.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::NotFound(_, d) => d,
            DomainError::Fault(_, _) => "internal game error",
        }
    }
}
