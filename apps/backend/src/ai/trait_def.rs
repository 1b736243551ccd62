//! Decision seam for AI-controlled seats.

use crate::domain::{Card, ComboInfo};

/// What the stand-in wants to do with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiAction {
    Play(Vec<Card>),
    Pass,
}

/// A turn-taking policy. Implementations are pure over the visible table
/// state: same inputs, same decision.
pub trait AiPolicy: Send + Sync {
    fn decide(&self, hand: &[Card], pile: Option<&ComboInfo>, is_first_turn: bool) -> AiAction;
}
