//! Domain layer: pure card-rules logic, free of transport and session state.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combos;
pub mod dealing;
pub mod hints;
pub mod legality;
pub mod roles;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod tests_combos;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_hints;
#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, DIAMOND_FOUR, SPADE_ACE, SPADE_THREE};
pub use combos::{classify, compare, ComboInfo, ComboKind};
pub use dealing::{deal, deal_seeded, Deal, HAND_SIZE};
pub use hints::{generate_hints, Hint};
pub use legality::check_legal_play;
pub use roles::{GameMode, Role};
pub use scoring::{resolve_finish_order, score_deltas, GameOutcome};
pub use state::{next_seat, Seat, SEATS};
