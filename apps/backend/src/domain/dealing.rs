//! Deck construction, shuffling, dealing, and role assignment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, ALL_RANKS, ALL_SUITS, DIAMOND_FOUR, SPADE_ACE, SPADE_THREE};
use super::roles::{GameMode, Role};
use super::state::{Seat, SEATS};
use crate::errors::domain::{DomainError, FaultKind};

pub const HAND_SIZE: usize = 13;

/// Generate the full 52-card deck in canonical order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in ALL_SUITS {
        for rank in ALL_RANKS {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle. Production callers pass an OS-seeded CSPRNG: role
/// assignment and scores ride on this shuffle, so it must be unpredictable.
pub fn shuffle_deck<R: Rng>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// One finished deal: sorted hands plus the role/lead facts derived from
/// where the marker cards landed.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: [Vec<Card>; SEATS],
    pub mode: GameMode,
    pub roles: [Role; SEATS],
    pub starting_seat: Seat,
}

/// Shuffle with a CSPRNG seeded from the operating system.
pub fn deal() -> Result<Deal, DomainError> {
    deal_with_rng(&mut StdRng::from_os_rng())
}

/// Deterministic variant for tests. ChaCha keeps the stream stable across
/// `StdRng` algorithm changes.
pub fn deal_seeded(seed: u64) -> Result<Deal, DomainError> {
    deal_with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
}

pub fn deal_with_rng<R: Rng>(rng: &mut R) -> Result<Deal, DomainError> {
    let mut deck = full_deck();
    shuffle_deck(&mut deck, rng);

    // One card at a time, round-robin in seat order.
    let mut hands: [Vec<Card>; SEATS] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % SEATS].push(card);
    }
    for hand in &mut hands {
        hand.sort();
    }

    let (mode, roles) = assign_roles(&hands)?;

    let starting_seat = holder_of(&hands, DIAMOND_FOUR).ok_or_else(|| {
        DomainError::fault(
            FaultKind::LeadCardMissing,
            "four of diamonds absent after dealing",
        )
    })? as Seat;

    Ok(Deal {
        hands,
        mode,
        roles,
        starting_seat,
    })
}

/// Locate the marker-card holders and derive mode and per-seat roles.
///
/// A correct 52-card deal always holds both markers; the error paths exist so
/// a corrupted deal degrades instead of panicking.
fn assign_roles(hands: &[Vec<Card>; SEATS]) -> Result<(GameMode, [Role; SEATS]), DomainError> {
    let s3 = holder_of(hands, SPADE_THREE).ok_or_else(|| {
        DomainError::fault(
            FaultKind::MarkerCardMissing,
            "three of spades absent after dealing",
        )
    })?;
    let sa = holder_of(hands, SPADE_ACE).ok_or_else(|| {
        DomainError::fault(
            FaultKind::MarkerCardMissing,
            "ace of spades absent after dealing",
        )
    })?;

    let mut roles = [Role::Farmer; SEATS];
    if s3 == sa {
        roles[s3] = Role::DoubleLandlord;
        Ok((GameMode::DoubleLandlord, roles))
    } else {
        roles[s3] = Role::Landlord;
        roles[sa] = Role::Landlord;
        Ok((GameMode::Standard, roles))
    }
}

fn holder_of(hands: &[Vec<Card>; SEATS], card: Card) -> Option<usize> {
    hands.iter().position(|hand| hand.contains(&card))
}
