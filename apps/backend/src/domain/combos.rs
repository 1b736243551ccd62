//! Combination classification and comparison.
//!
//! A played set of 1, 2, 3 or 5 cards classifies into one of seven kinds.
//! Four-of-a-kind, bare or with a kicker, is not a combination in this
//! ruleset: there is no bomb mechanic, so it is rejected outright.

use std::collections::BTreeMap;

use serde::Serialize;

use super::cards_types::{Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Combination kinds, declared weakest to strongest. The derived `Ord` is the
/// cross-kind ladder used when sorting mixed hint lists; legality checks never
/// allow a kind change mid trick-round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    StraightFlush,
}

/// Classified combination. Derived from a candidate card set, never stored
/// beyond the trick-round it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboInfo {
    pub kind: ComboKind,
    /// Cards sorted highest-first. For a full house the triple comes before
    /// the pair so the representative card is always `cards[0]`.
    pub cards: Vec<Card>,
    /// Rank that keys same-kind comparison (top of straight, rank of the
    /// triple for a full house, the set's own rank otherwise).
    pub primary_rank: Rank,
}

impl ComboInfo {
    /// Card used for suit tiebreaks within singles, pairs, and triples.
    pub fn representative(&self) -> Card {
        self.cards[0]
    }
}

fn reject(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::UnrecognizedCombo, detail)
}

/// Classify a candidate card set or explain why it is not playable.
pub fn classify(cards: &[Card]) -> Result<ComboInfo, DomainError> {
    if cards.is_empty() {
        return Err(reject("empty card selection"));
    }

    // Highest card first; every kind below relies on this order.
    let mut sorted: Vec<Card> = cards.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    let mut rank_counts: BTreeMap<Rank, u8> = BTreeMap::new();
    for c in &sorted {
        *rank_counts.entry(c.rank).or_insert(0) += 1;
    }
    let max_count = rank_counts.values().copied().max().unwrap_or(0);

    if max_count == 4 {
        return Err(DomainError::validation(
            ValidationKind::FourOfAKindForbidden,
            "four of a kind is not playable in this ruleset",
        ));
    }

    match sorted.len() {
        1 => Ok(ComboInfo {
            kind: ComboKind::Single,
            primary_rank: sorted[0].rank,
            cards: sorted,
        }),
        2 => {
            if rank_counts.len() != 1 {
                return Err(reject("two cards must form a pair"));
            }
            Ok(ComboInfo {
                kind: ComboKind::Pair,
                primary_rank: sorted[0].rank,
                cards: sorted,
            })
        }
        3 => {
            if rank_counts.len() != 1 {
                return Err(reject("three cards must form a triple"));
            }
            Ok(ComboInfo {
                kind: ComboKind::Triple,
                primary_rank: sorted[0].rank,
                cards: sorted,
            })
        }
        5 => classify_five(sorted, &rank_counts),
        n => Err(reject(format!("{n} cards never form a valid combination"))),
    }
}

fn classify_five(
    sorted: Vec<Card>,
    rank_counts: &BTreeMap<Rank, u8>,
) -> Result<ComboInfo, DomainError> {
    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);

    // Five distinct ranks whose values form a contiguous run. The custom
    // ladder tops out at Three, so no wraparound exists by construction.
    let is_straight = rank_counts.len() == 5
        && sorted[0].rank.value() - sorted[4].rank.value() == 4;

    if is_straight && is_flush {
        return Ok(ComboInfo {
            kind: ComboKind::StraightFlush,
            primary_rank: sorted[0].rank,
            cards: sorted,
        });
    }

    if rank_counts.len() == 2 {
        // Counts are {3,2} here: {4,1} was rejected before dispatch.
        let triple_rank = rank_counts
            .iter()
            .find(|(_, &n)| n == 3)
            .map(|(&r, _)| r)
            .ok_or_else(|| reject("five cards of two ranks must be a full house"))?;
        let mut cards = sorted;
        // Triple first, then the pair, highest-first within each group.
        cards.sort_by(|a, b| {
            let a_triple = a.rank == triple_rank;
            let b_triple = b.rank == triple_rank;
            b_triple.cmp(&a_triple).then_with(|| b.cmp(a))
        });
        return Ok(ComboInfo {
            kind: ComboKind::FullHouse,
            primary_rank: triple_rank,
            cards,
        });
    }

    if is_flush {
        return Ok(ComboInfo {
            kind: ComboKind::Flush,
            primary_rank: sorted[0].rank,
            cards: sorted,
        });
    }

    if is_straight {
        return Ok(ComboInfo {
            kind: ComboKind::Straight,
            primary_rank: sorted[0].rank,
            cards: sorted,
        });
    }

    Err(reject("five cards form neither straight, flush nor full house"))
}

/// Compare two combinations of the same kind. Callers enforce kind and size
/// equality before a beat check; mixed kinds fall back to the kind ladder
/// (hint ordering only).
pub fn compare(a: &ComboInfo, b: &ComboInfo) -> std::cmp::Ordering {
    if a.kind != b.kind {
        return a.kind.cmp(&b.kind);
    }
    match a.kind {
        ComboKind::StraightFlush => a
            .primary_rank
            .cmp(&b.primary_rank)
            .then_with(|| a.cards[0].suit.cmp(&b.cards[0].suit)),
        ComboKind::FullHouse | ComboKind::Straight => a.primary_rank.cmp(&b.primary_rank),
        // Position-by-position over the descending sequences, not a sum.
        ComboKind::Flush => a.cards.cmp(&b.cards),
        ComboKind::Triple | ComboKind::Pair | ComboKind::Single => {
            a.representative().cmp(&b.representative())
        }
    }
}
