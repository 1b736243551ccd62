use std::cmp::Ordering;

use proptest::prelude::*;

use super::cards_parsing::try_parse_cards;
use super::cards_types::{Card, Rank, ALL_RANKS, ALL_SUITS};
use super::combos::{classify, compare, ComboInfo, ComboKind};
use crate::errors::domain::{DomainError, ValidationKind};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

fn info(tokens: &[&str]) -> ComboInfo {
    classify(&cards(tokens)).unwrap()
}

fn validation_kind(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn classifies_singles_pairs_and_triples() {
    assert_eq!(info(&["7H"]).kind, ComboKind::Single);
    assert_eq!(info(&["9D", "9S"]).kind, ComboKind::Pair);
    assert_eq!(info(&["QC", "QD", "QH"]).kind, ComboKind::Triple);
}

#[test]
fn mixed_ranks_are_not_a_pair_or_triple() {
    let err = classify(&cards(&["9D", "TD"])).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::UnrecognizedCombo);

    let err = classify(&cards(&["9D", "9C", "TD"])).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::UnrecognizedCombo);
}

#[test]
fn four_of_a_kind_is_rejected_bare_and_with_kicker() {
    let err = classify(&cards(&["8D", "8C", "8H", "8S"])).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::FourOfAKindForbidden);

    let err = classify(&cards(&["8D", "8C", "8H", "8S", "KD"])).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::FourOfAKindForbidden);
}

#[test]
fn straights_follow_the_game_ladder() {
    let low = info(&["5D", "6C", "7H", "8S", "9D"]);
    assert_eq!(low.kind, ComboKind::Straight);
    assert_eq!(low.primary_rank, Rank::Nine);

    // The ladder runs ... K < A < 2 < 3, so A and 2 sit inside straights.
    let high = info(&["JD", "QC", "KH", "AS", "2D"]);
    assert_eq!(high.kind, ComboKind::Straight);
    assert_eq!(high.primary_rank, Rank::Two);
}

#[test]
fn face_value_runs_that_break_the_ladder_are_rejected() {
    // 2 and 3 are the top of the ladder, nowhere near 4-5-6.
    let err = classify(&cards(&["2D", "3C", "4H", "5S", "6D"])).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::UnrecognizedCombo);
}

#[test]
fn full_house_orders_triple_first() {
    let fh = info(&["4D", "4C", "9H", "9S", "9D"]);
    assert_eq!(fh.kind, ComboKind::FullHouse);
    assert_eq!(fh.primary_rank, Rank::Nine);
    assert!(fh.cards[..3].iter().all(|c| c.rank == Rank::Nine));
}

#[test]
fn straight_flush_outranks_every_other_kind() {
    let sf = info(&["5H", "6H", "7H", "8H", "9H"]);
    assert_eq!(sf.kind, ComboKind::StraightFlush);
    for other in [
        info(&["3S"]),
        info(&["3S", "3H"]),
        info(&["JD", "QC", "KH", "AS", "2D"]),
        info(&["4D", "7D", "9D", "JD", "3D"]),
        info(&["4D", "4C", "9H", "9S", "9D"]),
    ] {
        assert_eq!(compare(&sf, &other), Ordering::Greater);
    }
}

#[test]
fn singles_compare_by_rank_then_suit() {
    assert_eq!(compare(&info(&["3D"]), &info(&["2S"])), Ordering::Greater);
    assert_eq!(compare(&info(&["2S"]), &info(&["2H"])), Ordering::Greater);
    assert_eq!(compare(&info(&["5C"]), &info(&["5C"])), Ordering::Equal);
}

#[test]
fn pairs_and_triples_compare_by_highest_card() {
    // Same rank: the pair holding the better suit wins.
    assert_eq!(
        compare(&info(&["9S", "9D"]), &info(&["9H", "9C"])),
        Ordering::Greater
    );
    assert_eq!(
        compare(&info(&["TC", "TD", "TH"]), &info(&["9S", "9H", "9C"])),
        Ordering::Greater
    );
}

#[test]
fn flushes_compare_lexicographically_not_by_sum() {
    let high_top = info(&["3H", "5H", "6H", "7H", "9H"]);
    let low_top = info(&["2C", "AC", "KC", "QC", "TC"]);
    assert_eq!(compare(&high_top, &low_top), Ordering::Greater);

    // Equal top card: the second-highest decides.
    let a = info(&["3D", "KD", "6D", "5D", "4D"]);
    let b = info(&["3D", "QD", "JD", "TD", "8D"]);
    assert_eq!(compare(&a, &b), Ordering::Greater);
}

#[test]
fn straight_flushes_tiebreak_on_suit() {
    let spades = info(&["5S", "6S", "7S", "8S", "9S"]);
    let hearts = info(&["5H", "6H", "7H", "8H", "9H"]);
    assert_eq!(compare(&spades, &hearts), Ordering::Greater);
}

#[test]
fn combo_info_serializes_with_compact_cards_and_rank_strings() {
    let value = serde_json::to_value(info(&["9C", "9D"])).unwrap();
    assert_eq!(value["kind"], "pair");
    assert_eq!(value["primary_rank"], "9");
    assert_eq!(value["cards"], serde_json::json!(["9C", "9D"]));

    let straight = serde_json::to_value(info(&["JD", "QC", "KH", "AS", "2D"])).unwrap();
    assert_eq!(straight["kind"], "straight");
    assert_eq!(straight["primary_rank"], "2");
}

fn arb_card() -> impl Strategy<Value = Card> {
    (0usize..52).prop_map(|i| Card {
        suit: ALL_SUITS[i / 13],
        rank: ALL_RANKS[i % 13],
    })
}

proptest! {
    #[test]
    fn single_comparison_is_antisymmetric(a in arb_card(), b in arb_card()) {
        let ia = classify(&[a]).unwrap();
        let ib = classify(&[b]).unwrap();
        prop_assert_eq!(compare(&ia, &ib), compare(&ib, &ia).reverse());
    }

    #[test]
    fn classification_never_panics_on_card_multisets(
        picks in proptest::collection::vec(0usize..52, 1..6)
    ) {
        let cards: Vec<Card> = picks
            .into_iter()
            .map(|i| Card { suit: ALL_SUITS[i / 13], rank: ALL_RANKS[i % 13] })
            .collect();
        let _ = classify(&cards);
    }
}
