use super::cards_parsing::try_parse_cards;
use super::cards_types::Card;
use super::combos::classify;
use super::legality::check_legal_play;
use crate::errors::domain::{DomainError, ValidationKind};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

fn kind_of(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn first_turn_must_include_the_four_of_diamonds() {
    let hand = cards(&["4D", "4C", "5D", "9H"]);

    let err = check_legal_play(&cards(&["5D"]), &hand, None, true).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::FirstTurnNeedsDiamondFour);

    assert!(check_legal_play(&cards(&["4D"]), &hand, None, true).is_ok());
    // Any combination carrying the 4♦ opens, not just the bare single.
    assert!(check_legal_play(&cards(&["4D", "4C"]), &hand, None, true).is_ok());
}

#[test]
fn cards_must_come_from_the_hand() {
    let hand = cards(&["4D", "5D"]);
    let err = check_legal_play(&cards(&["6D"]), &hand, None, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CardsNotInHand);
}

#[test]
fn the_same_physical_card_cannot_be_selected_twice() {
    let hand = cards(&["9D", "9C", "5D"]);
    let err = check_legal_play(&cards(&["9D", "9D"]), &hand, None, false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CardsNotInHand);
}

#[test]
fn free_lead_accepts_any_combination() {
    let hand = cards(&["9D", "9C", "9H", "5D", "6D", "7D", "8D", "4D"]);
    assert!(check_legal_play(&cards(&["5D"]), &hand, None, false).is_ok());
    assert!(check_legal_play(&cards(&["9D", "9C", "9H"]), &hand, None, false).is_ok());
    assert!(
        check_legal_play(&cards(&["4D", "5D", "6D", "7D", "8D"]), &hand, None, false).is_ok()
    );
}

#[test]
fn answer_must_match_kind_and_size() {
    let pile = classify(&cards(&["8D"])).unwrap();
    let hand = cards(&["9D", "9C"]);
    let err = check_legal_play(&cards(&["9D", "9C"]), &hand, Some(&pile), false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::ComboMismatch);
}

#[test]
fn answer_must_strictly_beat_the_pile() {
    let pile = classify(&cards(&["9H"])).unwrap();
    let hand = cards(&["9C", "9S", "8D"]);

    let err = check_legal_play(&cards(&["8D"]), &hand, Some(&pile), false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::TooWeak);
    // Same rank, weaker suit.
    let err = check_legal_play(&cards(&["9C"]), &hand, Some(&pile), false).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::TooWeak);
    // Same rank, stronger suit.
    assert!(check_legal_play(&cards(&["9S"]), &hand, Some(&pile), false).is_ok());
}

#[test]
fn five_card_answers_stay_within_their_kind() {
    let pile = classify(&cards(&["5D", "6C", "7H", "8S", "9D"])).unwrap();
    let hand = cards(&["2C", "AC", "KC", "QC", "TC", "6D", "7C", "8H", "9S", "TD"]);

    // A flush is not an answer to a straight, however strong.
    let err = check_legal_play(
        &cards(&["2C", "AC", "KC", "QC", "TC"]),
        &hand,
        Some(&pile),
        false,
    )
    .unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::ComboMismatch);

    // A higher straight is.
    assert!(check_legal_play(
        &cards(&["6D", "7C", "8H", "9S", "TD"]),
        &hand,
        Some(&pile),
        false,
    )
    .is_ok());
}
