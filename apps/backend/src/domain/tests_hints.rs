use super::cards_parsing::try_parse_cards;
use super::cards_types::{Card, Rank, DIAMOND_FOUR};
use super::combos::{classify, compare, ComboKind};
use super::hints::generate_hints;

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

#[test]
fn free_lead_enumerates_weakest_first() {
    let hand = cards(&["KD", "5C", "5D", "9H"]);
    let hints = generate_hints(&hand, None, false);

    assert!(!hints.is_empty());
    // Singles for every card plus the pair of fives.
    assert_eq!(hints.len(), 5);
    assert_eq!(hints[0].cards, cards(&["5D"]));
    for pair in hints.windows(2) {
        assert_ne!(compare(&pair[0].info, &pair[1].info), std::cmp::Ordering::Greater);
    }
}

#[test]
fn answers_are_restricted_to_the_pile_kind() {
    let pile = classify(&cards(&["9H", "9C"])).unwrap();
    let hand = cards(&["KD", "KC", "5C", "5D", "3S"]);
    let hints = generate_hints(&hand, Some(&pile), false);

    assert!(hints.iter().all(|h| h.info.kind == ComboKind::Pair));
    assert!(hints.iter().all(|h| h.info.primary_rank == Rank::King));
}

#[test]
fn no_hint_when_nothing_beats_the_pile() {
    let pile = classify(&cards(&["3S"])).unwrap();
    let hand = cards(&["4D", "5C", "9H"]);
    assert!(generate_hints(&hand, Some(&pile), false).is_empty());
}

#[test]
fn first_turn_hints_all_carry_the_four_of_diamonds() {
    let hand = cards(&["4D", "4C", "5D", "9H"]);
    let hints = generate_hints(&hand, None, true);
    assert!(!hints.is_empty());
    assert!(hints.iter().all(|h| h.cards.contains(&DIAMOND_FOUR)));
}

#[test]
fn triples_use_the_lowest_suits_of_the_rank() {
    let hand = cards(&["9D", "9C", "9H", "9S"]);
    // Four of a kind is rejected, so only up to the triple appears; the
    // triple picks the three lowest suits.
    let hints = generate_hints(&hand, None, false);
    let triple = hints
        .iter()
        .find(|h| h.info.kind == ComboKind::Triple)
        .expect("triple hint");
    assert_eq!(triple.cards, cards(&["9D", "9C", "9H"]));
}
