use std::collections::HashSet;

use super::cards_types::{DIAMOND_FOUR, SPADE_ACE, SPADE_THREE};
use super::dealing::{deal_seeded, full_deck, HAND_SIZE};
use super::roles::{GameMode, Role};
use super::state::SEATS;

#[test]
fn every_seat_gets_thirteen_distinct_cards() {
    let deal = deal_seeded(7).unwrap();

    let mut seen = HashSet::new();
    for hand in &deal.hands {
        assert_eq!(hand.len(), HAND_SIZE);
        for card in hand {
            assert!(seen.insert(*card), "card dealt twice: {card:?}");
        }
    }
    assert_eq!(seen.len(), full_deck().len());
}

#[test]
fn hands_are_sorted_ascending() {
    let deal = deal_seeded(7).unwrap();
    for hand in &deal.hands {
        assert!(hand.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn roles_follow_the_marker_cards() {
    for seed in 0..32 {
        let deal = deal_seeded(seed).unwrap();
        let s3 = deal
            .hands
            .iter()
            .position(|h| h.contains(&SPADE_THREE))
            .unwrap();
        let sa = deal
            .hands
            .iter()
            .position(|h| h.contains(&SPADE_ACE))
            .unwrap();

        if s3 == sa {
            assert_eq!(deal.mode, GameMode::DoubleLandlord);
            assert_eq!(deal.roles[s3], Role::DoubleLandlord);
            assert_eq!(
                deal.roles.iter().filter(|r| **r == Role::Farmer).count(),
                SEATS - 1
            );
        } else {
            assert_eq!(deal.mode, GameMode::Standard);
            assert_eq!(deal.roles[s3], Role::Landlord);
            assert_eq!(deal.roles[sa], Role::Landlord);
            assert_eq!(
                deal.roles.iter().filter(|r| **r == Role::Farmer).count(),
                SEATS - 2
            );
        }
    }
}

#[test]
fn starting_seat_holds_the_four_of_diamonds() {
    for seed in 0..32 {
        let deal = deal_seeded(seed).unwrap();
        assert!(deal.hands[deal.starting_seat as usize].contains(&DIAMOND_FOUR));
    }
}

#[test]
fn same_seed_same_deal() {
    let a = deal_seeded(42).unwrap();
    let b = deal_seeded(42).unwrap();
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.roles, b.roles);
    assert_eq!(a.starting_seat, b.starting_seat);
}
