use super::roles::{GameMode, Role};
use super::scoring::{resolve_finish_order, score_deltas, GameOutcome};

use GameMode::{DoubleLandlord as Double, Standard};
use Role::{DoubleLandlord as DD, Farmer as F, Landlord as D};

#[test]
fn standard_outcomes_resolve_at_the_earliest_decisive_prefix() {
    assert_eq!(
        resolve_finish_order(Standard, &[D, D]),
        Some(GameOutcome::LandlordsBigWin)
    );
    assert_eq!(
        resolve_finish_order(Standard, &[F, F]),
        Some(GameOutcome::FarmersBigWin)
    );
    assert_eq!(
        resolve_finish_order(Standard, &[D, F, D]),
        Some(GameOutcome::LandlordsWin)
    );
    assert_eq!(
        resolve_finish_order(Standard, &[F, D, F]),
        Some(GameOutcome::FarmersWin)
    );
    assert_eq!(
        resolve_finish_order(Standard, &[D, F, F, D]),
        Some(GameOutcome::Tie)
    );
    assert_eq!(
        resolve_finish_order(Standard, &[F, D, D, F]),
        Some(GameOutcome::Tie)
    );
}

#[test]
fn standard_prefixes_that_decide_nothing_return_none() {
    assert_eq!(resolve_finish_order(Standard, &[]), None);
    assert_eq!(resolve_finish_order(Standard, &[D]), None);
    assert_eq!(resolve_finish_order(Standard, &[F]), None);
    assert_eq!(resolve_finish_order(Standard, &[D, F]), None);
    assert_eq!(resolve_finish_order(Standard, &[F, D]), None);
    assert_eq!(resolve_finish_order(Standard, &[D, F, F]), None);
    assert_eq!(resolve_finish_order(Standard, &[F, D, D]), None);
}

#[test]
fn double_landlord_outcomes() {
    assert_eq!(
        resolve_finish_order(Double, &[DD]),
        Some(GameOutcome::DoubleLandlordBigWin)
    );
    assert_eq!(
        resolve_finish_order(Double, &[F, DD]),
        Some(GameOutcome::DoubleLandlordWin)
    );
    assert_eq!(
        resolve_finish_order(Double, &[F, F, DD]),
        Some(GameOutcome::FarmersWinOverDouble)
    );
    assert_eq!(
        resolve_finish_order(Double, &[F, F, F]),
        Some(GameOutcome::FarmersBigWinOverDouble)
    );

    assert_eq!(resolve_finish_order(Double, &[F]), None);
    assert_eq!(resolve_finish_order(Double, &[F, F]), None);
}

#[test]
fn every_complete_standard_order_resolves() {
    // 2 landlords and 2 farmers in any arrangement.
    let roles = [D, D, F, F];
    let mut orders = Vec::new();
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let idx = [a, b, c, d];
                    let mut seen = [false; 4];
                    if idx.iter().all(|&i| !std::mem::replace(&mut seen[i], true)) {
                        orders.push([roles[a], roles[b], roles[c], roles[d]]);
                    }
                }
            }
        }
    }
    for order in orders {
        assert!(
            resolve_finish_order(Standard, &order).is_some(),
            "unresolved order {order:?}"
        );
    }
}

#[test]
fn standard_deltas_are_zero_sum() {
    let roles = [D, F, D, F];
    for outcome in [
        GameOutcome::LandlordsBigWin,
        GameOutcome::LandlordsWin,
        GameOutcome::Tie,
        GameOutcome::FarmersWin,
        GameOutcome::FarmersBigWin,
    ] {
        let deltas = score_deltas(outcome, &roles);
        assert_eq!(deltas.iter().sum::<i32>(), 0, "{outcome:?}");
    }
}

#[test]
fn double_landlord_deltas_are_zero_sum() {
    let roles = [F, DD, F, F];
    for outcome in [
        GameOutcome::DoubleLandlordBigWin,
        GameOutcome::DoubleLandlordWin,
        GameOutcome::FarmersWinOverDouble,
        GameOutcome::FarmersBigWinOverDouble,
    ] {
        let deltas = score_deltas(outcome, &roles);
        assert_eq!(deltas.iter().sum::<i32>(), 0, "{outcome:?}");
    }
}

#[test]
fn deltas_land_on_the_right_seats() {
    let deltas = score_deltas(GameOutcome::LandlordsBigWin, &[D, F, D, F]);
    assert_eq!(deltas, [2, -2, 2, -2]);

    let deltas = score_deltas(GameOutcome::FarmersWinOverDouble, &[F, DD, F, F]);
    assert_eq!(deltas, [1, -3, 1, 1]);
}
