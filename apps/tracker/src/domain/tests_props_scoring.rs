//! Property-based tests for round scoring.

use std::cmp::Ordering;

use proptest::prelude::*;

use crate::domain::rules::{bag_penalty, BAG_THRESHOLD};
use crate::domain::scoring::{score_round, trick_points};
use crate::domain::{test_gens, test_prelude};

/// Reference formula, written independently of `trick_points`.
fn expected_points(bid: u8, won: u8) -> i32 {
    let (bid, won) = (i32::from(bid), i32::from(won));
    match won.cmp(&bid) {
        Ordering::Equal => 10 * bid + won,
        Ordering::Greater => 10 * bid + (won - bid),
        Ordering::Less => -10 * bid,
    }
}

#[test]
fn trick_points_match_formula_on_full_grid() {
    for bid in 0..=13u8 {
        for won in 0..=13u8 {
            let (points, extra) = trick_points(bid, won);
            assert_eq!(points, expected_points(bid, won), "bid={bid} won={won}");
            assert_eq!(extra, won.saturating_sub(bid), "bid={bid} won={won}");
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: bags stay below the threshold and every penalty is accounted for.
    #[test]
    fn prop_bags_stay_below_threshold(
        (bids, wins, prior) in test_gens::legal_round(),
    ) {
        let out = score_round(&bids, &wins, &prior, true, BAG_THRESHOLD).unwrap();
        for i in 0..bids.len() {
            prop_assert!(out.new_bags[i] < BAG_THRESHOLD);

            let (points, extra) = trick_points(bids[i], wins[i]);
            let penalties = i32::from(out.penalties[i]);
            prop_assert_eq!(out.deltas[i], points - penalties * bag_penalty(BAG_THRESHOLD));

            // Bags conserved: prior + overtricks == remaining + threshold * penalties
            let before = u32::from(prior[i]) + u32::from(extra);
            let after = u32::from(out.new_bags[i])
                + u32::from(BAG_THRESHOLD) * u32::from(out.penalties[i]);
            prop_assert_eq!(before, after);
        }
    }

    /// Property: scoring is independent per player (permuting seats permutes results).
    #[test]
    fn prop_scoring_is_order_independent(
        (bids, wins, prior) in test_gens::legal_round(),
    ) {
        let out = score_round(&bids, &wins, &prior, true, BAG_THRESHOLD).unwrap();

        let rev = |v: &[u8]| v.iter().rev().copied().collect::<Vec<u8>>();
        let out_rev = score_round(&rev(&bids), &rev(&wins), &rev(&prior), true, BAG_THRESHOLD).unwrap();

        let mut deltas_rev = out_rev.deltas.clone();
        deltas_rev.reverse();
        prop_assert_eq!(out.deltas, deltas_rev);
    }

    /// Property: rounds whose totals do not reconcile are always rejected.
    #[test]
    fn prop_illegal_rounds_rejected(
        (bids, wins, prior) in test_gens::illegal_round(),
    ) {
        prop_assert!(score_round(&bids, &wins, &prior, true, BAG_THRESHOLD).is_err());
        prop_assert!(score_round(&bids, &wins, &prior, false, BAG_THRESHOLD).is_err());
    }

    /// Property: with bags disabled, deltas are exactly the trick points.
    #[test]
    fn prop_bags_disabled_no_penalty(
        (bids, wins, prior) in test_gens::legal_round(),
    ) {
        let out = score_round(&bids, &wins, &prior, false, BAG_THRESHOLD).unwrap();
        for i in 0..bids.len() {
            prop_assert_eq!(out.deltas[i], trick_points(bids[i], wins[i]).0);
            prop_assert_eq!(out.new_bags[i], prior[i]);
        }
    }
}
