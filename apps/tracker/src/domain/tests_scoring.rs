use crate::domain::rules::BAG_THRESHOLD;
use crate::domain::scoring::{accumulate_bags, score_round, trick_points};
use crate::errors::domain::{ConfigKind, DomainError, ValidationKind};

#[test]
fn exact_bid_scores_ten_per_trick_plus_tricks() {
    // 4 players, bids [1,0,0,0], wins [1,0,0,0] → [11,0,0,0]
    let out = score_round(&[1, 0, 0, 0], &[1, 0, 0, 0], &[0; 4], true, BAG_THRESHOLD).unwrap();
    assert_eq!(out.deltas, vec![11, 0, 0, 0]);
    assert_eq!(out.new_bags, vec![0, 0, 0, 0]);
    assert!(out.penalized().is_empty());
}

#[test]
fn overtricks_score_and_bag() {
    assert_eq!(trick_points(3, 5), (32, 2));
    assert_eq!(trick_points(0, 2), (2, 2));
}

#[test]
fn missed_bid_loses_ten_per_trick() {
    assert_eq!(trick_points(4, 2), (-40, 0));
    assert_eq!(trick_points(1, 0), (-10, 0));
}

#[test]
fn nil_bid_made_scores_nothing() {
    assert_eq!(trick_points(0, 0), (0, 0));
}

#[test]
fn crossing_bag_threshold_costs_one_hundred() {
    // bid 3, win 5, prior bags 8 → 32 - 100 = -68, bags 0
    let out = score_round(&[3, 2], &[5, 0], &[8, 0], true, BAG_THRESHOLD).unwrap();
    assert_eq!(out.deltas, vec![-68, -20]);
    assert_eq!(out.new_bags, vec![0, 0]);
    assert_eq!(out.penalties, vec![1, 0]);
    assert_eq!(out.penalized().into_iter().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn double_crossing_applies_penalty_twice() {
    // prior 9 + 13 overtricks = 22 → two penalties, 2 bags left
    assert_eq!(accumulate_bags(9, 13, 10), (2, 2));
    let out = score_round(&[0, 13], &[13, 0], &[9, 0], true, BAG_THRESHOLD).unwrap();
    assert_eq!(out.deltas, vec![13 - 200, -130]);
    assert_eq!(out.new_bags, vec![2, 0]);
    assert_eq!(out.penalties, vec![2, 0]);
}

#[test]
fn five_bag_threshold_costs_fifty() {
    let out = score_round(&[1, 1], &[2, 0], &[4, 0], true, 5).unwrap();
    assert_eq!(out.deltas, vec![11 - 50, -10]);
    assert_eq!(out.new_bags, vec![0, 0]);
}

#[test]
fn bags_disabled_leaves_counter_untouched() {
    let out = score_round(&[3, 2], &[5, 0], &[0, 0], false, BAG_THRESHOLD).unwrap();
    assert_eq!(out.deltas, vec![32, -20]);
    assert_eq!(out.new_bags, vec![0, 0]);
    assert!(out.penalized().is_empty());
}

#[test]
fn totals_must_reconcile() {
    let err = score_round(&[2, 2], &[2, 1], &[0, 0], true, BAG_THRESHOLD).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::InvalidRound, detail) => {
            assert!(detail.contains("total wins (3)"), "{detail}");
            assert!(detail.contains("total bids (4)"), "{detail}");
        }
        other => panic!("expected InvalidRound, got {other:?}"),
    }
}

#[test]
fn length_mismatch_is_rejected() {
    let err = score_round(&[1, 0, 0], &[1, 0], &[0, 0], true, BAG_THRESHOLD).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PlayerCountMismatch, _)
    ));
}

#[test]
fn values_above_thirteen_are_rejected() {
    let err = score_round(&[14, 0], &[14, 0], &[0, 0], true, BAG_THRESHOLD).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BidOutOfRange, _)
    ));
}

#[test]
fn zero_threshold_is_a_config_error() {
    let err = score_round(&[1, 0], &[1, 0], &[0, 0], true, 0).unwrap_err();
    assert!(matches!(err, DomainError::Config(ConfigKind::BagThreshold, _)));
    // Irrelevant when bags are off.
    assert!(score_round(&[1, 0], &[1, 0], &[0, 0], false, 0).is_ok());
}
