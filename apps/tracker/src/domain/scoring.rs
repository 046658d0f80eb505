//! Round scoring: pure mapping from (bids, wins, prior bags) to deltas.
//!
//! Canonical rule set:
//! - a round is legal only when total tricks won equals total tricks bid;
//! - nil bid made (0/0) scores nothing;
//! - exact bid scores `10 * bid + won`;
//! - overtricks score `10 * bid + extra` and add `extra` bags;
//! - a missed bid costs `10 * bid`;
//! - with bags enabled, every time bags reach the threshold the player loses
//!   `10 * threshold` points and the threshold is subtracted from their bags.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{bag_penalty, valid_bid_range};
use crate::domain::state::PlayerIndex;
use crate::errors::domain::{ConfigKind, DomainError, ValidationKind};

/// Result of scoring one round, not yet applied to any state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    /// Net change to each player's score, penalties included.
    pub deltas: Vec<i32>,
    /// Each player's bag count after the round.
    pub new_bags: Vec<u8>,
    /// Number of bag penalties each player took this round.
    pub penalties: Vec<u8>,
}

impl RoundScore {
    /// Players who took at least one bag penalty this round.
    pub fn penalized(&self) -> BTreeSet<PlayerIndex> {
        self.penalties
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, _)| i as PlayerIndex)
            .collect()
    }
}

/// Points for one seat before bag penalties, and the overtricks it earns.
pub fn trick_points(bid: u8, won: u8) -> (i32, u8) {
    let bid_pts = 10 * i32::from(bid);
    if bid == 0 && won == 0 {
        (0, 0)
    } else if won == bid {
        (bid_pts + i32::from(won), 0)
    } else if won > bid {
        let extra = won - bid;
        (bid_pts + i32::from(extra), extra)
    } else {
        (-bid_pts, 0)
    }
}

/// Add overtricks to a bag count and take one penalty per threshold crossed.
///
/// Returns `(bags_after, penalties)`; `bags_after < threshold` always holds.
pub fn accumulate_bags(prior: u8, overtricks: u8, threshold: u8) -> (u8, u8) {
    debug_assert!(threshold > 0);
    let threshold = u16::from(threshold.max(1));
    let mut bags = u16::from(prior) + u16::from(overtricks);
    let mut penalties = 0u8;
    while bags >= threshold {
        bags -= threshold;
        penalties += 1;
    }
    // bags < threshold <= u8::MAX
    (bags as u8, penalties)
}

/// Score a round for every seat.
///
/// Fails without side effects when inputs are malformed or the trick totals
/// do not reconcile.
pub fn score_round(
    bids: &[u8],
    wins: &[u8],
    prior_bags: &[u8],
    bags_enabled: bool,
    bag_threshold: u8,
) -> Result<RoundScore, DomainError> {
    validate_round(bids, wins, prior_bags)?;
    if bags_enabled && bag_threshold == 0 {
        return Err(DomainError::config(
            ConfigKind::BagThreshold,
            "bag threshold must be at least 1",
        ));
    }

    let mut outcome = RoundScore {
        deltas: Vec::with_capacity(bids.len()),
        new_bags: Vec::with_capacity(bids.len()),
        penalties: Vec::with_capacity(bids.len()),
    };

    for ((&bid, &won), &prior) in bids.iter().zip(wins).zip(prior_bags) {
        let (points, overtricks) = trick_points(bid, won);
        let (bags, penalties) = if bags_enabled {
            accumulate_bags(prior, overtricks, bag_threshold)
        } else {
            (prior, 0)
        };
        outcome
            .deltas
            .push(points - i32::from(penalties) * bag_penalty(bag_threshold));
        outcome.new_bags.push(bags);
        outcome.penalties.push(penalties);
    }

    Ok(outcome)
}

/// Check lengths, ranges and the trick-total rule.
pub fn validate_round(bids: &[u8], wins: &[u8], prior_bags: &[u8]) -> Result<(), DomainError> {
    if bids.len() != prior_bags.len() || wins.len() != prior_bags.len() {
        return Err(DomainError::validation(
            ValidationKind::PlayerCountMismatch,
            format!(
                "expected {} bids and wins, got {} bids and {} wins",
                prior_bags.len(),
                bids.len(),
                wins.len()
            ),
        ));
    }

    let range = valid_bid_range();
    for (i, (&bid, &won)) in bids.iter().zip(wins).enumerate() {
        if !range.contains(&bid) || !range.contains(&won) {
            return Err(DomainError::validation(
                ValidationKind::BidOutOfRange,
                format!(
                    "player {} has bid {bid} / won {won}; both must be within {}..={}",
                    i + 1,
                    range.start(),
                    range.end()
                ),
            ));
        }
    }

    let total_bids: u32 = bids.iter().map(|&b| u32::from(b)).sum();
    let total_wins: u32 = wins.iter().map(|&w| u32::from(w)).sum();
    if total_wins != total_bids {
        return Err(DomainError::validation(
            ValidationKind::InvalidRound,
            format!("total wins ({total_wins}) must equal total bids ({total_bids})"),
        ));
    }
    Ok(())
}
