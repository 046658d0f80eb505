// Proptest generators for scoring inputs.
// Rounds are generated legal by construction: wins are a redistribution of
// the bid total, so sum(wins) == sum(bids) always holds.

use proptest::prelude::*;

use crate::domain::rules::{BAG_THRESHOLD, MAX_PLAYERS, MAX_TRICKS, MIN_PLAYERS};

/// A single bid or win in 0..=13.
pub fn tricks() -> impl Strategy<Value = u8> {
    0..=MAX_TRICKS
}

/// A bag count already below the penalty threshold.
pub fn bags() -> impl Strategy<Value = u8> {
    0..BAG_THRESHOLD
}

pub fn player_count() -> impl Strategy<Value = usize> {
    usize::from(MIN_PLAYERS)..=usize::from(MAX_PLAYERS)
}

/// Spread `total` tricks over `seats` players, capping each at 13.
fn spread(total: u32, weights: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; weights.len()];
    let mut left = total;
    // Round-robin over seats in weight order so the result is deterministic
    // for a given weight vector.
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(weights[i]));
    while left > 0 {
        let mut placed = false;
        for &i in &order {
            if left == 0 {
                break;
            }
            if out[i] < MAX_TRICKS {
                out[i] += 1;
                left -= 1;
                placed = true;
            }
        }
        if !placed {
            break;
        }
    }
    out
}

/// A legal round: (bids, wins, prior_bags) with matching lengths and totals.
pub fn legal_round() -> impl Strategy<Value = (Vec<u8>, Vec<u8>, Vec<u8>)> {
    player_count().prop_flat_map(|n| {
        (
            prop::collection::vec(tricks(), n),
            prop::collection::vec(any::<u8>(), n),
            prop::collection::vec(bags(), n),
        )
            .prop_map(|(bids, weights, prior)| {
                let total: u32 = bids.iter().map(|&b| u32::from(b)).sum();
                let wins = spread(total, &weights);
                (bids, wins, prior)
            })
    })
}

/// A round whose wins total is off from the bids total by a non-zero amount.
pub fn illegal_round() -> impl Strategy<Value = (Vec<u8>, Vec<u8>, Vec<u8>)> {
    legal_round().prop_map(|(bids, mut wins, prior)| {
        // Bump or drop one seat so totals no longer reconcile.
        if let Some(slot) = wins.iter_mut().find(|w| **w < MAX_TRICKS) {
            *slot += 1;
        } else if let Some(slot) = wins.iter_mut().find(|w| **w > 0) {
            *slot -= 1;
        }
        (bids, wins, prior)
    })
}
