//! route ranking
//!
//! all alternatives of one session quote the same destination asset; with
//! the probe destination, the cheapest path to traverse is the one with the
//! smallest quoted destination amount, so ranking is ascending by magnitude

use std::cmp::Ordering;

use xrpl_types::PathOption;

/// stable ascending sort by destination amount magnitude
pub fn rank(mut alternatives: Vec<PathOption>) -> Vec<PathOption> {
    alternatives.sort_by(|a, b| a.destination_amount.cmp_value(&b.destination_amount));
    alternatives
}

/// first minimum of the set; ties keep protocol order
pub fn best(alternatives: &[PathOption]) -> Option<&PathOption> {
    alternatives.iter().reduce(|best, candidate| {
        if candidate.destination_amount.cmp_value(&best.destination_amount) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}
