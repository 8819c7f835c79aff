//! Half-split rotation
//!
//! The shuffled list is cut into two fixed pools. The first half starts on
//! the affirmative side and the second half on the negative side; each round
//! the two pools slide past each other at different strides, and the sides
//! swap on every odd round.

use tracing::debug;

use crate::error::ScheduleResult;
use crate::schedule::check_pairable;
use crate::types::{Pairing, RoundTable, TeamName};

/// Pair `teams` for `rounds` rounds using the half-split rotation.
///
/// For round `r` and table `i` (with `n2` tables), the affirmative-pool team
/// at `(i + r) % n2` meets the negative-pool team at `(i + 2r) % n2`.
/// Opponents necessarily repeat once `rounds` exceeds `n2`.
pub fn pair(teams: &[TeamName], rounds: usize) -> ScheduleResult<RoundTable> {
    check_pairable(teams, rounds)?;

    let (aff_pool, neg_pool) = pools(teams);
    let n2 = aff_pool.len();
    let mut table = RoundTable::with_capacity(rounds);

    for round in 0..rounds {
        let pairings: Vec<Pairing> = (0..n2)
            .map(|i| {
                let ai = (i + round) % n2;
                let ni = (i + 2 * round) % n2;
                let pairing = Pairing::new(aff_pool[ai].clone(), neg_pool[ni].clone());
                if round % 2 == 0 {
                    pairing
                } else {
                    pairing.flipped()
                }
            })
            .collect();

        debug!(round = round + 1, tables = n2, "half-split round paired");
        table.push_round(pairings)?;
    }

    Ok(table)
}

/// Split the list into the affirmative pool and the negative pool.
pub fn pools(teams: &[TeamName]) -> (&[TeamName], &[TeamName]) {
    teams.split_at(teams.len() / 2)
}

#[cfg(test)]
#[path = "half_split_tests.rs"]
mod half_split_tests;
