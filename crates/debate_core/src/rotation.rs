//! Fixed-point rotation (circle method)
//!
//! Team 0 stays put while everyone else moves one seat round the circle
//! after each round. Seat `i` meets seat `n - 1 - i`, so an even field of `n`
//! teams gets `n - 1` rounds without a repeated opponent. The table list is
//! also rotated each round so nobody sits at the same table every time.

use tracing::debug;

use crate::error::ScheduleResult;
use crate::schedule::check_pairable;
use crate::types::{Pairing, RoundTable, TeamName};

/// Pair `teams` for `rounds` rounds using the circle method.
///
/// `teams` is only read; the rotation works on an owned copy.
pub fn pair(teams: &[TeamName], rounds: usize) -> ScheduleResult<RoundTable> {
    check_pairable(teams, rounds)?;

    let nteams = teams.len();
    let n2 = nteams / 2;
    let mut seats = teams.to_vec();
    let mut table = RoundTable::with_capacity(rounds);

    for round in 0..rounds {
        let mut pairings: Vec<Pairing> = (0..n2)
            .map(|i| {
                let pairing = Pairing::new(seats[i].clone(), seats[nteams - 1 - i].clone());
                if round % 2 == 0 {
                    pairing
                } else {
                    pairing.flipped()
                }
            })
            .collect();

        // Venue shift
        pairings.rotate_left(round % n2);

        debug!(round = round + 1, tables = n2, "rotation round paired");
        table.push_round(pairings)?;

        advance(&mut seats);
    }

    Ok(table)
}

/// Move every seat but the first one place round the circle: the last team
/// takes seat 1 and seats 1..n-1 shift up by one.
pub fn advance(seats: &mut [TeamName]) {
    if seats.len() > 2 {
        seats[1..].rotate_right(1);
    }
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod rotation_tests;
