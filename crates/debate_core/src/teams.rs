//! Team list preparation
//!
//! Turns the organiser's raw lines into an even-sized list of entrants and
//! shuffles it before pairing. The shuffle is the only random step; both
//! rotation strategies are deterministic for a given order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::TeamName;

/// Ordered, even-sized list of entrants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamList {
    teams: Vec<TeamName>,
    has_bye: bool,
}

impl TeamList {
    /// Build a list from raw multi-line text.
    pub fn from_text(text: &str) -> Self {
        prepare_teams(text.lines())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// True when a bye was appended to even out the count.
    pub fn has_bye(&self) -> bool {
        self.has_bye
    }

    /// Number of entrants the organiser actually typed in.
    pub fn entrants(&self) -> usize {
        self.teams.len() - usize::from(self.has_bye)
    }

    pub fn as_slice(&self) -> &[TeamName] {
        &self.teams
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamName> {
        self.teams.iter()
    }

    /// Owned copy of the list in a uniformly random order.
    ///
    /// The list itself is left untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TeamName> {
        let mut order = self.teams.clone();
        order.shuffle(rng);
        order
    }
}

/// Prepare the entrant list from raw input lines.
///
/// Each line is trimmed and blank lines are dropped; order is preserved.
/// An odd count gets a [`BYE`](crate::types::BYE) entry appended so the
/// pairing arithmetic always works on an even number of teams.
pub fn prepare_teams<I, S>(lines: I) -> TeamList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut teams: Vec<TeamName> = lines
        .into_iter()
        .filter_map(|line| {
            let name = line.as_ref().trim();
            (!name.is_empty()).then(|| TeamName::new(name))
        })
        .collect();

    let has_bye = teams.len() % 2 == 1;
    if has_bye {
        teams.push(TeamName::bye());
    }

    debug!(teams = teams.len(), has_bye, "prepared team list");

    TeamList { teams, has_bye }
}

#[cfg(test)]
#[path = "teams_tests.rs"]
mod teams_tests;
