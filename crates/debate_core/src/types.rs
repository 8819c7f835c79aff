use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};

/// Placeholder opponent added when the team count is odd.
pub const BYE: &str = "- bye -";

/// Name of a team as entered by the organiser.
///
/// Names are not deduplicated: two entries with the same text are two
/// different entrants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn bye() -> Self {
        Self(BYE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_bye(&self) -> bool {
        self.0 == BYE
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TeamName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TeamName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Affirmative,
    Negative,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Affirmative => Side::Negative,
            Side::Negative => Side::Affirmative,
        }
    }

    /// Short label used in exported tables ("A" / "N").
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Affirmative => "A",
            Side::Negative => "N",
        }
    }
}

/// One table in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub affirmative: TeamName,
    pub negative: TeamName,
}

impl Pairing {
    pub fn new(affirmative: TeamName, negative: TeamName) -> Self {
        Self {
            affirmative,
            negative,
        }
    }

    /// Same two teams with sides swapped.
    pub fn flipped(self) -> Self {
        Self {
            affirmative: self.negative,
            negative: self.affirmative,
        }
    }

    pub fn team(&self, side: Side) -> &TeamName {
        match side {
            Side::Affirmative => &self.affirmative,
            Side::Negative => &self.negative,
        }
    }

    /// Side played by `team` at this table, if it plays here.
    pub fn side_of(&self, team: &TeamName) -> Option<Side> {
        if &self.affirmative == team {
            Some(Side::Affirmative)
        } else if &self.negative == team {
            Some(Side::Negative)
        } else {
            None
        }
    }

    /// Opponent of `team` at this table.
    pub fn opponent_of(&self, team: &TeamName) -> Option<&TeamName> {
        self.side_of(team).map(|side| self.team(side.other()))
    }
}

/// Pairings for every round, indexed `[round][table]`.
///
/// Every round holds the same number of tables (half the team count); this
/// is checked on every push and when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundTableData")]
pub struct RoundTable {
    rounds: Vec<Vec<Pairing>>,
}

#[derive(Deserialize)]
struct RoundTableData {
    rounds: Vec<Vec<Pairing>>,
}

impl TryFrom<RoundTableData> for RoundTable {
    type Error = ScheduleError;

    fn try_from(data: RoundTableData) -> Result<Self, Self::Error> {
        let mut table = RoundTable::with_capacity(data.rounds.len());
        for pairings in data.rounds {
            table.push_round(pairings)?;
        }
        Ok(table)
    }
}

impl RoundTable {
    pub fn with_capacity(rounds: usize) -> Self {
        Self {
            rounds: Vec::with_capacity(rounds),
        }
    }

    pub fn push_round(&mut self, pairings: Vec<Pairing>) -> ScheduleResult<()> {
        let expected = self.rounds.first().map_or(pairings.len(), Vec::len);
        if pairings.len() != expected {
            return Err(ScheduleError::InvalidInput(format!(
                "round {} has {} tables, expected {}",
                self.rounds.len() + 1,
                pairings.len(),
                expected
            )));
        }
        self.rounds.push(pairings);
        Ok(())
    }

    /// Number of rounds
    pub fn rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Number of tables per round
    pub fn tables(&self) -> usize {
        self.rounds.first().map_or(0, Vec::len)
    }

    pub fn round(&self, round: usize) -> Option<&[Pairing]> {
        self.rounds.get(round).map(Vec::as_slice)
    }

    pub fn pairing(&self, round: usize, table: usize) -> Option<&Pairing> {
        self.rounds.get(round).and_then(|r| r.get(table))
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Pairing]> {
        self.rounds.iter().map(Vec::as_slice)
    }

    /// Opponents met by `team`, in round order.
    pub fn opponents_of<'a>(&'a self, team: &'a TeamName) -> impl Iterator<Item = &'a TeamName> {
        self.rounds
            .iter()
            .filter_map(move |round| round.iter().find_map(|p| p.opponent_of(team)))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
