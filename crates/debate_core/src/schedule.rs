//! Schedule entry points and strategy selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

use crate::error::{ScheduleError, ScheduleResult};
use crate::teams::TeamList;
use crate::types::{RoundTable, TeamName};
use crate::{half_split, rotation};

/// Pairing strategy.
///
/// The string forms (`schedule`, `schedule2`) are the names organisers
/// already use for the two layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two fixed pools sliding past each other
    #[default]
    #[serde(rename = "schedule", alias = "half-split")]
    HalfSplit,
    /// Circle method with a fixed pivot team
    #[serde(rename = "schedule2", alias = "rotation")]
    Rotating,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::HalfSplit, Mode::Rotating];

    pub fn name(self) -> &'static str {
        match self {
            Mode::HalfSplit => "schedule",
            Mode::Rotating => "schedule2",
        }
    }

    /// Pair an already shuffled, even-sized list.
    pub fn pair(self, teams: &[TeamName], rounds: usize) -> ScheduleResult<RoundTable> {
        match self {
            Mode::HalfSplit => half_split::pair(teams, rounds),
            Mode::Rotating => rotation::pair(teams, rounds),
        }
    }

    /// Most rounds this strategy can produce before some team meets the
    /// same opponent twice.
    pub fn max_distinct_rounds(self, team_count: usize) -> usize {
        let limit = match self {
            Mode::HalfSplit => team_count / 2,
            Mode::Rotating => team_count.saturating_sub(1),
        };
        limit.max(1)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "schedule" | "half-split" | "halfsplit" => Ok(Mode::HalfSplit),
            "schedule2" | "rotation" | "rotating" => Ok(Mode::Rotating),
            _ => Err(ScheduleError::UnknownMode(s.to_string())),
        }
    }
}

/// What to do when more rounds are requested than the strategy can pair
/// without repeats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundLimit {
    /// Keep the requested count; opponents repeat
    #[default]
    Allow,
    /// Cut the count down to the limit
    Clamp,
    /// Refuse with [`ScheduleError::TooManyRounds`]
    Reject,
}

impl RoundLimit {
    /// Number of rounds to actually pair.
    pub fn apply(self, rounds: usize, team_count: usize, mode: Mode) -> ScheduleResult<usize> {
        let limit = mode.max_distinct_rounds(team_count);
        if rounds <= limit {
            return Ok(rounds);
        }

        match self {
            RoundLimit::Allow => {
                warn!(rounds, limit, %mode, "opponents will repeat");
                Ok(rounds)
            }
            RoundLimit::Clamp => {
                info!(rounds, limit, %mode, "clamping round count");
                Ok(limit)
            }
            RoundLimit::Reject => Err(ScheduleError::TooManyRounds {
                rounds,
                limit,
                mode,
            }),
        }
    }
}

/// Settings for one schedule request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    pub mode: Mode,
    pub round_limit: RoundLimit,
}

impl ScheduleOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// The two fixed pools used by the half-split strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPools {
    pub affirmative: Vec<TeamName>,
    pub negative: Vec<TeamName>,
}

/// A finished schedule, ready for rendering or export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub mode: Mode,
    /// Teams in shuffled order, bye included
    pub teams: Vec<TeamName>,
    /// Only set for [`Mode::HalfSplit`]
    pub pools: Option<TeamPools>,
    /// A bye was added to even out the field
    pub has_bye: bool,
    pub table: RoundTable,
}

impl Schedule {
    pub fn rounds(&self) -> usize {
        self.table.rounds()
    }

    pub fn tables(&self) -> usize {
        self.table.tables()
    }

    pub fn has_bye(&self) -> bool {
        self.has_bye
    }
}

/// Shuffle `teams` with a freshly seeded generator and pair them.
pub fn schedule(teams: &TeamList, rounds: usize, mode: Mode) -> ScheduleResult<Schedule> {
    let mut rng = StdRng::from_entropy();
    schedule_with_rng(teams, rounds, &ScheduleOptions::new(mode), &mut rng)
}

/// Shuffle `teams` with the given generator and pair them.
///
/// Pass a seeded generator for a reproducible schedule.
pub fn schedule_with_rng<R: Rng + ?Sized>(
    teams: &TeamList,
    rounds: usize,
    options: &ScheduleOptions,
    rng: &mut R,
) -> ScheduleResult<Schedule> {
    check_pairable(teams.as_slice(), rounds)?;

    let rounds = options.round_limit.apply(rounds, teams.len(), options.mode)?;
    let order = teams.shuffled(rng);
    let table = options.mode.pair(&order, rounds)?;

    let pools = (options.mode == Mode::HalfSplit).then(|| {
        let (affirmative, negative) = half_split::pools(&order);
        TeamPools {
            affirmative: affirmative.to_vec(),
            negative: negative.to_vec(),
        }
    });

    info!(
        mode = %options.mode,
        teams = order.len(),
        rounds,
        bye = teams.has_bye(),
        "schedule generated"
    );

    Ok(Schedule {
        mode: options.mode,
        teams: order,
        pools,
        has_bye: teams.has_bye(),
        table,
    })
}

/// Both strategies need at least one round and a non-empty, even list.
pub(crate) fn check_pairable(teams: &[TeamName], rounds: usize) -> ScheduleResult<()> {
    if teams.is_empty() {
        return Err(ScheduleError::InvalidInput("team list is empty".to_string()));
    }
    if teams.len() % 2 != 0 {
        return Err(ScheduleError::InvalidInput(format!(
            "team count must be even after adding the bye, got {}",
            teams.len()
        )));
    }
    if rounds == 0 {
        return Err(ScheduleError::InvalidInput(
            "number of rounds must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
