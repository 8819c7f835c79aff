//! Request-scoped tournament context
//!
//! Everything one scheduling request needs travels in a [`TournamentRequest`]
//! and everything it produces comes back in a [`TournamentSheet`]; nothing is
//! kept between requests.

use debate_core::{schedule_with_rng, Schedule, ScheduleOptions, TeamList};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ToolConfig;
use crate::error::{ToolError, ToolResult};
use crate::export::{display_name, file_stem, to_csv};

/// One scheduling request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentRequest {
    /// Organiser name (may be empty)
    pub owner: String,
    /// Tournament name (may be empty)
    pub tournament: String,
    /// Prepared team list, bye included
    pub teams: TeamList,
    pub rounds: usize,
    pub options: ScheduleOptions,
}

/// Result of a request: the schedule plus what the presentation layer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSheet {
    pub display_name: String,
    pub file_stem: String,
    pub schedule: Schedule,
    pub csv: String,
}

impl TournamentRequest {
    /// Build a request from raw newline-separated team names.
    pub fn new(teams_text: &str, rounds: usize) -> Self {
        Self {
            owner: String::new(),
            tournament: String::new(),
            teams: TeamList::from_text(teams_text),
            rounds,
            options: ScheduleOptions::default(),
        }
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn tournament(mut self, tournament: impl Into<String>) -> Self {
        self.tournament = tournament.into();
        self
    }

    pub fn options(mut self, options: ScheduleOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the request, collecting every problem rather than stopping at
    /// the first.
    pub fn validate(&self) -> ToolResult<()> {
        let mut errors = Vec::new();

        if self.teams.is_empty() {
            errors.push("Number of teams must be positive integer.".to_string());
        }
        if self.rounds == 0 {
            errors.push("Number of rounds must be positive integer.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(?errors, "request rejected");
            Err(ToolError::Request(errors))
        }
    }

    /// Validate, schedule and export using the given generator.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> ToolResult<TournamentSheet> {
        self.validate()?;

        let schedule = schedule_with_rng(&self.teams, self.rounds, &self.options, rng)?;
        let csv = to_csv(&schedule.table)?;

        let sheet = TournamentSheet {
            display_name: display_name(&self.owner, &self.tournament),
            file_stem: file_stem(&self.owner, &self.tournament),
            schedule,
            csv,
        };

        info!(
            tournament = %sheet.display_name,
            entrants = self.teams.entrants(),
            rounds = sheet.schedule.rounds(),
            "tournament scheduled"
        );

        Ok(sheet)
    }

    /// Validate, schedule and export, seeding the shuffle from `config`.
    pub fn run(&self, config: &ToolConfig) -> ToolResult<TournamentSheet> {
        let mut rng = match config.schedule.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
