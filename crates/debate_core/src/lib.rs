//! Pairing scheduler for debate tournaments
//!
//! This crate turns a list of team names into a round-by-round table of
//! affirmative/negative pairings:
//! - Preparing the team list (trimming, dropping blanks, adding a bye)
//! - Shuffling the entrants once per schedule
//! - Pairing them with one of two rotation strategies (see [`Mode`])
//!
//! # Usage
//!
//! ```
//! use debate_core::{prepare_teams, schedule, Mode};
//!
//! let teams = prepare_teams("Lions\nTigers\nBears\n".lines());
//! let result = schedule(&teams, 2, Mode::Rotating).unwrap();
//! assert_eq!(result.table.tables(), 2);
//! ```

pub mod error;
pub mod half_split;
pub mod rotation;
pub mod schedule;
pub mod teams;
pub mod types;

pub use error::*;
pub use schedule::*;
pub use teams::*;
pub use types::*;
