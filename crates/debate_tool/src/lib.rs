//! Debate schedule tool
//!
//! This crate wraps the pairing scheduler for organisers:
//! - Validating a tournament request (teams, rounds, mode)
//! - Building the schedule and its CSV export in one step
//! - Text and JSON reports for the terminal
//! - TOML configuration for defaults
//!
//! # Usage
//!
//! ```bash
//! # Four rounds from a team file, printed as a table
//! cargo run -p debate_tool -- schedule --teams teams.txt --rounds 4
//!
//! # Circle-method layout, CSV written to ./out/Jane_Spring_Cup.csv
//! cargo run -p debate_tool -- schedule --teams teams.txt --rounds 5 \
//!     --mode schedule2 --owner Jane --tournament "Spring Cup" --out out
//! ```

mod config;
mod error;
mod export;
mod report;
mod request;

pub use config::*;
pub use error::*;
pub use export::*;
pub use report::*;
pub use request::*;
