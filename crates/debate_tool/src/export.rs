//! CSV export of a round table
//!
//! Layout: one header row of round labels, then two rows per table, the
//! affirmative row (`A: team`) immediately followed by the negative row
//! (`N: team`). Spreadsheets built on earlier exports depend on this grouping.

use debate_core::{RoundTable, ScheduleError, Side};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ToolResult;

/// File stem used when neither owner nor tournament name is given
pub const DEFAULT_FILE_STEM: &str = "debate_schedule";

/// Header row: `Round 1`, `Round 2`, ...
pub fn header_row(rounds: usize) -> Vec<String> {
    (1..=rounds).map(|r| format!("Round {r}")).collect()
}

/// The row listing one side of a table across all rounds.
pub fn side_row(table: &RoundTable, index: usize, side: Side) -> ToolResult<Vec<String>> {
    table
        .iter()
        .enumerate()
        .map(|(round, pairings)| {
            let pairing = pairings.get(index).ok_or_else(|| {
                ScheduleError::InvalidInput(format!(
                    "round {} has no table {}",
                    round + 1,
                    index + 1
                ))
            })?;
            Ok(format!("{}: {}", side.prefix(), pairing.team(side)))
        })
        .collect()
}

/// All rows in export order.
pub fn rows(table: &RoundTable) -> ToolResult<Vec<Vec<String>>> {
    let mut rows = Vec::with_capacity(1 + 2 * table.tables());
    rows.push(header_row(table.rounds()));
    for index in 0..table.tables() {
        rows.push(side_row(table, index, Side::Affirmative)?);
        rows.push(side_row(table, index, Side::Negative)?);
    }
    Ok(rows)
}

/// Serialize the table as CSV text (CRLF line endings).
pub fn to_csv(table: &RoundTable) -> ToolResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for row in rows(table)? {
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Heading shown above a schedule: `owner: tournament`, or whichever part is set.
pub fn display_name(owner: &str, tournament: &str) -> String {
    match (owner.is_empty(), tournament.is_empty()) {
        (false, false) => format!("{owner}: {tournament}"),
        (false, true) => owner.to_string(),
        _ => tournament.to_string(),
    }
}

/// Download file stem: `owner_tournament` with spaces as underscores.
pub fn file_stem(owner: &str, tournament: &str) -> String {
    let stem = format!("{owner}_{tournament}");
    if stem == "_" {
        return DEFAULT_FILE_STEM.to_string();
    }
    stem.replace(' ', "_")
}

/// Write `csv` to `<dir>/<stem>.csv`, creating `dir` if needed.
pub fn write_csv(dir: &Path, stem: &str, csv: &str) -> ToolResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}.csv"));
    std::fs::write(&path, csv)?;
    info!(path = %path.display(), bytes = csv.len(), "csv written");
    Ok(path)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
