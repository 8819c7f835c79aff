//! Terminal reports for a finished schedule

use debate_core::TeamName;

use crate::error::ToolResult;
use crate::request::TournamentSheet;

/// Generate a text report
pub fn generate_report(sheet: &TournamentSheet) -> String {
    let schedule = &sheet.schedule;
    let title = if sheet.display_name.is_empty() {
        "Debate Schedule"
    } else {
        sheet.display_name.as_str()
    };

    let mut report = String::new();
    report.push_str(&format!("=== {} ===\n\n", title));
    report.push_str(&format!(
        "Mode: {}, {} teams, {} rounds, {} tables\n",
        schedule.mode,
        schedule.teams.len(),
        schedule.rounds(),
        schedule.tables()
    ));

    match &schedule.pools {
        Some(pools) => {
            report.push_str(&format!("Affirmative pool: {}\n", join(&pools.affirmative)));
            report.push_str(&format!("Negative pool: {}\n", join(&pools.negative)));
        }
        None => report.push_str(&format!("Teams: {}\n", join(&schedule.teams))),
    }

    for (round, pairings) in schedule.table.iter().enumerate() {
        report.push_str(&format!("\nRound {}\n", round + 1));
        report.push_str(&"-".repeat(60));
        report.push('\n');
        for (index, pairing) in pairings.iter().enumerate() {
            report.push_str(&format!(
                "Table {:<3} A: {:<22} N: {}\n",
                index + 1,
                pairing.affirmative,
                pairing.negative
            ));
        }
    }

    report
}

/// Schedule as pretty-printed JSON
pub fn generate_json(sheet: &TournamentSheet) -> ToolResult<String> {
    Ok(serde_json::to_string_pretty(&sheet.schedule)?)
}

fn join(teams: &[TeamName]) -> String {
    teams
        .iter()
        .map(TeamName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
