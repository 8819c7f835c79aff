use super::*;
use crate::request::TournamentRequest;
use debate_core::{Mode, ScheduleOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sheet(mode: Mode) -> TournamentSheet {
    TournamentRequest::new("Lions\nTigers\nBears\nOwls\n", 2)
        .owner("Jane")
        .tournament("Cup")
        .options(ScheduleOptions::new(mode))
        .run_with_rng(&mut StdRng::seed_from_u64(8))
        .unwrap()
}

#[test]
fn test_report_lists_every_round_and_table() {
    let report = generate_report(&sheet(Mode::Rotating));

    assert!(report.starts_with("=== Jane: Cup ===\n"));
    assert!(report.contains("Mode: schedule2, 4 teams, 2 rounds, 2 tables"));
    assert!(report.contains("Teams: "));
    assert!(report.contains("\nRound 1\n"));
    assert!(report.contains("\nRound 2\n"));
    assert_eq!(report.matches("Table 1").count(), 2);
    assert_eq!(report.matches("Table 2").count(), 2);
}

#[test]
fn test_report_shows_pools_for_half_split() {
    let report = generate_report(&sheet(Mode::HalfSplit));
    assert!(report.contains("Affirmative pool: "));
    assert!(report.contains("Negative pool: "));
    assert!(!report.contains("Teams: "));
}

#[test]
fn test_report_without_names_uses_default_title() {
    let mut sheet = sheet(Mode::HalfSplit);
    sheet.display_name.clear();
    assert!(generate_report(&sheet).starts_with("=== Debate Schedule ===\n"));
}

#[test]
fn test_json_output() {
    let sheet = sheet(Mode::Rotating);
    let json = generate_json(&sheet).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["mode"], "schedule2");
    assert_eq!(value["teams"].as_array().unwrap().len(), 4);
    assert!(value["pools"].is_null());
}
