use super::*;
use crate::error::ScheduleError;
use crate::types::Side;

fn names(list: &[&str]) -> Vec<TeamName> {
    list.iter().map(|&n| TeamName::from(n)).collect()
}

fn as_strs(round: &[Pairing]) -> Vec<(&str, &str)> {
    round
        .iter()
        .map(|p| (p.affirmative.as_str(), p.negative.as_str()))
        .collect()
}

#[test]
fn test_pools_split_in_half() {
    let teams = names(&["A", "B", "C", "D"]);
    let (aff, neg) = pools(&teams);
    assert_eq!(aff, &teams[..2]);
    assert_eq!(neg, &teams[2..]);
}

#[test]
fn test_four_teams_fixed_order() {
    let teams = names(&["A", "B", "C", "D"]);
    let table = pair(&teams, 2).unwrap();

    // Round 1: ai = i, ni = i, pool A affirmative
    assert_eq!(as_strs(table.round(0).unwrap()), vec![("A", "C"), ("B", "D")]);

    // Round 2: ai = (i + 1) % 2, ni = (i + 2) % 2, pool N affirmative
    assert_eq!(as_strs(table.round(1).unwrap()), vec![("C", "B"), ("D", "A")]);
}

#[test]
fn test_sides_flip_between_even_and_odd_rounds() {
    let teams = names(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let table = pair(&teams, 4).unwrap();
    let (aff_pool, neg_pool) = pools(&teams);

    for (round, pairings) in table.iter().enumerate() {
        let expected = if round % 2 == 0 {
            Side::Affirmative
        } else {
            Side::Negative
        };
        for team in aff_pool {
            let side = pairings.iter().find_map(|p| p.side_of(team));
            assert_eq!(side, Some(expected), "team {team} in round {round}");
        }
        for team in neg_pool {
            let side = pairings.iter().find_map(|p| p.side_of(team));
            assert_eq!(side, Some(expected.other()), "team {team} in round {round}");
        }
    }
}

#[test]
fn test_pools_never_meet_themselves() {
    let teams = names(&["A", "B", "C", "D", "E", "F"]);
    let table = pair(&teams, 6).unwrap();
    let (aff_pool, _) = pools(&teams);

    for pairings in table.iter() {
        for p in pairings {
            assert_ne!(p.affirmative, p.negative);
            // One side from each pool
            assert_ne!(
                aff_pool.contains(&p.affirmative),
                aff_pool.contains(&p.negative)
            );
        }
    }
}

#[test]
fn test_two_teams_single_table() {
    let teams = names(&["A", "B"]);
    let table = pair(&teams, 3).unwrap();
    assert_eq!(table.tables(), 1);
    assert_eq!(as_strs(table.round(1).unwrap()), vec![("B", "A")]);
    assert_eq!(as_strs(table.round(2).unwrap()), vec![("A", "B")]);
}

#[test]
fn test_rejects_empty_list() {
    let err = pair(&[], 1).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput(_)));
}
