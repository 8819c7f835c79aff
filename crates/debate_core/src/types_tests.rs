use super::*;

#[test]
fn test_bye_name() {
    assert!(TeamName::bye().is_bye());
    assert_eq!(TeamName::bye().as_str(), BYE);
    assert!(!TeamName::from("Lions").is_bye());
}

#[test]
fn test_display_respects_padding() {
    let name = TeamName::from("Owls");
    assert_eq!(format!("[{:<6}]", name), "[Owls  ]");
}

#[test]
fn test_pairing_sides_and_opponents() {
    let lions = TeamName::from("Lions");
    let bears = TeamName::from("Bears");
    let pairing = Pairing::new(lions.clone(), bears.clone());

    assert_eq!(pairing.side_of(&lions), Some(Side::Affirmative));
    assert_eq!(pairing.side_of(&bears), Some(Side::Negative));
    assert_eq!(pairing.side_of(&TeamName::from("Owls")), None);
    assert_eq!(pairing.opponent_of(&lions), Some(&bears));

    let flipped = pairing.flipped();
    assert_eq!(flipped.team(Side::Affirmative), &bears);
    assert_eq!(flipped.team(Side::Negative), &lions);
}

#[test]
fn test_round_table_shape() {
    let mut table = RoundTable::with_capacity(2);
    assert_eq!(table.tables(), 0);

    table.push_round(vec![Pairing::new("A".into(), "B".into())]).unwrap();
    table.push_round(vec![Pairing::new("B".into(), "A".into())]).unwrap();

    assert_eq!(table.rounds(), 2);
    assert_eq!(table.tables(), 1);
    assert_eq!(table.pairing(1, 0).map(|p| p.affirmative.as_str()), Some("B"));
    assert!(table.pairing(2, 0).is_none());

    let a = TeamName::from("A");
    let opponents: Vec<&str> = table.opponents_of(&a).map(TeamName::as_str).collect();
    assert_eq!(opponents, vec!["B", "B"]);
}

#[test]
fn test_serialized_shape() {
    let pairing = Pairing::new("Lions".into(), "Bears".into());
    let json = serde_json::to_string(&pairing).unwrap();
    assert_eq!(json, r#"{"affirmative":"Lions","negative":"Bears"}"#);
    assert_eq!(serde_json::to_string(&Side::Negative).unwrap(), r#""negative""#);
}

#[test]
fn test_push_round_rejects_ragged_round() {
    let mut table = RoundTable::default();
    table
        .push_round(vec![
            Pairing::new("A".into(), "B".into()),
            Pairing::new("C".into(), "D".into()),
        ])
        .unwrap();

    let err = table
        .push_round(vec![Pairing::new("B".into(), "A".into())])
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput(_)));
    assert_eq!(table.rounds(), 1);
}

#[test]
fn test_deserialize_rejects_ragged_rounds() {
    let json = r#"{"rounds":[
        [{"affirmative":"A","negative":"B"},{"affirmative":"C","negative":"D"}],
        [{"affirmative":"B","negative":"A"}]
    ]}"#;
    assert!(serde_json::from_str::<RoundTable>(json).is_err());
}

#[test]
fn test_deserialize_accepts_serialized_table() {
    let mut table = RoundTable::default();
    table
        .push_round(vec![Pairing::new("A".into(), "B".into())])
        .unwrap();
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(serde_json::from_str::<RoundTable>(&json).unwrap(), table);
}
