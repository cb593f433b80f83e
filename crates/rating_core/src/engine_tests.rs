use super::*;
use crate::record::UNKNOWN_SURFACE;
use crate::MissingField;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

#[test]
fn test_expected_score_at_parity() {
    assert_eq!(expected_score(1500.0, 1500.0), 0.5);
    assert_eq!(expected_score(2210.5, 2210.5), 0.5);
}

#[test]
fn test_expected_score_400_points() {
    // 400 points ahead is 10:1 odds
    let e = expected_score(1900.0, 1500.0);
    assert!((e - 10.0 / 11.0).abs() < 1e-12);
    assert!((expected_score(1500.0, 1900.0) + e - 1.0).abs() < 1e-12);
}

#[test]
fn test_first_match_with_k24() {
    let history = vec![MatchRecord::new(day(1), Some("Hard"), "A", "B")];
    let (table, pre) = process(&history, 1500.0, 24.0).unwrap();

    assert_eq!(table.get("A", "Hard"), 1512.0);
    assert_eq!(table.get("B", "Hard"), 1488.0);
    assert_eq!(
        pre,
        vec![PreMatchElo {
            index: 0,
            winner_pre: 1500.0,
            loser_pre: 1500.0
        }]
    );
}

#[test]
fn test_pre_match_ratings_track_history() {
    let history = vec![
        MatchRecord::new(day(1), Some("Hard"), "A", "B"),
        MatchRecord::new(day(2), Some("Hard"), "B", "A"),
    ];
    let processed = RatingEngine::new(EloConfig::new(1500.0, 24.0))
        .process(&history)
        .unwrap();

    assert_eq!(processed.pre_match[1].winner_pre, 1488.0);
    assert_eq!(processed.pre_match[1].loser_pre, 1512.0);
    // Underdog win moves more than 12 points
    assert!(processed.table.get("B", "Hard") > 1500.0);
}

#[test]
fn test_surfaces_are_independent() {
    let history = vec![
        MatchRecord::new(day(1), Some("Clay"), "A", "B"),
        MatchRecord::new(day(2), Some("Grass"), "B", "A"),
    ];
    let processed = RatingEngine::default().process(&history).unwrap();
    let table = &processed.table;

    assert_eq!(table.get("A", "Clay"), 1516.0);
    assert_eq!(table.get("B", "Grass"), 1516.0);
    assert_eq!(table.get("A", "Hard"), 1500.0);
    assert_eq!(table.matches_played("A", "Clay"), 1);
    assert_eq!(table.blended("A"), 1500.0);
}

#[test]
fn test_missing_surface_goes_to_unknown_bucket() {
    let history = vec![MatchRecord::new(day(1), None, "A", "B")];
    let processed = RatingEngine::default().process(&history).unwrap();
    assert!(processed.table.contains("A", UNKNOWN_SURFACE));
    assert_eq!(processed.table.surfaces(), vec![UNKNOWN_SURFACE]);
}

#[test]
fn test_missing_player_aborts_by_default() {
    let history = vec![
        MatchRecord::new(day(1), Some("Hard"), "A", "B"),
        MatchRecord::partial(day(2), Some("Hard"), Some("A"), None),
    ];
    let err = RatingEngine::default().process(&history).unwrap_err();
    assert_eq!(
        err,
        MissingDataError {
            index: 1,
            field: MissingField::Loser
        }
    );
}

#[test]
fn test_missing_player_skipped_when_configured() {
    let history = vec![
        MatchRecord::partial(day(1), Some("Hard"), None, Some("B")),
        MatchRecord::new(day(2), Some("Hard"), "A", "B"),
    ];
    let config = EloConfig::default().with_missing_data(MissingDataPolicy::Skip);
    let processed = RatingEngine::new(config).process(&history).unwrap();

    assert_eq!(processed.pre_match.len(), 1);
    assert_eq!(processed.pre_match[0].index, 1);
    assert_eq!(processed.table.get("A", "Hard"), 1516.0);
}

#[test]
fn test_out_of_order_history_is_not_reordered() {
    let ordered = vec![
        MatchRecord::new(day(1), Some("Hard"), "A", "B"),
        MatchRecord::new(day(2), Some("Hard"), "B", "A"),
    ];
    let reversed = vec![ordered[1].clone(), ordered[0].clone()];

    let engine = RatingEngine::default();
    let first = engine.process(&reversed).unwrap();
    // Applied as given: B's win comes first
    assert_eq!(first.pre_match[0].index, 0);
    assert_eq!(first.table.get("B", "Hard"), engine.process(&ordered).unwrap().table.get("A", "Hard"));
}

#[test]
fn test_self_match_leaves_rating_unchanged() {
    let history = vec![MatchRecord::new(day(1), Some("Hard"), "A", "A")];
    let processed = RatingEngine::default().process(&history).unwrap();
    assert_eq!(processed.table.get("A", "Hard"), 1500.0);
}

#[test]
fn test_empty_history() {
    let processed = RatingEngine::default().process(&[]).unwrap();
    assert!(processed.pre_match.is_empty());
    assert!(processed.table.players().is_empty());
}
