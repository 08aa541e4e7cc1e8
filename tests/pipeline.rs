// Integration tests for the rating engine.
//
// These tests exercise the full system end-to-end through the library
// crate's public API: CSV import, configuration, the validate/compute
// pipeline, tier classification, and the comparison set.

use hooprate::compare::ComparisonSet;
use hooprate::config;
use hooprate::import;
use hooprate::rating::{
    validate_and_compute, FormulaWeights, LeagueContext, PlayerStats, RatingError, StatField, Tier,
    ValidationError,
};

// ===========================================================================
// Test helpers
// ===========================================================================

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// The reference season used as the regression fixture: a high-usage guard
/// season with realistic totals.
fn reference_season() -> PlayerStats {
    PlayerStats {
        name: "Reference Guard".into(),
        team: Some("REF".into()),
        season: Some("1990-91".into()),
        position: Some("PG".into()),
        minutes: 1698.0,
        games_played: None,
        field_goals_made: 643.0,
        field_goals_attempted: 1303.0,
        threes_made: 148.0,
        threes_attempted: 425.0,
        free_throws_made: 264.0,
        free_throws_attempted: 381.0,
        offensive_rebounds: 66.0,
        defensive_rebounds: 459.0,
        assists: 684.0,
        steals: 78.0,
        blocks: 36.0,
        turnovers: 261.0,
        personal_fouls: 118.0,
        points: None,
    }
}

// ===========================================================================
// End-to-end pipeline
// ===========================================================================

#[test]
fn reference_season_rates_as_expected() {
    let rating = validate_and_compute(
        &reference_season(),
        &LeagueContext::default(),
        &FormulaWeights::default(),
    )
    .expect("reference season should validate");

    // Hand-derived with the default weight table:
    //   two-point made = 643 - 148 = 495
    //   scoring     = 3.0*148 + 2.0*495 + 0.667*264              = 1610.088
    //   rebounding  = 0.7*66 + 0.3*459                           =  183.9
    //   playmaking  = 0.7*684                                    =  478.8
    //   defense     = 1.0*78 + 0.7*36                            =  103.2
    //   negatives   = -0.4*660 - 0.8*117 - 1.0*261 - 0.4*118     = -665.8
    //   sum = 1710.188; raw = sum / 1698 * 36 = 36.2584...
    let expected_raw = (1610.088 + 183.9 + 478.8 + 103.2 - 665.8) / 1698.0 * 36.0;

    assert!(rating.adjusted_value.is_finite());
    assert!(approx_eq(rating.raw_value, expected_raw, 1e-9));
    // Neutral defaults: adjusted equals raw.
    assert!(approx_eq(rating.adjusted_value, expected_raw, 1e-9));
    assert_eq!(rating.tier, Tier::AllTimeGreat);
    assert!(approx_eq(
        rating.breakdown.total(),
        rating.adjusted_value,
        1e-9
    ));
}

#[test]
fn made_exceeding_attempted_is_rejected() {
    let mut stats = reference_season();
    stats.field_goals_made = 10.0;
    stats.field_goals_attempted = 5.0;
    stats.threes_made = 0.0;
    stats.threes_attempted = 0.0;

    let err = validate_and_compute(
        &stats,
        &LeagueContext::default(),
        &FormulaWeights::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        RatingError::Validation(ValidationError::InconsistentShotData {
            field: StatField::FieldGoalsMade,
            ..
        })
    ));
}

#[test]
fn league_average_season_lands_exactly_on_15() {
    // Weighted sum of 15.0 in 36 minutes: raw equals the league average, so
    // the adjusted value must be the canonical 15.0 at neutral pace.
    let mut stats = reference_season();
    stats.field_goals_made = 0.0;
    stats.field_goals_attempted = 0.0;
    stats.threes_made = 0.0;
    stats.threes_attempted = 0.0;
    stats.free_throws_made = 0.0;
    stats.free_throws_attempted = 0.0;
    stats.offensive_rebounds = 0.0;
    stats.defensive_rebounds = 0.0;
    stats.assists = 0.0;
    stats.blocks = 0.0;
    stats.turnovers = 0.0;
    stats.personal_fouls = 0.0;
    stats.steals = 15.0;
    stats.minutes = 36.0;

    let rating = validate_and_compute(
        &stats,
        &LeagueContext::default(),
        &FormulaWeights::default(),
    )
    .unwrap();

    assert!(approx_eq(rating.raw_value, 15.0, 1e-9));
    assert!(approx_eq(rating.adjusted_value, 15.0, 1e-9));
    assert_eq!(rating.tier, Tier::SolidStarter);
}

#[test]
fn scaling_all_weights_scales_the_raw_value() {
    let stats = reference_season();
    let league = LeagueContext::default();
    let base = validate_and_compute(&stats, &league, &FormulaWeights::default()).unwrap();

    for k in [0.5, 2.0, 10.0] {
        let scaled = validate_and_compute(&stats, &league, &FormulaWeights::default().scaled(k))
            .unwrap();
        assert!(
            approx_eq(scaled.raw_value, base.raw_value * k, 1e-9),
            "raw value should scale linearly by {k}"
        );
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let stats = reference_season();
    let league = LeagueContext {
        pace_factor: 1.08,
        average_rating: 13.9,
    };
    let weights = FormulaWeights::default();

    let a = validate_and_compute(&stats, &league, &weights).unwrap();
    let b = validate_and_compute(&stats, &league, &weights).unwrap();

    assert_eq!(a.raw_value.to_bits(), b.raw_value.to_bits());
    assert_eq!(a.adjusted_value.to_bits(), b.adjusted_value.to_bits());
    assert_eq!(
        a.breakdown.scoring.to_bits(),
        b.breakdown.scoring.to_bits()
    );
    assert_eq!(
        a.breakdown.negatives.to_bits(),
        b.breakdown.negatives.to_bits()
    );
    assert_eq!(a.tier, b.tier);
}

#[test]
fn tier_can_be_rederived_without_recomputation() {
    let rating = validate_and_compute(
        &reference_season(),
        &LeagueContext::default(),
        &FormulaWeights::default(),
    )
    .unwrap();

    // A display layer holding only the adjusted value gets the same tier.
    assert_eq!(Tier::from_adjusted(rating.adjusted_value), rating.tier);
}

#[test]
fn each_validation_rule_fires_independently() {
    let league = LeagueContext::default();
    let weights = FormulaWeights::default();
    let check = |stats: &PlayerStats| validate_and_compute(stats, &league, &weights).unwrap_err();

    let mut negative = reference_season();
    negative.defensive_rebounds = -1.0;
    assert!(matches!(
        check(&negative),
        RatingError::Validation(ValidationError::NegativeValue { .. })
    ));

    let mut no_minutes = reference_season();
    no_minutes.minutes = 0.0;
    assert!(matches!(
        check(&no_minutes),
        RatingError::Validation(ValidationError::ZeroPlayingTime)
    ));

    let mut threes_over_fg = reference_season();
    threes_over_fg.threes_made = 700.0;
    threes_over_fg.threes_attempted = 800.0;
    assert!(matches!(
        check(&threes_over_fg),
        RatingError::Validation(ValidationError::InconsistentShotData { .. })
    ));

    let mut wrong_points = reference_season();
    // Implied total: (643-148)*2 + 148*3 + 264 = 990 + 444 + 264 = 1698
    wrong_points.points = Some(1700.0);
    assert!(matches!(
        check(&wrong_points),
        RatingError::Validation(ValidationError::PointsMismatch {
            supplied,
            computed,
        }) if supplied == 1700.0 && computed == 1698.0
    ));
}

// ===========================================================================
// CSV import -> pipeline
// ===========================================================================

#[test]
fn csv_rows_flow_through_the_pipeline() {
    let csv_data = "\
Name,Team,MIN,FGM,FGA,3PM,3PA,FTM,FTA,ORB,DRB,AST,STL,BLK,TOV,PF
Valid Wing,NYK,2400,560,1150,170,450,280,340,110,380,270,95,55,180,170
Broken Row,NYK,0,560,1150,170,450,280,340,110,380,270,95,55,180,170";

    let lines = import::load_stats_from_reader(csv_data.as_bytes()).unwrap();
    assert_eq!(lines.len(), 2);

    let league = LeagueContext::default();
    let weights = FormulaWeights::default();

    let ok = validate_and_compute(&lines[0], &league, &weights);
    assert!(ok.is_ok());

    let err = validate_and_compute(&lines[1], &league, &weights).unwrap_err();
    assert!(matches!(
        err,
        RatingError::Validation(ValidationError::ZeroPlayingTime)
    ));
}

// ===========================================================================
// Config -> pipeline
// ===========================================================================

#[test]
fn config_weights_change_the_rating() {
    let tmp = std::env::temp_dir().join("hooprate_integration_config");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(tmp.join("config")).unwrap();
    std::fs::write(
        tmp.join("config/rating.toml"),
        r#"
[league]
pace_factor = 1.02
average_rating = 14.0

[weights]
assist = 1.4
"#,
    )
    .unwrap();

    let config = config::load_config_or_default(&tmp).unwrap();
    assert!((config.weights.assist - 1.4).abs() < f64::EPSILON);
    // Unlisted weights keep their defaults.
    assert!((config.weights.steal - 1.0).abs() < f64::EPSILON);

    let stats = reference_season();
    let custom = validate_and_compute(&stats, &config.league, &config.weights).unwrap();
    let default = validate_and_compute(
        &stats,
        &LeagueContext::default(),
        &FormulaWeights::default(),
    )
    .unwrap();

    // Heavier assist weight plus the pace/baseline adjustment moves the
    // rating; it must still agree with its own breakdown.
    assert!(custom.adjusted_value > default.adjusted_value);
    assert!(approx_eq(
        custom.breakdown.total(),
        custom.adjusted_value,
        1e-9
    ));

    let _ = std::fs::remove_dir_all(&tmp);
}

// ===========================================================================
// Comparison set
// ===========================================================================

#[test]
fn comparison_set_ranks_imported_players() {
    let csv_data = "\
Name,Team,MIN,FGM,FGA,3PM,3PA,FTM,FTA,ORB,DRB,AST,STL,BLK,TOV,PF
Alpha,AAA,2000,550,1050,160,420,260,310,100,360,320,90,50,160,150
Beta,BBB,2000,380,920,90,280,140,190,60,250,180,55,25,190,200";

    let lines = import::load_stats_from_reader(csv_data.as_bytes()).unwrap();

    let mut set = ComparisonSet::default();
    for stats in lines {
        set.add(stats).unwrap();
    }

    let ranked = set.ranked();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].stats.name, "Alpha");
    assert!(ranked[0].rating.adjusted_value > ranked[1].rating.adjusted_value);
    // Every entry carries its own immutable breakdown on the shared scale.
    for entry in ranked {
        assert!(approx_eq(
            entry.rating.breakdown.total(),
            entry.rating.adjusted_value,
            1e-9
        ));
    }
}
