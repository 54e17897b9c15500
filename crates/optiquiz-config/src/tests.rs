//! Tests for quiz configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42

        [board]
        default_n = 8
        min_n = 6
        max_n = 12

        [generation]
        max_attempts = 500

        [distractors]
        count = 4
        spread = 5

        [tour]
        cities = ["Oslo", "Rome", "Lima"]
        matrix_low = 10
        matrix_high = 20
    "#;

    let config = QuizConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.board.default_n, 8);
    assert_eq!(config.generation.max_attempts, 500);
    assert_eq!(config.distractors.count, 4);
    assert_eq!(config.distractors.max_attempts, 1_000);
    assert_eq!(config.tour.cities, vec!["Oslo", "Rome", "Lima"]);
    assert_eq!(config.tour.random_search_iterations, 2_000);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        tour:
          matrix_low: 1
          matrix_high: 9
        trend:
          default_limit: 5
    "#;

    let config = QuizConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.tour.matrix_high, 9);
    assert_eq!(config.tour.cities.len(), 10);
    assert_eq!(config.trend.default_limit, 5);
}

#[test]
fn test_defaults_are_valid() {
    let config = QuizConfig::default();
    config.validate().unwrap();
    assert_eq!(config.board.default_n, 10);
    assert_eq!(config.tour.matrix_low, 50);
    assert_eq!(config.tour.matrix_high, 100);
    assert_eq!(config.tour.max_route_cities, 8);
}

#[test]
fn test_rejects_inverted_matrix_range() {
    let err = QuizConfig::from_toml_str(
        r#"
        [tour]
        matrix_low = 90
        matrix_high = 10
    "#,
    );
    assert!(matches!(err, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_rejects_default_outside_range() {
    let err = QuizConfig::from_toml_str(
        r#"
        [board]
        default_n = 20
    "#,
    );
    assert!(matches!(err, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_rejects_side_range_outside_generator_bounds() {
    let small = QuizConfig::from_toml_str(
        r#"
        [board]
        default_n = 6
        min_n = 4
    "#,
    );
    assert!(matches!(small, Err(ConfigError::Invalid(_))));

    let large = QuizConfig::from_toml_str(
        r#"
        [board]
        max_n = 13
    "#,
    );
    assert!(matches!(large, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_rejects_duplicate_cities() {
    let config = QuizConfig::new().with_cities(["A", "B", "A"]);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_builder() {
    let config = QuizConfig::new()
        .with_random_seed(123)
        .with_cities(["X", "Y"])
        .with_random_search_iterations(50);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.tour.cities, vec!["X", "Y"]);
    assert_eq!(config.tour.random_search_iterations, 50);
}

#[test]
fn test_resolve_limit() {
    let trend = TrendConfig::default();
    assert_eq!(trend.resolve_limit(None), 15);
    assert_eq!(trend.resolve_limit(Some(0)), 15);
    assert_eq!(trend.resolve_limit(Some(500)), 15);
    assert_eq!(trend.resolve_limit(Some(40)), 40);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("optiquiz.toml");
    std::fs::write(&path, "random_seed = 9\n").unwrap();

    let config = QuizConfig::load(&path).unwrap();
    assert_eq!(config.random_seed, Some(9));

    let missing = QuizConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}
