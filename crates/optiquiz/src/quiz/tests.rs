use optiquiz_benchmark::{MemoryStore, PerformanceStore};
use optiquiz_config::QuizConfig;
use optiquiz_core::QuizError;
use optiquiz_solver::{solve_bfs, solve_exact, TourProblem};

use super::*;

fn config(seed: u64) -> QuizConfig {
    QuizConfig::new().with_random_seed(seed)
}

#[test]
fn test_board_round_shape() {
    let mut quiz = BoardQuiz::new(config(11), MemoryStore::new());
    let round = quiz.start_round(8).unwrap();

    assert_eq!(round.board_size, 64);
    assert_eq!(round.ladders.len(), 6);
    assert_eq!(round.snakes.len(), 6);
    assert_eq!(round.choices.len(), 3);
    assert!(round.choices.contains(&round.correct_answer));
}

#[test]
fn test_board_round_records_both_solvers() {
    let mut quiz = BoardQuiz::new(config(5), MemoryStore::new());
    let round = quiz.start_round(6).unwrap();

    let samples = quiz.store().fetch_recent_samples(10).unwrap();
    assert_eq!(samples.len(), 2);
    assert!(samples.iter().all(|s| s.run_id == round.run_id));
    let mut names: Vec<_> = samples.iter().map(|s| s.algorithm.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["BFS", "Dijkstra"]);
}

#[test]
fn test_board_answer_matches_solver() {
    let mut quiz = BoardQuiz::new(config(21), MemoryStore::new());
    let round = quiz.start_round(10).unwrap();

    let board = optiquiz_core::Board::with_teleports(
        10,
        round.ladders.clone(),
        round.snakes.clone(),
    )
    .unwrap();
    assert_eq!(solve_bfs(&board).unwrap(), round.correct_answer);
}

#[test]
fn test_board_rejects_out_of_range_side() {
    let mut quiz = BoardQuiz::new(config(1), MemoryStore::new());
    assert!(matches!(quiz.start_round(5), Err(QuizError::Validation(_))));
    assert!(matches!(quiz.start_round(13), Err(QuizError::Validation(_))));
    assert!(quiz.store().fetch_recent_samples(10).unwrap().is_empty());
}

#[test]
fn test_board_seed_is_reproducible() {
    let mut first = BoardQuiz::new(config(99), MemoryStore::new());
    let mut second = BoardQuiz::new(config(99), MemoryStore::new());

    let a = first.start_round(9).unwrap();
    let b = second.start_round(9).unwrap();
    assert_eq!(a.snakes, b.snakes);
    assert_eq!(a.ladders, b.ladders);
    assert_eq!(a.choices, b.choices);
}

#[test]
fn test_save_result_validates_name() {
    let quiz = BoardQuiz::new(config(1), MemoryStore::new());

    quiz.save_result("  Ada Lovelace ", "win").unwrap();
    assert!(matches!(
        quiz.save_result("Ada99", "win"),
        Err(QuizError::Validation(_))
    ));
    assert!(quiz.save_result("Ada", "  ").is_err());

    assert_eq!(
        quiz.store().outcomes().unwrap(),
        vec![("Ada Lovelace".to_string(), "win".to_string())]
    );
}

#[test]
fn test_board_performance_trend() {
    let mut quiz = BoardQuiz::new(config(4), MemoryStore::new());
    for _ in 0..3 {
        quiz.start_round(7).unwrap();
    }

    let trend = quiz.performance(Some(2)).unwrap();
    assert_eq!(trend.rounds, vec!["Round 1", "Round 2"]);
    assert_eq!(trend.series["BFS"].len(), 2);
    assert_eq!(trend.series["Dijkstra"].len(), 2);

    let all = quiz.performance(None).unwrap();
    assert_eq!(all.rounds.len(), 3);
}

#[test]
fn test_board_round_json_keys() {
    let mut quiz = BoardQuiz::new(config(8), MemoryStore::new());
    let round = quiz.start_round(6).unwrap();
    let json = serde_json::to_value(&round).unwrap();

    for key in ["snakes", "ladders", "board_size", "choices", "correct_answer", "run_id"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

fn optimal_submission(game: &NewTourGame, between: &[usize], player: &str) -> TourSubmission {
    let problem =
        TourProblem::new(game.home_index, between.to_vec(), &game.distance_matrix).unwrap();
    let best = solve_exact(&problem);
    TourSubmission {
        player_name: player.to_string(),
        home_city: game.home_city.clone(),
        route_between: best
            .route
            .interior()
            .iter()
            .map(|&i| game.cities[i].clone())
            .collect(),
        distance_matrix: game.distance_matrix.rows().to_vec(),
    }
}

fn others(game: &NewTourGame, count: usize) -> Vec<usize> {
    (0..game.cities.len())
        .filter(|&i| i != game.home_index)
        .take(count)
        .collect()
}

#[test]
fn test_new_game_shape() {
    let mut quiz = TourQuiz::new(config(2), MemoryStore::new());
    let game = quiz.new_game().unwrap();

    assert_eq!(game.cities.len(), 10);
    assert_eq!(game.distance_matrix.len(), 10);
    assert!(game.distance_matrix.is_symmetric());
    assert_eq!(game.cities[game.home_index], game.home_city);
}

#[test]
fn test_optimal_submission_is_correct() {
    let mut quiz = TourQuiz::new(config(3), MemoryStore::new());
    let game = quiz.new_game().unwrap();
    let submission = optimal_submission(&game, &others(&game, 5), "Grace");

    let verdict = quiz.check_answer(&submission).unwrap();
    assert!(verdict.correct);
    assert_eq!(verdict.session_id, 1);
    assert_eq!(verdict.your_distance, verdict.optimal_distance);
    assert_eq!(verdict.message, "Correct! Well done.");
    assert_eq!(verdict.algorithms.len(), 4);
    assert_eq!(verdict.your_route.first(), Some(&game.home_city));
    assert_eq!(verdict.your_route.last(), Some(&game.home_city));
    for report in verdict.algorithms.values() {
        assert!(report.distance >= verdict.optimal_distance);
        assert_eq!(report.route.len(), 7);
    }

    assert_eq!(quiz.store().games().unwrap().len(), 1);
    assert_eq!(quiz.store().fetch_recent_samples(10).unwrap().len(), 4);
}

#[test]
fn test_worse_submission_is_wrong() {
    // a ring where the optimum walks neighbours
    let config = config(6).with_cities(["A", "B", "C", "D", "E"]);
    let matrix = optiquiz_test::ring(5);
    let mut quiz = TourQuiz::new(config, MemoryStore::new());

    let submission = TourSubmission {
        player_name: "Alan".into(),
        home_city: "A".into(),
        route_between: vec!["C".into(), "B".into(), "D".into(), "E".into()],
        distance_matrix: matrix.rows().to_vec(),
    };
    let verdict = quiz.check_answer(&submission).unwrap();

    assert!(!verdict.correct);
    assert_eq!(verdict.optimal_distance, 5);
    assert!(verdict.your_distance > 5);
    assert_eq!(verdict.optimal_route, ["A", "B", "C", "D", "E", "A"]);
    assert!(quiz.store().games().unwrap().is_empty());
    assert_eq!(quiz.store().session_count().unwrap(), 1);
}

#[test]
fn test_equally_short_ordering_is_correct() {
    let config = config(6).with_cities(["A", "B", "C", "D", "E"]);
    let matrix = optiquiz_test::ring(5);
    let mut quiz = TourQuiz::new(config, MemoryStore::new());

    // the optimum walked the other way round
    let submission = TourSubmission {
        player_name: "Alan".into(),
        home_city: "A".into(),
        route_between: vec!["E".into(), "D".into(), "C".into(), "B".into()],
        distance_matrix: matrix.rows().to_vec(),
    };
    let verdict = quiz.check_answer(&submission).unwrap();

    assert!(verdict.correct);
    assert_eq!(verdict.your_distance, 5);
    assert_eq!(verdict.your_route, ["A", "E", "D", "C", "B", "A"]);
    assert_eq!(verdict.optimal_route, ["A", "B", "C", "D", "E", "A"]);
    assert_eq!(quiz.store().games().unwrap().len(), 1);
}

#[test]
fn test_submission_validation() {
    let mut quiz = TourQuiz::new(config(7), MemoryStore::new());
    let game = quiz.new_game().unwrap();
    let valid = optimal_submission(&game, &others(&game, 3), "Grace");

    let mut cases = Vec::new();

    let mut s = valid.clone();
    s.player_name = " ".into();
    cases.push(s);

    let mut s = valid.clone();
    s.route_between.clear();
    cases.push(s);

    let mut s = valid.clone();
    s.home_city = "Z".into();
    cases.push(s);

    let mut s = valid.clone();
    s.route_between.push("Q".into());
    cases.push(s);

    let mut s = valid.clone();
    s.route_between.push(game.home_city.clone());
    cases.push(s);

    let mut s = valid.clone();
    let first = s.route_between[0].clone();
    s.route_between.push(first);
    cases.push(s);

    let mut s = valid.clone();
    s.distance_matrix.pop();
    cases.push(s);

    let mut s = valid.clone();
    s.distance_matrix[0][0] = 4;
    cases.push(s);

    let mut s = valid.clone();
    s.route_between = others(&game, 9)
        .into_iter()
        .map(|i| game.cities[i].clone())
        .collect();
    cases.push(s);

    for case in &cases {
        assert!(
            matches!(quiz.check_answer(case), Err(QuizError::Validation(_))),
            "{case:?}"
        );
    }
    assert!(quiz.store().fetch_recent_samples(100).unwrap().is_empty());
}

#[test]
fn test_verdict_json_is_camel_case() {
    let mut quiz = TourQuiz::new(config(12), MemoryStore::new());
    let game = quiz.new_game().unwrap();
    let verdict = quiz
        .check_answer(&optimal_submission(&game, &others(&game, 2), "Ada"))
        .unwrap();
    let json = serde_json::to_value(&verdict).unwrap();

    for key in [
        "sessionId",
        "correct",
        "homeCity",
        "yourRoute",
        "yourDistance",
        "optimalRoute",
        "optimalDistance",
        "algorithms",
        "message",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["algorithms"]["mst_prim"]["durationMs"].is_f64());

    let game_json = serde_json::to_value(&game).unwrap();
    assert!(game_json.get("distanceMatrix").is_some());
    assert!(game_json.get("homeIndex").is_some());
}

#[test]
fn test_tour_performance_groups_by_round() {
    let mut quiz = TourQuiz::new(config(13), MemoryStore::new());
    let game = quiz.new_game().unwrap();
    let submission = optimal_submission(&game, &others(&game, 4), "Ada");
    quiz.check_answer(&submission).unwrap();
    quiz.check_answer(&submission).unwrap();

    let trend = quiz.performance(None).unwrap();
    assert_eq!(trend.rounds, vec!["Round 1", "Round 2"]);
    assert_eq!(trend.series.len(), 4);
    assert_eq!(trend.series["bruteforce"].len(), 2);
}

#[test]
fn test_complexity_table_lists_every_strategy() {
    let table = complexity_table();
    assert_eq!(table.len(), 4);
    assert!(table.contains_key("random_search"));
}
