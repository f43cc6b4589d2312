//! Whole-game tests for Towers and the knight game.

use poker_nim::core::{Board, GameConfig, GameSnapshot, GameState, Move, Side, Square, Strategy};
use poker_nim::games::knight::{is_losing_square, KnightBuilder};
use poker_nim::games::towers::{TowersBuilder, TowersGame, TowersState};
use poker_nim::rules::{GameResult, RulesEngine};

/// Play until someone is stuck, with a separate engine per side.
fn play_out(green: &TowersGame, red: &TowersGame, state: &mut TowersState, max_plies: u32) -> GameResult {
    for _ in 0..max_plies {
        let engine = match state.to_move {
            Side::Green => green,
            Side::Red => red,
        };
        let (mv, result) = engine.play_computer(state).unwrap();
        if let Some(result) = result {
            return result;
        }
        assert!(mv.is_some());
    }
    panic!("game did not finish within {max_plies} plies");
}

// =============================================================================
// Towers
// =============================================================================

#[test]
fn test_optimal_beats_random_from_unbalanced_start() {
    let mut wins = 0;
    for seed in 0..40 {
        let config = GameConfig::default().with_seed(seed);
        let (optimal, mut state) = TowersBuilder::new().config(config.clone()).build();
        if state.position.nim_sum() == 0 {
            continue;
        }
        let (random, _) = TowersBuilder::new()
            .config(config.with_strategy(Strategy::Random))
            .board(state.position)
            .build();

        let result = play_out(&optimal, &random, &mut state, 1_000);
        assert_eq!(result.winner, Side::Green, "seed {seed}");
        wins += 1;
    }
    assert!(wins > 0);
}

#[test]
fn test_optimal_leaves_balanced_positions() {
    let config = GameConfig::default().with_seed(3);
    let (optimal, mut state) = TowersBuilder::new().config(config.clone()).build();
    let (random, _) = TowersBuilder::new()
        .config(config.with_strategy(Strategy::Random))
        .board(state.position)
        .build();

    for _ in 0..200 {
        let engine = if state.to_move == Side::Green { &optimal } else { &random };
        let mover = state.to_move;
        let nim_before = state.position.nim_sum();
        let (mv, result) = engine.play_computer(&mut state).unwrap();

        if mover == Side::Green && nim_before != 0 && mv.is_some() {
            assert_eq!(state.position.nim_sum(), 0);
        }
        if result.is_some() || mv.is_none() {
            break;
        }
    }
}

#[test]
fn test_history_records_every_ply() {
    let (game, mut state) = TowersBuilder::new().config(GameConfig::default().with_seed(5)).build();

    let mut played = Vec::new();
    for _ in 0..6 {
        let side = state.to_move;
        let (mv, result) = game.play_computer(&mut state).unwrap();
        played.push((side, mv.unwrap()));
        if result.is_some() {
            break;
        }
    }

    let recorded: Vec<(Side, Move)> = state.history.iter().map(|r| (r.side, r.mv)).collect();
    assert_eq!(recorded, played);
    assert_eq!(state.ply as usize, played.len());
    assert_eq!(state.history.back().map(|r| r.ply), Some(state.ply));
}

#[test]
fn test_snapshot_resumes_identically() {
    let config = GameConfig::default().with_strategy(Strategy::Random).with_seed(17);
    let (game, mut state) = TowersBuilder::new().config(config).build();
    for _ in 0..4 {
        game.play_computer(&mut state).unwrap();
    }

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let snapshot: GameSnapshot<Board, Move> = serde_json::from_str(&json).unwrap();
    let mut resumed: TowersState = GameState::restore(snapshot);

    for _ in 0..4 {
        let (a, _) = game.play_computer(&mut state).unwrap();
        let (b, _) = game.play_computer(&mut resumed).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(state.position, resumed.position);
}

#[test]
fn test_manual_setup_from_squares() {
    let parse = |s: &str| -> Vec<Square> { s.split(',').map(|p| p.parse().unwrap()).collect() };
    let board = Board::from_squares(
        &parse("a1,b2,c3,d4,e5,f6,g7,h8"),
        &parse("a8,b7,c6,d5,e4,f3,g2,h1"),
    )
    .unwrap();

    let config = GameConfig::from_json(r#"{ "human_side": "red", "seed": 1 }"#).unwrap();
    let (game, mut state) = TowersBuilder::new().config(config).board(board).build();

    // Balanced start: the computer (Green) opens with a random legal move.
    assert!(game.is_computer_turn(&state));
    assert_eq!(board.nim_sum(), 0);
    let (mv, result) = game.play_computer(&mut state).unwrap();
    assert!(game.legal_moves(&board, Side::Green).contains(&mv.unwrap()));
    assert!(result.is_none());
}

// =============================================================================
// Knight
// =============================================================================

#[test]
fn test_knight_games_terminate() {
    for seed in 0..30 {
        let config = GameConfig::default().with_strategy(Strategy::Random).with_seed(seed);
        let (game, mut state) = KnightBuilder::new().config(config).build();

        let mut result = game.is_terminal(&state);
        let mut plies = 0;
        while result.is_none() {
            let (mv, r) = game.play_computer(&mut state).unwrap();
            assert!(mv.is_some());
            result = r;
            plies += 1;
            assert!(plies <= 7, "seed {seed}");
        }
    }
}

#[test]
fn test_knight_optimal_first_mover_wins_from_winning_square() {
    let (game, mut state) = KnightBuilder::new().start("h6".parse().unwrap()).build();
    assert!(!is_losing_square(state.position));

    let mut result = None;
    while result.is_none() {
        let (_, r) = game.play_computer(&mut state).unwrap();
        result = r;
    }
    assert_eq!(result.unwrap().winner, Side::Green);
}
