use tictactoe::{
    Game, GameError, GameStatus, Marker, Rejection, TurnOutcome, DEFAULT_PLAYER_NAMES,
};

fn started() -> Game {
    let mut game = Game::new();
    game.start("Alice", "Bob");
    game
}

#[test]
fn test_play_before_start_fails() {
    let mut game = Game::new();
    assert_eq!(game.play_turn(0), Err(GameError::NotStarted));
    assert_eq!(game.current_player().unwrap_err(), GameError::NotStarted);
    assert_eq!(game.players().unwrap_err(), GameError::NotStarted);
    assert_eq!(game.restart(), Err(GameError::NotStarted));
    assert_eq!(game.status(), GameStatus::NotStarted);
}

#[test]
fn test_out_of_range_index_fails() {
    let mut game = started();
    assert_eq!(game.play_turn(9), Err(GameError::InvalidIndex(9)));
    assert_eq!(game.status(), GameStatus::InProgress { current: 0 });
}

#[test]
fn test_start_assigns_markers_in_order() {
    let game = started();
    let [a, b] = game.players().unwrap();
    assert_eq!((a.name(), a.marker()), ("Alice", Marker::X));
    assert_eq!((b.name(), b.marker()), ("Bob", Marker::O));
    assert_eq!(game.current_player().unwrap().name(), "Alice");
}

#[test]
fn test_blank_names_use_defaults() {
    let mut game = Game::new();
    game.start("", "   ");
    let [a, b] = game.players().unwrap();
    assert_eq!(a.name(), DEFAULT_PLAYER_NAMES[0]);
    assert_eq!(b.name(), DEFAULT_PLAYER_NAMES[1]);
}

#[test]
fn test_turns_alternate() {
    let mut game = started();
    let mut seen = Vec::new();
    for index in [0, 1, 2, 4, 3, 5] {
        seen.push(game.current_player().unwrap().name().to_string());
        assert!(matches!(
            game.play_turn(index).unwrap(),
            TurnOutcome::Switched { .. }
        ));
    }
    assert_eq!(seen, ["Alice", "Bob", "Alice", "Bob", "Alice", "Bob"]);
}

#[test]
fn test_occupied_cell_is_rejected_without_state_change() {
    let mut game = started();
    game.play_turn(4).unwrap();
    let before = game.state();
    assert_eq!(
        game.play_turn(4).unwrap(),
        TurnOutcome::Rejected(Rejection::Occupied)
    );
    assert_eq!(game.state(), before);
    assert_eq!(game.current_player().unwrap().name(), "Bob");
}

#[test]
fn test_alice_wins_top_row() {
    let mut game = started();
    assert_eq!(game.play_turn(0).unwrap(), TurnOutcome::Switched { next: Marker::O });
    assert_eq!(game.play_turn(3).unwrap(), TurnOutcome::Switched { next: Marker::X });
    game.play_turn(1).unwrap();
    game.play_turn(4).unwrap();
    assert_eq!(
        game.play_turn(2).unwrap(),
        TurnOutcome::Won {
            winner: Marker::X,
            line: [0, 1, 2]
        }
    );
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: 0,
            line: [0, 1, 2]
        }
    );
    assert_eq!(game.winner().unwrap().name(), "Alice");
    assert_eq!(game.scores()[Marker::X], 1);
    assert_eq!(game.scores()[Marker::O], 0);
    assert!(game.is_over());
}

#[test]
fn test_draw_scenario() {
    let mut game = started();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for &index in &moves[..8] {
        assert!(matches!(
            game.play_turn(index).unwrap(),
            TurnOutcome::Switched { .. }
        ));
    }
    assert_eq!(game.play_turn(moves[8]).unwrap(), TurnOutcome::Draw);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.scores().total(), 0);
    assert!(game.winner().is_none());
}

#[test]
fn test_ninth_move_on_diagonal_is_a_win() {
    // X ends on 0, 2, 4, 7, 8: the final move completes 0-4-8.
    let mut game = started();
    for index in [0, 1, 2, 3, 4, 5, 7, 6] {
        assert!(!game.play_turn(index).unwrap().is_terminal());
    }
    assert_eq!(
        game.play_turn(8).unwrap(),
        TurnOutcome::Won {
            winner: Marker::X,
            line: [0, 4, 8]
        }
    );
    assert_eq!(game.scores()[Marker::X], 1);
}

#[test]
fn test_win_on_full_board_beats_draw() {
    let mut game = started();
    for index in [0, 1, 2, 4, 3, 5, 7, 8] {
        assert!(!game.play_turn(index).unwrap().is_terminal());
    }
    assert_eq!(
        game.play_turn(6).unwrap(),
        TurnOutcome::Won {
            winner: Marker::X,
            line: [0, 3, 6]
        }
    );
    assert!(game.board().empty_cells().next().is_none());
    assert_ne!(game.status(), GameStatus::Draw);
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut game = started();
    for index in [0, 3, 1, 4, 2] {
        game.play_turn(index).unwrap();
    }
    let before = game.state();
    assert_eq!(
        game.play_turn(8).unwrap(),
        TurnOutcome::Rejected(Rejection::GameOver)
    );
    assert_eq!(game.state(), before);
}

#[test]
fn test_restart_keeps_players_and_scores() {
    let mut game = started();
    for index in [0, 3, 1, 4, 2] {
        game.play_turn(index).unwrap();
    }
    game.restart().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress { current: 0 });
    assert!(game.cells().iter().all(|c| c.is_empty()));
    assert_eq!(game.scores()[Marker::X], 1);
    assert_eq!(game.players().unwrap()[1].name(), "Bob");
    assert_eq!(game.current_player().unwrap().name(), "Alice");

    // O wins the second round: scores accumulate.
    for index in [0, 3, 1, 4, 8, 5] {
        game.play_turn(index).unwrap();
    }
    assert_eq!(game.scores()[Marker::X], 1);
    assert_eq!(game.scores()[Marker::O], 1);
}

#[test]
fn test_restart_mid_round_resets_turn() {
    let mut game = started();
    game.play_turn(0).unwrap();
    assert_eq!(game.current_player().unwrap().name(), "Bob");
    game.restart().unwrap();
    assert_eq!(game.current_player().unwrap().name(), "Alice");
}

#[test]
fn test_new_game_zeroes_scores() {
    let mut game = started();
    for index in [0, 3, 1, 4, 2] {
        game.play_turn(index).unwrap();
    }
    game.start("Carol", "Dave");
    assert_eq!(game.scores().total(), 0);
    assert_eq!(game.players().unwrap()[0].name(), "Carol");
    assert_eq!(game.status(), GameStatus::InProgress { current: 0 });
}
