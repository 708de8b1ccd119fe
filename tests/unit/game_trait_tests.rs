//! Unit tests for game engine contract implementations

use versus::{AnyGameEngine, ConnectFour, EngineAdapter, GameEngine, GameError, GameStatus, TicTacToe};

use crate::mocks::{Countdown, CountdownMove};

#[cfg(test)]
mod countdown_tests {
    use super::*;

    #[test]
    fn test_initial_state_is_repeatable() {
        let game = Countdown::new();
        assert_eq!(game.initial_state(), game.initial_state());
        assert_eq!(game.initial_state().remaining, 10);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let game = Countdown::with_pile(2);
        let state = game.initial_state();
        let snapshot = state.clone();

        assert!(game.validate_move(&state, &CountdownMove(2)));
        assert!(!game.validate_move(&state, &CountdownMove(3)));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let game = Countdown::new();
        let state = game.initial_state();

        let next = game.apply_move(&state, &CountdownMove(3)).unwrap();

        assert_eq!(state.remaining, 10);
        assert_eq!(next.remaining, 7);
        assert_eq!(game.side_to_move(&next), "B");
    }

    #[test]
    fn test_apply_rejects_illegal_move() {
        let game = Countdown::new();
        let state = game.initial_state();

        let err = game.apply_move(&state, &CountdownMove(4)).unwrap_err();
        assert_eq!(err, GameError::illegal_move("countdown", "4"));
    }

    #[test]
    fn test_last_stone_wins() {
        let game = Countdown::with_pile(4);
        let state = game.initial_state();
        let state = game.apply_move(&state, &CountdownMove(1)).unwrap();
        assert_eq!(game.status(&state), GameStatus::Ongoing);

        let state = game.apply_move(&state, &CountdownMove(3)).unwrap();
        assert_eq!(game.status(&state), GameStatus::win("B"));
        assert!(game.legal_moves(&state).is_empty());
    }

    #[test]
    fn test_default_render_is_serialized_state() {
        let game = Countdown::new();
        let state = game.initial_state();
        assert_eq!(game.render_board(&state), game.serialize_state(&state));
        assert_eq!(game.serialize_state(&state), "10 A");
    }
}

#[cfg(test)]
mod erased_engine_tests {
    use super::*;

    #[test]
    fn test_prompt_with_text_history() {
        let engine = EngineAdapter::new(Countdown::new());
        let start = engine.initial_state().unwrap();
        let state = engine.apply_move(&start, "2").unwrap();

        let prompt = engine.build_prompt(&state, &["2".to_string()]).unwrap();
        assert_eq!(prompt, "Pile: 8. Taken so far: [2]. You are B. Take 1, 2 or 3.");
    }

    #[test]
    fn test_prompt_rejects_bad_history() {
        let engine = EngineAdapter::new(Countdown::new());
        let start = engine.initial_state().unwrap();

        let err = engine.build_prompt(&start, &["two".to_string()]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { .. }));
    }

    #[test]
    fn test_state_from_another_game_is_rejected() {
        let tictactoe = EngineAdapter::new(TicTacToe::new());
        let connect_four = EngineAdapter::new(ConnectFour::new());
        let foreign = connect_four.initial_state().unwrap();

        assert!(matches!(
            tictactoe.apply_move(&foreign, "b2"),
            Err(GameError::State { .. })
        ));
    }

    #[test]
    fn test_malformed_board_is_a_state_error() {
        let engine: Box<dyn AnyGameEngine> = Box::new(EngineAdapter::new(ConnectFour::new()));
        let narrow = serde_json::json!({ "columns": [[], [], []], "to_move": "Red" });

        assert!(matches!(engine.legal_moves(&narrow), Err(GameError::State { .. })));
        assert!(matches!(engine.status(&narrow), Err(GameError::State { .. })));
        assert!(matches!(engine.apply_move(&narrow, "1"), Err(GameError::State { .. })));

        let overfull = serde_json::json!({
            "columns": [["Red", "Red", "Red", "Yellow", "Yellow", "Yellow", "Red"], [], [], [], [], [], []],
            "to_move": "Yellow"
        });
        assert!(matches!(engine.serialize_state(&overfull), Err(GameError::State { .. })));
    }

    #[test]
    fn test_legal_moves_as_text() {
        let engine = EngineAdapter::new(Countdown::with_pile(2));
        let start = engine.initial_state().unwrap();

        assert_eq!(engine.legal_moves(&start).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_erased_and_typed_agree() {
        let typed = ConnectFour::new();
        let erased = EngineAdapter::new(ConnectFour::new());

        let typed_state = typed
            .apply_move(&typed.initial_state(), &typed.parse_move("4").unwrap())
            .unwrap();
        let erased_state = erased.apply_move(&erased.initial_state().unwrap(), "4").unwrap();

        assert_eq!(
            typed.serialize_state(&typed_state),
            erased.serialize_state(&erased_state).unwrap()
        );
        assert_eq!(erased.inner().id(), "connect_four");
    }
}
