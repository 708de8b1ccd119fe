//! Property-based tests for registry invariants and engine purity

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use versus::{AnyGameEngine, EngineAdapter, GameEngine, GameRegistry};

use crate::mocks::Countdown;

/// Generate registration sequences drawing ids from a small pool so repeats are common
fn arb_registrations() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::vec(
        (prop::sample::select(vec!["chess", "go", "shogi", "xiangqi", "checkers"]), 0u32..1000)
            .prop_map(|(id, tag)| (id.to_string(), tag)),
        0..30,
    )
}

proptest! {
    #[test]
    fn prop_len_counts_distinct_ids(registrations in arb_registrations()) {
        let mut registry = GameRegistry::new();
        for (id, tag) in &registrations {
            registry.register(Countdown::labelled(id, &format!("{}-{}", id, tag)));
        }

        let distinct: HashSet<&String> = registrations.iter().map(|(id, _)| id).collect();
        prop_assert_eq!(registry.len(), distinct.len());
        prop_assert_eq!(registry.all().len(), distinct.len());
    }

    #[test]
    fn prop_last_registration_wins(registrations in arb_registrations()) {
        let mut registry = GameRegistry::new();
        let mut expected: HashMap<String, String> = HashMap::new();
        for (id, tag) in &registrations {
            let name = format!("{}-{}", id, tag);
            registry.register(Countdown::labelled(id, &name));
            expected.insert(id.clone(), name);
        }

        for (id, name) in &expected {
            let engine = registry.get(id).expect("registered id must resolve");
            prop_assert_eq!(engine.id(), id.as_str());
            prop_assert_eq!(engine.name(), name.as_str());
        }
        prop_assert!(registry.get("backgammon").is_none());
    }

    #[test]
    fn prop_listing_keeps_first_seen_order(registrations in arb_registrations()) {
        let mut registry = GameRegistry::new();
        let mut first_seen: Vec<String> = Vec::new();
        for (id, tag) in &registrations {
            registry.register(Countdown::labelled(id, &tag.to_string()));
            if !first_seen.contains(id) {
                first_seen.push(id.clone());
            }
        }

        prop_assert_eq!(registry.ids(), first_seen.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_apply_never_mutates_input(pile in 1u32..50, takes in prop::collection::vec(1u32..4, 0..20)) {
        let game = Countdown::with_pile(pile);
        let mut state = game.initial_state();

        for take in takes {
            let Ok(mv) = game.parse_move(&take.to_string()) else { continue };
            let before = state.clone();
            let valid = game.validate_move(&state, &mv);
            prop_assert_eq!(&state, &before);

            match game.apply_move(&state, &mv) {
                Ok(next) => {
                    prop_assert!(valid);
                    prop_assert_eq!(&state, &before);
                    prop_assert_eq!(next.remaining, state.remaining - take);
                    state = next;
                }
                Err(_) => prop_assert!(!valid),
            }
        }
    }

    #[test]
    fn prop_random_tictactoe_games_terminate(picks in prop::collection::vec(0usize..9, 9)) {
        let engine = EngineAdapter::new(versus::TicTacToe::new());
        let mut state = engine.initial_state().unwrap();

        for pick in picks {
            let legal = engine.legal_moves(&state).unwrap();
            if legal.is_empty() {
                break;
            }
            let mv = &legal[pick % legal.len()];
            state = engine.apply_move(&state, mv).unwrap();
        }

        prop_assert!(engine.status(&state).unwrap().is_over());
    }
}
