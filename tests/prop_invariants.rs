//! Property-based tests for engine invariants.
//!
//! Random action sequences against seeded engines. After every operation:
//! - `hp <= max_hp` and `position <= goal`
//! - the hand keeps its capacity
//! - a finished game never changes except through restart

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use card_dragon::autoplay::{legal_actions, play_out, RandomPolicy};
use card_dragon::content::{required_exp, Leveling, Monster};
use card_dragon::core::{Action, GameRng};
use card_dragon::engine::EngineBuilder;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..10).prop_map(|slot| Action::PlayCard { slot }),
        2 => (0u32..12).prop_map(|weapon_power| Action::Attack { weapon_power }),
        1 => Just(Action::Flee),
        1 => Just(Action::ToggleDiscardMode),
        1 => (0usize..10).prop_map(|slot| Action::Discard { slot }),
        1 => Just(Action::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Stats and position stay in bounds across any action sequence.
    #[test]
    fn prop_state_bounds(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..200)
    ) {
        let mut engine = EngineBuilder::new().build(seed).unwrap();
        let capacity = engine.state().player.hand.capacity();
        let goal = engine.state().goal();

        for action in actions {
            let turns_before = engine.state().turns;
            let outcome = engine.apply(action);
            let state = engine.state();

            prop_assert!(state.player.hp <= state.player.max_hp);
            prop_assert!(state.player.position <= goal);
            prop_assert_eq!(state.player.hand.capacity(), capacity);
            prop_assert!(state.player.hand.card_count() <= capacity);
            prop_assert!(state.turns <= turns_before + 1);
            prop_assert_eq!(state.in_battle(), state.monster.is_some());
            if state.player.hp == 0 {
                prop_assert!(state.is_game_over());
                prop_assert!(!state.is_victory());
            }
            if !outcome.accepted {
                prop_assert!(outcome.events.is_empty());
            }
        }
    }

    /// Rejected calls never touch the state.
    #[test]
    fn prop_rejected_is_noop(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..100)
    ) {
        let mut engine = EngineBuilder::new().build(seed).unwrap();
        for action in actions {
            let before = engine.state().clone();
            if !engine.apply(action).accepted {
                prop_assert_eq!(engine.state(), &before);
            }
        }
    }

    /// A finished game ignores everything but restart.
    #[test]
    fn prop_game_over_is_frozen(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..50)
    ) {
        let mut engine = EngineBuilder::new().build(seed).unwrap();
        play_out(&mut engine, &RandomPolicy, &mut GameRng::new(seed), 5_000);
        if !engine.state().is_game_over() {
            // Survived the random walk: force a lethal exchange.
            engine.state_mut().player.hp = 1;
            engine.state_mut().monster = Some(Monster::new("岩", 1_000, 50, 0));
            engine.attack(0);
        }
        prop_assert!(engine.state().is_game_over());

        let frozen = engine.state().clone();
        prop_assert!(legal_actions(&frozen).is_empty());
        for action in actions {
            prop_assert!(!engine.apply(action).accepted);
            prop_assert_eq!(engine.state(), &frozen);
        }

        prop_assert!(engine.apply(Action::Restart).accepted);
        prop_assert!(!engine.state().is_game_over());
    }

    /// Every enumerated legal action is accepted.
    #[test]
    fn prop_legal_actions_accepted(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..100)
    ) {
        let mut engine = EngineBuilder::new().build(seed).unwrap();
        for pick in picks {
            let actions = legal_actions(engine.state());
            if actions.is_empty() {
                break;
            }
            let action = actions[pick.index(actions.len())];
            prop_assert!(engine.apply(action).accepted, "{:?} rejected", action);
        }
    }

    /// The experience curve never decreases.
    #[test]
    fn prop_required_exp_monotonic(level in 1u32..60) {
        let curve = Leveling::default();
        prop_assert!(required_exp(&curve, level + 1) >= required_exp(&curve, level));
        prop_assert!(required_exp(&curve, level) >= 1);
    }
}
