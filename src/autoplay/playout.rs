//! Drive a whole game with a policy.

use serde::Serialize;

use super::policy::Policy;
use crate::core::{GameRng, Outcome, RandomSource};
use crate::engine::Engine;

/// Result of one automated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayoutSummary {
    /// `None` when the action limit ran out first.
    pub outcome: Option<Outcome>,
    /// Turns completed.
    pub turns: u32,
    /// Actions submitted, rejected ones included.
    pub actions: u32,
    /// Final level.
    pub level: u32,
    /// Final position.
    pub position: u32,
}

/// Let `policy` play until the game ends or `max_actions` is reached.
///
/// `rng` is the policy's own source; the engine keeps rolling on its own.
pub fn play_out<R: RandomSource, P: Policy + ?Sized>(
    engine: &mut Engine<R>,
    policy: &P,
    rng: &mut GameRng,
    max_actions: u32,
) -> PlayoutSummary {
    let mut actions = 0;
    while actions < max_actions && !engine.state().is_game_over() {
        let Some(action) = policy.choose(engine.state(), engine.config(), rng) else {
            break;
        };
        engine.apply(action);
        actions += 1;
    }

    let state = engine.state();
    PlayoutSummary {
        outcome: state.outcome,
        turns: state.turns,
        actions,
        level: state.player.level,
        position: state.player.position,
    }
}
