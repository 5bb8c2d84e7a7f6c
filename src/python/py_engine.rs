//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::autoplay::{play_out, GreedyPolicy, Policy, RandomPolicy};
use crate::core::{GameConfig, GameRng};
use crate::engine::{ActionOutcome, DamageVariation, Engine, EngineBuilder};

/// Python wrapper for an operation's result.
#[pyclass(name = "Outcome")]
#[derive(Clone, Debug)]
pub struct PyOutcome(pub ActionOutcome);

#[pymethods]
impl PyOutcome {
    /// False when the call was a rejected no-op.
    #[getter]
    fn accepted(&self) -> bool {
        self.0.accepted
    }

    /// Suggested delay before the last narrative lines, if any.
    #[getter]
    fn flavor_delay_ms(&self) -> Option<u32> {
        self.0.flavor_delay.map(|d| d.millis)
    }

    /// Events as a JSON array.
    fn events_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0.events).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("Outcome(accepted={}, events={})", self.0.accepted, self.0.events.len())
    }
}

/// Python wrapper for the game engine.
#[pyclass(name = "Engine")]
pub struct PyEngine {
    engine: Engine<GameRng>,
}

#[pymethods]
impl PyEngine {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - config_toml: optional TOML configuration (defaults otherwise)
    /// - jitter: apply the configured damage variation
    #[new]
    #[pyo3(signature = (seed = 42, config_toml = None, jitter = true))]
    fn new(seed: u64, config_toml: Option<&str>, jitter: bool) -> PyResult<Self> {
        let config = match config_toml {
            Some(source) => GameConfig::from_toml_str(source).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => GameConfig::default(),
        };
        let mut builder = EngineBuilder::new().config(config);
        if !jitter {
            builder = builder.damage_variation(DamageVariation::Off);
        }
        let engine = builder
            .build(seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    fn play_card(&mut self, slot: usize) -> PyOutcome {
        PyOutcome(self.engine.play_card(slot))
    }

    #[pyo3(signature = (weapon_power = 0))]
    fn attack(&mut self, weapon_power: u32) -> PyOutcome {
        PyOutcome(self.engine.attack(weapon_power))
    }

    fn flee(&mut self) -> PyOutcome {
        PyOutcome(self.engine.flee())
    }

    fn toggle_discard_mode(&mut self) -> PyOutcome {
        PyOutcome(self.engine.toggle_discard_mode())
    }

    fn discard(&mut self, slot: usize) -> PyOutcome {
        PyOutcome(self.engine.discard(slot))
    }

    fn wait(&mut self) -> PyOutcome {
        PyOutcome(self.engine.wait())
    }

    fn restart(&mut self) -> PyOutcome {
        PyOutcome(self.engine.restart())
    }

    /// Apply a JSON-encoded action, e.g. `{"action": "play_card", "slot": 2}`.
    fn apply_json(&mut self, action: &str) -> PyResult<PyOutcome> {
        let action = serde_json::from_str(action).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyOutcome(self.engine.apply(action)))
    }

    #[getter]
    fn position(&self) -> u32 {
        self.engine.state().player.position
    }

    #[getter]
    fn hp(&self) -> u32 {
        self.engine.state().player.hp
    }

    #[getter]
    fn max_hp(&self) -> u32 {
        self.engine.state().player.max_hp
    }

    #[getter]
    fn level(&self) -> u32 {
        self.engine.state().player.level
    }

    #[getter]
    fn exp(&self) -> u32 {
        self.engine.state().player.exp
    }

    #[getter]
    fn attack_power(&self) -> u32 {
        self.engine.state().player.attack
    }

    #[getter]
    fn turns(&self) -> u32 {
        self.engine.state().turns
    }

    #[getter]
    fn in_battle(&self) -> bool {
        self.engine.state().in_battle()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.state().is_game_over()
    }

    #[getter]
    fn victory(&self) -> bool {
        self.engine.state().is_victory()
    }

    #[getter]
    fn discard_mode(&self) -> bool {
        self.engine.state().discard_mode
    }

    #[getter]
    fn message(&self) -> String {
        self.engine.state().message.clone()
    }

    fn exp_to_next_level(&self) -> u32 {
        self.engine.exp_to_next_level()
    }

    /// Engaged monster as `(name, hp, is_boss)`.
    fn monster(&self) -> Option<(String, u32, bool)> {
        self.engine
            .state()
            .current_monster()
            .map(|m| (m.name.clone(), m.hp, m.is_boss))
    }

    /// Hand labels; empty slots are empty strings.
    fn hand(&self) -> Vec<String> {
        let tiers = &self.engine.config().weapons;
        self.engine
            .state()
            .player
            .hand
            .slots()
            .iter()
            .map(|card| card.label(tiers))
            .collect()
    }

    /// Full state as JSON.
    fn state_json(&self) -> PyResult<String> {
        serde_json::to_string(self.engine.state()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Play the rest of the game with a built-in policy.
    ///
    /// Returns `(outcome, turns, level)`; outcome is "victory", "defeat" or None.
    #[pyo3(signature = (policy = "greedy", max_actions = 2000, seed = 0))]
    fn autoplay(&mut self, policy: &str, max_actions: u32, seed: u64) -> PyResult<(Option<String>, u32, u32)> {
        let policy: Box<dyn Policy> = match policy {
            "greedy" => Box::new(GreedyPolicy::default()),
            "random" => Box::new(RandomPolicy),
            other => return Err(PyValueError::new_err(format!("unknown policy: {other}"))),
        };
        let summary = play_out(&mut self.engine, policy.as_ref(), &mut GameRng::new(seed), max_actions);
        let outcome = summary
            .outcome
            .map(|o| format!("{o:?}").to_lowercase());
        Ok((outcome, summary.turns, summary.level))
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "Engine(position={}, hp={}/{}, level={}, turns={})",
            state.player.position, state.player.hp, state.player.max_hp, state.player.level, state.turns
        )
    }
}
