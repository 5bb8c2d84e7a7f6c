//! # card-dragon
//!
//! Game simulation core for a single-player, turn-based card game: draw
//! cards, walk a 50-cell track, survive random events and monster battles,
//! level up, and beat the dragon on the goal cell.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: views read `GameState` and call operations;
//!    nothing else mutates it.
//!
//! 2. **Randomness is injected**: every roll goes through a `RandomSource`,
//!    so a seeded `GameRng` reproduces a game and a `ScriptedRng` pins one
//!    down for tests. Damage jitter is a separate, switchable layer.
//!
//! 3. **Configuration over constants**: track length, hand size, odds,
//!    rosters and event tables live in `GameConfig` (TOML-loadable).
//!
//! 4. **No presentation side effects**: operations return `GameEvent`s and
//!    an optional flavor-delay hint; overlays, sounds and timers are the
//!    view's business.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, player, state, actions, errors
//! - `content`: monster roster, odds tables and the random draw functions
//! - `cards`: cards, the fixed-slot hand, weapon naming
//! - `map`: the track and its generator
//! - `engine`: the turn/event state machine
//! - `autoplay`: policies and whole-game playouts
//! - `prefs`: the persisted "seen tutorial" flag

pub mod autoplay;
pub mod cards;
pub mod content;
pub mod core;
pub mod engine;
pub mod map;
pub mod prefs;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ConfigError, GameConfig, GameRng, GameState, Outcome, Player, PrefsError, RandomSource, ScriptedRng,
};

pub use crate::cards::{Card, Hand, HealKind};

pub use crate::content::{CellEvent, Monster};

pub use crate::map::{Cell, CellColor, GameMap};

pub use crate::engine::{ActionOutcome, DamageVariation, Engine, EngineBuilder, FlavorDelay, GameEvent};
