//! Core types: RNG, configuration, player, state, actions.
//!
//! This module holds the building blocks every other module shares. The
//! content tables live in `content`; `GameConfig` gathers them with the
//! game constants.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::{GameConfig, MAX_GOAL, ODDS_TOLERANCE};
pub use error::{ConfigError, PrefsError};
pub use player::Player;
pub use rng::{choose_weighted, GameRng, RandomSource, ScriptedRng};
pub use state::{GameState, Outcome};
