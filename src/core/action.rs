//! Player intents forwarded by a view.
//!
//! Every operation the engine exposes has an `Action` variant so that hosts,
//! policies and tests can drive a game through one entry point
//! (`Engine::apply`).

use serde::{Deserialize, Serialize};

/// One player intent.
///
/// ## Example
///
/// ```
/// use card_dragon::core::Action;
///
/// let play = Action::PlayCard { slot: 2 };
/// assert!(play.ends_turn());
/// assert!(!Action::ToggleDiscardMode.ends_turn());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Play the card in a hand slot (discards it instead in discard mode).
    PlayCard { slot: usize },
    /// Attack the engaged monster with extra weapon power.
    Attack { weapon_power: u32 },
    /// Run from the engaged monster.
    Flee,
    /// Switch discard mode on or off.
    ToggleDiscardMode,
    /// Throw away a card and draw a replacement.
    Discard { slot: usize },
    /// Skip the turn and draw a card.
    Wait,
    /// Start a new game.
    Restart,
}

impl Action {
    /// Check if a successful application of this action ends a turn.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        !matches!(self, Action::ToggleDiscardMode | Action::Restart)
    }
}
