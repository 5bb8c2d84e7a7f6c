//! Game state: everything a view needs to render.
//!
//! ## GameState
//!
//! - Player stats, position and hand
//! - The track
//! - Turn counter
//! - Battle session (the engaged monster, if any)
//! - Latest narrative message (may span several lines)
//! - Discard mode and the terminal outcome
//!
//! The engine is the single writer; views read through `Engine::state`.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::content::Monster;
use crate::map::{Cell, GameMap};

/// Terminal result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The boss fell.
    Victory,
    /// The player's HP reached 0.
    Defeat,
}

/// Complete observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The player.
    pub player: Player,

    /// The track (regenerated on restart).
    pub map: GameMap,

    /// Completed turns.
    pub turns: u32,

    /// Monster currently engaged. `Some` exactly while in battle.
    pub monster: Option<Monster>,

    /// Latest narrative message; lines separated by `\n`.
    pub message: String,

    /// Next card click discards instead of playing.
    pub discard_mode: bool,

    /// Set once the game is over; all actions but restart are rejected.
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Create a state at the start of a game.
    #[must_use]
    pub fn new(player: Player, map: GameMap) -> Self {
        Self {
            player,
            map,
            turns: 0,
            monster: None,
            message: String::new(),
            discard_mode: false,
            outcome: None,
        }
    }

    /// Goal cell index.
    #[must_use]
    pub fn goal(&self) -> u32 {
        self.map.len().saturating_sub(1) as u32
    }

    /// Check if a monster is engaged.
    #[must_use]
    pub fn in_battle(&self) -> bool {
        self.monster.is_some()
    }

    /// The engaged monster.
    #[must_use]
    pub fn current_monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if the game ended in victory.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.outcome == Some(Outcome::Victory)
    }

    /// Up to `count` cells from the player's position onward.
    #[must_use]
    pub fn upcoming(&self, count: usize) -> &[Cell] {
        self.map.upcoming(self.player.position, count)
    }

    /// Message lines, in order.
    pub fn message_lines(&self) -> impl Iterator<Item = &str> {
        self.message.lines()
    }

    /// Start a new message.
    pub(crate) fn say(&mut self, line: impl Into<String>) {
        self.message = line.into();
    }

    /// Append a line to the current message.
    pub(crate) fn append(&mut self, line: impl AsRef<str>) {
        if !self.message.is_empty() {
            self.message.push('\n');
        }
        self.message.push_str(line.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::InitialStats;
    use crate::map::{CellColor, GameMap};

    fn state() -> GameState {
        let cells = (0..=50)
            .map(|position| Cell {
                position,
                color: CellColor::Normal,
            })
            .collect();
        GameState::new(
            Player::new(&InitialStats::default(), 8),
            GameMap::from_cells(cells),
        )
    }

    #[test]
    fn test_initial_flags() {
        let s = state();
        assert_eq!(s.goal(), 50);
        assert!(!s.in_battle());
        assert!(!s.is_game_over());
        assert!(!s.is_victory());
        assert_eq!(s.upcoming(7).len(), 7);
    }

    #[test]
    fn test_message_lines() {
        let mut s = state();
        s.say("スライムが現れた！");
        s.append("プレイヤーの攻撃！");
        assert_eq!(
            s.message_lines().collect::<Vec<_>>(),
            vec!["スライムが現れた！", "プレイヤーの攻撃！"]
        );

        s.say("");
        s.append("一行目");
        assert_eq!(s.message, "一行目");
    }

    #[test]
    fn test_outcome_flags() {
        let mut s = state();
        s.outcome = Some(Outcome::Defeat);
        assert!(s.is_game_over());
        assert!(!s.is_victory());

        s.outcome = Some(Outcome::Victory);
        assert!(s.is_victory());
    }
}
