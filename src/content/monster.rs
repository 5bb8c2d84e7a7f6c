//! Monster roster and the boss.

use serde::{Deserialize, Serialize};

/// A monster, either a roster template or the live opponent in a battle.
///
/// The live copy's `hp` is reduced by combat; the roster entry is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name.
    pub name: String,
    /// Remaining hit points.
    pub hp: u32,
    /// Base counter-attack damage (before the `- 1` softening).
    pub attack: u32,
    /// Subtracted from the player's damage.
    pub defense: u32,
    /// Experience awarded on defeat.
    #[serde(default)]
    pub exp: u32,
    /// Defeating the boss wins the game.
    #[serde(default)]
    pub is_boss: bool,
}

impl Monster {
    /// Create a regular monster with no experience reward.
    pub fn new(name: impl Into<String>, hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            defense,
            exp: 0,
            is_boss: false,
        }
    }

    /// Set the experience reward.
    #[must_use]
    pub fn with_exp(mut self, exp: u32) -> Self {
        self.exp = exp;
        self
    }

    /// Mark as the boss.
    #[must_use]
    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    /// True once hit points reach zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// The regular monster roster.
pub fn default_roster() -> Vec<Monster> {
    vec![
        Monster::new("スライム", 3, 1, 0).with_exp(3),
        Monster::new("ゴブリン", 5, 2, 1).with_exp(4),
        Monster::new("オーク", 8, 3, 2).with_exp(6),
        Monster::new("ワイバーン", 15, 5, 4).with_exp(10),
        Monster::new("コボルド", 4, 2, 0).with_exp(3),
        Monster::new("スケルトン", 6, 3, 1).with_exp(5),
        Monster::new("ゾンビ", 10, 2, 2).with_exp(6),
        Monster::new("ハーピー", 12, 4, 2).with_exp(8),
        Monster::new("ガーゴイル", 14, 4, 3).with_exp(9),
        Monster::new("キメラ", 18, 6, 3).with_exp(12),
    ]
}

/// The dragon waiting on the goal cell.
pub fn default_boss() -> Monster {
    Monster::new("ドラゴン", 80, 5, 3).boss()
}
