//! The player: track position, stats and hand.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;
use crate::content::InitialStats;

/// Player stats and hand.
///
/// Invariants kept by the engine: `hp <= max_hp`, `position <= goal`,
/// and the hand capacity never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Cell index, 0 at the start.
    pub position: u32,
    /// Current level (starts at 1).
    pub level: u32,
    /// Experience toward the next level.
    pub exp: u32,
    /// Hit point ceiling.
    pub max_hp: u32,
    /// Current hit points; 0 means defeat.
    pub hp: u32,
    /// Base attack, before weapon power.
    pub attack: u32,
    /// Card slots.
    pub hand: Hand,
}

impl Player {
    /// A fresh player with full HP and an empty hand.
    #[must_use]
    pub fn new(initial: &InitialStats, hand_size: usize) -> Self {
        Self {
            position: 0,
            level: initial.level,
            exp: 0,
            max_hp: initial.max_hp,
            hp: initial.max_hp,
            attack: initial.attack,
            hand: Hand::new(hand_size),
        }
    }

    /// Restore HP up to `max_hp`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Lose HP, floored at 0. Returns the remaining HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Check if HP has run out.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.hp == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new(&InitialStats::default(), 8);
        assert_eq!(player.position, 0);
        assert_eq!(player.level, 1);
        assert_eq!((player.hp, player.max_hp), (10, 10));
        assert_eq!(player.attack, 3);
        assert_eq!(player.hand.capacity(), 8);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = Player::new(&InitialStats::default(), 8);
        player.hp = 4;
        assert_eq!(player.heal(5), 5);
        assert_eq!(player.heal(50), 1);
        assert_eq!(player.hp, 10);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut player = Player::new(&InitialStats::default(), 8);
        assert_eq!(player.take_damage(4), 6);
        assert_eq!(player.take_damage(100), 0);
        assert!(player.is_down());
    }
}
