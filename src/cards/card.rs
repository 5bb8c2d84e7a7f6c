//! The card tagged union.

use serde::{Deserialize, Serialize};

use super::weapon::weapon_display_name;
use crate::content::WeaponTiers;

/// Potion strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealKind {
    /// Small potion.
    Small,
    /// Large potion.
    Large,
}

/// A card in a hand slot.
///
/// `Empty` is the placeholder for a consumed or never-filled slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    /// Nothing in this slot.
    #[default]
    Empty,
    /// Move forward `steps` cells. Disabled during battle.
    Move { steps: u32 },
    /// Drink a potion.
    Heal { size: HealKind },
    /// Attack the engaged monster with extra power.
    Weapon { power: u32 },
}

impl Card {
    /// Check if the slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Card::Empty)
    }

    /// Check if this is a movement card.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Card::Move { .. })
    }

    /// Hand label shown to the player.
    ///
    /// ```
    /// use card_dragon::cards::{Card, HealKind};
    /// use card_dragon::content::WeaponTiers;
    ///
    /// let tiers = WeaponTiers::default();
    /// assert_eq!(Card::Move { steps: 3 }.label(&tiers), "👣 3進む");
    /// assert_eq!(Card::Heal { size: HealKind::Large }.label(&tiers), "🧪 ポーション+");
    /// assert_eq!(Card::Weapon { power: 1 }.label(&tiers), "⚔️ ダガー(1)");
    /// ```
    #[must_use]
    pub fn label(&self, tiers: &WeaponTiers) -> String {
        match self {
            Card::Empty => String::new(),
            Card::Move { steps } => format!("👣 {steps}進む"),
            Card::Heal { size: HealKind::Small } => "🧪 ポーション".to_string(),
            Card::Heal { size: HealKind::Large } => "🧪 ポーション+".to_string(),
            Card::Weapon { power } => format!("⚔️ {}", weapon_display_name(tiers, *power)),
        }
    }
}
