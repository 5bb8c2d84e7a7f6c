//! Probability tables and numeric ranges.
//!
//! Pure data. Every table derives serde so a whole `GameConfig` can be
//! loaded from TOML; ranges are written as two-element arrays (`heal = [4, 7]`).

use serde::{Deserialize, Serialize};

use crate::map::CellColor;

/// Inclusive numeric range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct ValueRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound (inclusive).
    pub max: u32,
}

impl ValueRange {
    /// Create a range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check if a value lies in the range.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of values covered, 0 if inverted.
    #[must_use]
    pub const fn width(&self) -> u32 {
        if self.max < self.min {
            0
        } else {
            self.max - self.min + 1
        }
    }
}

impl From<[u32; 2]> for ValueRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<ValueRange> for [u32; 2] {
    fn from(range: ValueRange) -> Self {
        [range.min, range.max]
    }
}

/// Starting player stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialStats {
    /// Starting (and max) hit points.
    pub max_hp: u32,
    /// Base attack.
    pub attack: u32,
    /// Starting level.
    pub level: u32,
}

impl Default for InitialStats {
    fn default() -> Self {
        Self {
            max_hp: 10,
            attack: 3,
            level: 1,
        }
    }
}

/// Experience curve and per-level stat gains.
///
/// Required experience for `level` is `floor(base_exp * growth^(level - 1))`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leveling {
    /// Experience needed to leave level 1.
    pub base_exp: u32,
    /// Multiplier per level.
    pub growth: f64,
    /// Max HP (and current HP) gained per level.
    pub hp_per_level: u32,
    /// Attack gained per level.
    pub attack_per_level: u32,
}

impl Default for Leveling {
    fn default() -> Self {
        Self {
            base_exp: 6,
            growth: 1.5,
            hp_per_level: 3,
            attack_per_level: 2,
        }
    }
}

/// Odds for each card kind on a draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOdds {
    /// Small potion.
    pub heal: f64,
    /// Large potion.
    pub heal_plus: f64,
    /// Weapon (power rolled from `WeaponTiers`).
    pub weapon: f64,
    /// Movement card.
    #[serde(rename = "move")]
    pub movement: f64,
    /// Steps on a movement card.
    pub move_steps: ValueRange,
}

impl CardOdds {
    /// Weights in draw order: heal, heal+, weapon, move.
    #[must_use]
    pub fn weights(&self) -> [f64; 4] {
        [self.heal, self.heal_plus, self.weapon, self.movement]
    }
}

impl Default for CardOdds {
    fn default() -> Self {
        Self {
            heal: 0.15,
            heal_plus: 0.05,
            weapon: 0.1,
            movement: 0.7,
            move_steps: ValueRange::new(1, 6),
        }
    }
}

/// One weapon tier: its draw odds, power range and display names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponTier {
    /// Chance of this tier when a weapon is drawn.
    pub probability: f64,
    /// Power range.
    pub power: ValueRange,
    /// Names by power; the legendary tier buckets instead.
    pub names: Vec<String>,
}

impl WeaponTier {
    fn new(probability: f64, min: u32, max: u32, names: &[&str]) -> Self {
        Self {
            probability,
            power: ValueRange::new(min, max),
            names: names.iter().map(|n| (*n).to_string()).collect(),
        }
    }
}

/// The four weapon tiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTiers {
    /// Power span covered by each legendary name.
    pub legendary_name_span: u32,
    /// Weak tier.
    pub weak: WeaponTier,
    /// Medium tier.
    pub medium: WeaponTier,
    /// Strong tier.
    pub strong: WeaponTier,
    /// Legendary tier; display names stay bounded for any power.
    pub legendary: WeaponTier,
}

impl WeaponTiers {
    /// Tiers from weakest to strongest.
    #[must_use]
    pub fn ordered(&self) -> [&WeaponTier; 4] {
        [&self.weak, &self.medium, &self.strong, &self.legendary]
    }
}

impl Default for WeaponTiers {
    fn default() -> Self {
        Self {
            legendary_name_span: 23,
            weak: WeaponTier::new(0.4, 1, 2, &["ダガー", "ブロンズソード"]),
            medium: WeaponTier::new(
                0.3,
                3,
                5,
                &["バスタードソード", "バトルアクス", "ウォーハンマー"],
            ),
            strong: WeaponTier::new(
                0.2,
                6,
                9,
                &["ダマスカス", "フレイムソード", "方天画戟", "ルーンブレード"],
            ),
            legendary: WeaponTier::new(
                0.1,
                10,
                100,
                &["ドラゴンバスター", "エクスカリバー", "クリスタルソード", "ラグナロク"],
            ),
        }
    }
}

/// Odds for each cell color on map generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellColorOdds {
    /// Blue cells lean toward good events.
    pub blue: f64,
    /// Red cells lean toward bad events.
    pub red: f64,
    /// Normal cells are even.
    pub normal: f64,
}

impl CellColorOdds {
    /// Weights in `CellColor::ALL` order.
    #[must_use]
    pub fn weights(&self) -> [f64; 3] {
        [self.blue, self.red, self.normal]
    }
}

impl Default for CellColorOdds {
    fn default() -> Self {
        Self {
            blue: 0.35,
            red: 0.35,
            normal: 0.3,
        }
    }
}

/// A weighted entry in a cell event list, with the range its effect is rolled from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventSpec {
    /// Nothing happens.
    Nothing { weight: f64 },
    /// Draw `cards` extra cards.
    Treasure { weight: f64, cards: u32 },
    /// Restore hit points.
    Inn { weight: f64, heal: ValueRange },
    /// Lose hit points.
    Trap { weight: f64, damage: ValueRange },
    /// Ride forward.
    Carriage { weight: f64, steps: ValueRange },
    /// Get pushed back.
    Detour { weight: f64, steps: ValueRange },
    /// Gain experience.
    Village { weight: f64, exp: ValueRange },
    /// A roster monster appears.
    Monster { weight: f64 },
}

impl EventSpec {
    /// Relative weight inside its category.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            EventSpec::Nothing { weight }
            | EventSpec::Treasure { weight, .. }
            | EventSpec::Inn { weight, .. }
            | EventSpec::Trap { weight, .. }
            | EventSpec::Carriage { weight, .. }
            | EventSpec::Detour { weight, .. }
            | EventSpec::Village { weight, .. }
            | EventSpec::Monster { weight } => *weight,
        }
    }

    /// The numeric range rolled for the effect, if any.
    #[must_use]
    pub fn range(&self) -> Option<ValueRange> {
        match self {
            EventSpec::Inn { heal: r, .. }
            | EventSpec::Trap { damage: r, .. }
            | EventSpec::Carriage { steps: r, .. }
            | EventSpec::Detour { steps: r, .. }
            | EventSpec::Village { exp: r, .. } => Some(*r),
            EventSpec::Nothing { .. } | EventSpec::Treasure { .. } | EventSpec::Monster { .. } => {
                None
            }
        }
    }
}

/// Two-stage event table for one cell color.
///
/// First roll GOOD with `good_chance` (else BAD), then pick within that list
/// by relative weight. An empty list resolves to nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellEventTable {
    /// Chance of rolling from the `good` list.
    pub good_chance: f64,
    /// Good events.
    #[serde(default)]
    pub good: Vec<EventSpec>,
    /// Bad events.
    #[serde(default)]
    pub bad: Vec<EventSpec>,
}

/// Event tables per cell color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellEvents {
    /// Blue cells.
    pub blue: CellEventTable,
    /// Red cells.
    pub red: CellEventTable,
    /// Normal cells.
    pub normal: CellEventTable,
}

impl CellEvents {
    /// Table for a color.
    #[must_use]
    pub fn for_color(&self, color: CellColor) -> &CellEventTable {
        match color {
            CellColor::Blue => &self.blue,
            CellColor::Red => &self.red,
            CellColor::Normal => &self.normal,
        }
    }
}

impl Default for CellEvents {
    fn default() -> Self {
        Self {
            blue: CellEventTable {
                good_chance: 0.8,
                good: vec![
                    EventSpec::Treasure { weight: 0.6, cards: 1 },
                    EventSpec::Treasure { weight: 0.3, cards: 2 },
                    EventSpec::Inn { weight: 0.05, heal: ValueRange::new(4, 7) },
                    EventSpec::Carriage { weight: 0.05, steps: ValueRange::new(2, 4) },
                    EventSpec::Village { weight: 0.05, exp: ValueRange::new(3, 5) },
                ],
                bad: Vec::new(),
            },
            red: CellEventTable {
                good_chance: 0.2,
                good: Vec::new(),
                bad: vec![
                    EventSpec::Monster { weight: 0.9 },
                    EventSpec::Trap { weight: 0.05, damage: ValueRange::new(2, 4) },
                    EventSpec::Detour { weight: 0.05, steps: ValueRange::new(1, 3) },
                ],
            },
            normal: CellEventTable {
                good_chance: 0.5,
                good: vec![
                    EventSpec::Nothing { weight: 0.5 },
                    EventSpec::Treasure { weight: 0.1, cards: 1 },
                    EventSpec::Treasure { weight: 0.05, cards: 2 },
                    EventSpec::Inn { weight: 0.05, heal: ValueRange::new(3, 6) },
                    EventSpec::Carriage { weight: 0.05, steps: ValueRange::new(2, 4) },
                    EventSpec::Village { weight: 0.05, exp: ValueRange::new(2, 4) },
                ],
                bad: vec![
                    EventSpec::Monster { weight: 0.15 },
                    EventSpec::Trap { weight: 0.05, damage: ValueRange::new(2, 4) },
                    EventSpec::Detour { weight: 0.05, steps: ValueRange::new(1, 3) },
                ],
            },
        }
    }
}
