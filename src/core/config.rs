//! Game configuration.
//!
//! `GameConfig` bundles every tunable constant and content table:
//! - track length, hand size, potion and flee amounts
//! - starting stats and the leveling curve
//! - card, weapon, cell color and cell event odds
//! - the monster roster and the boss
//!
//! `Default` is the shipped game. A config can also be loaded from TOML,
//! where every key is optional and falls back to the default.
//! Engines refuse a config that fails `validate`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::content::{
    default_boss, default_roster, CardOdds, CellColorOdds, CellEventTable, CellEvents, InitialStats, Leveling,
    Monster, ValueRange, WeaponTiers,
};

/// Allowed drift when checking that odds sum to 1.
pub const ODDS_TOLERANCE: f64 = 1e-6;

/// Longest accepted track.
pub const MAX_GOAL: u32 = 10_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Goal cell index; the track has `goal + 1` cells.
    pub goal: u32,

    /// Number of hand slots.
    pub hand_size: usize,

    /// Cards drawn into the empty hand at (re)start.
    pub starting_cards: usize,

    /// HP restored by a small potion.
    pub heal_amount: u32,

    /// HP restored by a large potion.
    pub heal_plus_amount: u32,

    /// Cells moved back when fleeing.
    pub flee_distance: u32,

    /// Damage jitter amplitude: damage is scaled by a factor in `[1 - a, 1 + a]`.
    pub damage_variation: f64,

    /// Delay hint (ms) for the second line of carriage/detour narration.
    pub flavor_delay_ms: u32,

    /// Starting stats.
    pub initial: InitialStats,

    /// Experience curve and per-level gains.
    pub leveling: Leveling,

    /// Card draw odds.
    pub cards: CardOdds,

    /// Weapon tiers.
    pub weapons: WeaponTiers,

    /// Regular monsters.
    pub monsters: Vec<Monster>,

    /// The monster on the goal cell.
    pub boss: Monster,

    /// Cell color odds.
    pub cell_colors: CellColorOdds,

    /// Per-color event tables.
    pub cell_events: CellEvents,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal: 50,
            hand_size: 8,
            starting_cards: 8,
            heal_amount: 5,
            heal_plus_amount: 50,
            flee_distance: 10,
            damage_variation: 0.2,
            flavor_delay_ms: 1000,
            initial: InitialStats::default(),
            leveling: Leveling::default(),
            cards: CardOdds::default(),
            weapons: WeaponTiers::default(),
            monsters: default_roster(),
            boss: default_boss(),
            cell_colors: CellColorOdds::default(),
            cell_events: CellEvents::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Set the goal cell.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Set the hand size, clamping the starting draw to fit.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self.starting_cards = self.starting_cards.min(size);
        self
    }

    /// Set how many cards are drawn at (re)start.
    #[must_use]
    pub fn with_starting_cards(mut self, count: usize) -> Self {
        self.starting_cards = count;
        self
    }

    /// Set the damage jitter amplitude (0 disables jitter).
    #[must_use]
    pub fn with_damage_variation(mut self, amplitude: f64) -> Self {
        self.damage_variation = amplitude;
        self
    }

    /// Set the flee distance.
    #[must_use]
    pub fn with_flee_distance(mut self, distance: u32) -> Self {
        self.flee_distance = distance;
        self
    }

    /// Set the starting stats.
    #[must_use]
    pub fn with_initial_stats(mut self, initial: InitialStats) -> Self {
        self.initial = initial;
        self
    }

    /// Replace the monster roster.
    #[must_use]
    pub fn with_monsters(mut self, monsters: Vec<Monster>) -> Self {
        self.monsters = monsters;
        self
    }

    /// Replace the boss. It is always flagged as a boss.
    #[must_use]
    pub fn with_boss(mut self, boss: Monster) -> Self {
        self.boss = boss.boss();
        self
    }

    /// Replace the card odds.
    #[must_use]
    pub fn with_card_odds(mut self, odds: CardOdds) -> Self {
        self.cards = odds;
        self
    }

    /// Replace the cell color odds.
    #[must_use]
    pub fn with_cell_colors(mut self, odds: CellColorOdds) -> Self {
        self.cell_colors = odds;
        self
    }

    /// Replace the cell event tables.
    #[must_use]
    pub fn with_cell_events(mut self, events: CellEvents) -> Self {
        self.cell_events = events;
        self
    }

    /// Check every table and constant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("goal", (1..=MAX_GOAL).contains(&self.goal), "in [1, 10000]")?;
        require("hand_size", self.hand_size >= 1, "at least 1")?;
        require(
            "starting_cards",
            self.starting_cards <= self.hand_size,
            "at most hand_size",
        )?;
        require(
            "damage_variation",
            self.damage_variation.is_finite() && (0.0..1.0).contains(&self.damage_variation),
            "in [0, 1)",
        )?;
        require("initial.max_hp", self.initial.max_hp >= 1, "at least 1")?;
        require("initial.level", self.initial.level >= 1, "at least 1")?;
        require("leveling.base_exp", self.leveling.base_exp >= 1, "at least 1")?;
        require(
            "leveling.growth",
            self.leveling.growth.is_finite() && self.leveling.growth >= 1.0,
            "a finite value >= 1",
        )?;

        check_odds("cards", &self.cards.weights())?;
        check_range("cards.move_steps", self.cards.move_steps)?;
        require("cards.move_steps", self.cards.move_steps.min >= 1, "at least 1 step")?;

        self.validate_weapons()?;

        if self.monsters.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        require(
            "monsters",
            self.monsters.iter().all(|m| m.hp >= 1),
            "monsters with at least 1 hp",
        )?;
        require(
            "monsters",
            self.monsters.iter().all(|m| !m.is_boss),
            "regular monsters only (the boss lives in `boss`)",
        )?;
        require("boss.hp", self.boss.hp >= 1, "at least 1")?;

        check_odds("cell_colors", &self.cell_colors.weights())?;
        check_event_table("cell_events.blue", &self.cell_events.blue)?;
        check_event_table("cell_events.red", &self.cell_events.red)?;
        check_event_table("cell_events.normal", &self.cell_events.normal)?;

        Ok(())
    }

    fn validate_weapons(&self) -> Result<(), ConfigError> {
        let w = &self.weapons;
        let probabilities: Vec<f64> = w.ordered().iter().map(|t| t.probability).collect();
        check_odds("weapons", &probabilities)?;
        require(
            "weapons.legendary_name_span",
            w.legendary_name_span >= 1,
            "at least 1",
        )?;
        require("weapons.weak", w.weak.power.min >= 1, "a power range starting at 1 or more")?;

        let named = [
            ("weak", &w.weak),
            ("medium", &w.medium),
            ("strong", &w.strong),
            ("legendary", &w.legendary),
        ];
        let mut previous_max = 0;
        for (i, &(tier_name, tier)) in named.iter().enumerate() {
            check_range("weapons", tier.power)?;
            if i > 0 && tier.power.min <= previous_max {
                return Err(ConfigError::TierOrder { tier: tier_name });
            }
            previous_max = tier.power.max;

            let needed = if tier_name == "legendary" {
                1
            } else {
                tier.power.width() as usize
            };
            if tier.names.len() < needed {
                return Err(ConfigError::MissingWeaponNames {
                    tier: tier_name,
                    needed,
                    found: tier.names.len(),
                });
            }
        }
        Ok(())
    }
}

fn require(field: &'static str, ok: bool, requirement: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, requirement })
    }
}

fn check_probability(table: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { table, value })
    }
}

fn check_odds(table: &'static str, weights: &[f64]) -> Result<(), ConfigError> {
    for &weight in weights {
        check_probability(table, weight)?;
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > ODDS_TOLERANCE {
        return Err(ConfigError::OddsDoNotSumToOne { table, sum });
    }
    Ok(())
}

fn check_range(table: &'static str, range: ValueRange) -> Result<(), ConfigError> {
    if range.min > range.max {
        return Err(ConfigError::InvertedRange {
            table,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

fn check_event_table(table: &'static str, events: &CellEventTable) -> Result<(), ConfigError> {
    check_probability(table, events.good_chance)?;
    for spec in events.good.iter().chain(&events.bad) {
        check_probability(table, spec.weight())?;
        if let Some(range) = spec.range() {
            check_range(table, range)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EventSpec;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.goal, 50);
        assert_eq!(config.hand_size, 8);
        assert_eq!(config.boss.name, "ドラゴン");
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_goal(20)
            .with_hand_size(4)
            .with_damage_variation(0.0)
            .with_flee_distance(3);

        assert_eq!(config.goal, 20);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.starting_cards, 4);
        assert_eq!(config.damage_variation, 0.0);
        assert_eq!(config.flee_distance, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_boss_forces_flag() {
        let config = GameConfig::new().with_boss(Monster::new("ヒドラ", 40, 4, 2));
        assert!(config.boss.is_boss);
    }

    #[test]
    fn test_cell_colors_must_sum_to_one() {
        let config = GameConfig::new().with_cell_colors(CellColorOdds {
            blue: 0.5,
            red: 0.5,
            normal: 0.5,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OddsDoNotSumToOne { table: "cell_colors", .. })
        ));
    }

    #[test]
    fn test_negative_probability_rejected() {
        let config = GameConfig::new().with_cell_colors(CellColorOdds {
            blue: 1.2,
            red: -0.2,
            normal: 0.0,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { table: "cell_colors", .. })
        ));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let config = GameConfig::new().with_monsters(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::EmptyRoster)));
    }

    #[test]
    fn test_boss_in_roster_rejected() {
        let mut roster = default_roster();
        roster.push(Monster::new("偽ドラゴン", 1, 1, 0).boss());
        let config = GameConfig::new().with_monsters(roster);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "monsters", .. })
        ));
    }

    #[test]
    fn test_goal_upper_bound() {
        assert!(GameConfig::new().with_goal(MAX_GOAL).validate().is_ok());
        assert!(matches!(
            GameConfig::new().with_goal(MAX_GOAL + 1).validate(),
            Err(ConfigError::OutOfRange { field: "goal", .. })
        ));
    }

    #[test]
    fn test_starting_cards_bounded_by_hand() {
        let config = GameConfig::new().with_starting_cards(9);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "starting_cards", .. })
        ));
    }

    #[test]
    fn test_weapon_names_required() {
        let mut config = GameConfig::new();
        config.weapons.medium.names.pop();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingWeaponNames { tier: "medium", needed: 3, found: 2 })
        ));
    }

    #[test]
    fn test_overlapping_tiers_rejected() {
        let mut config = GameConfig::new();
        config.weapons.strong.power = ValueRange::new(5, 8);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TierOrder { tier: "strong" })
        ));
    }

    #[test]
    fn test_inverted_event_range_rejected() {
        let mut events = CellEvents::default();
        events.red.bad.push(EventSpec::Trap {
            weight: 0.1,
            damage: ValueRange::new(5, 2),
        });
        let config = GameConfig::new().with_cell_events(events);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { table: "cell_events.red", min: 5, max: 2 })
        ));
    }

    #[test]
    fn test_variation_bounds() {
        assert!(GameConfig::new().with_damage_variation(1.0).validate().is_err());
        assert!(GameConfig::new().with_damage_variation(f64::NAN).validate().is_err());
        assert!(GameConfig::new().with_damage_variation(0.0).validate().is_ok());
    }
}
