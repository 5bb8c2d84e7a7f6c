//! Random draw functions.
//!
//! Stateless: each function reads a table and consumes rolls from the
//! supplied source, nothing else.

use serde::{Deserialize, Serialize};

use super::monster::Monster;
use super::tables::{CardOdds, CellColorOdds, CellEventTable, CellEvents, EventSpec, Leveling, WeaponTiers};
use crate::cards::{Card, HealKind};
use crate::core::rng::{choose_weighted, RandomSource};
use crate::map::CellColor;

/// Concrete effect rolled for a cell on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CellEvent {
    /// Nothing happens.
    Nothing,
    /// Rest and recover.
    Inn { heal: u32 },
    /// Take damage.
    Trap { damage: u32 },
    /// Find extra cards.
    Treasure { cards: u32 },
    /// Move forward.
    Carriage { steps: u32 },
    /// Move back.
    Detour { steps: u32 },
    /// Gain experience.
    Village { exp: u32 },
    /// A roster monster attacks.
    Monster,
}

/// Draw one card: heal, heal+, weapon, or move, by the configured odds.
///
/// Weapons roll a tier first, then a power inside that tier's range.
pub fn draw_card<R: RandomSource + ?Sized>(odds: &CardOdds, tiers: &WeaponTiers, rng: &mut R) -> Card {
    match choose_weighted(rng, &odds.weights()) {
        Some(0) => Card::Heal { size: HealKind::Small },
        Some(1) => Card::Heal { size: HealKind::Large },
        Some(2) => Card::Weapon {
            power: weapon_power(tiers, rng),
        },
        _ => Card::Move {
            steps: rng.range_inclusive(odds.move_steps.min, odds.move_steps.max),
        },
    }
}

/// Roll a weapon power: tier by probability, then uniform within the tier.
pub fn weapon_power<R: RandomSource + ?Sized>(tiers: &WeaponTiers, rng: &mut R) -> u32 {
    let ordered = tiers.ordered();
    let weights: Vec<f64> = ordered.iter().map(|t| t.probability).collect();
    let tier = choose_weighted(rng, &weights).map_or(ordered[0], |i| ordered[i]);
    rng.range_inclusive(tier.power.min, tier.power.max)
}

/// Uniform pick from the regular roster. `None` only for an empty roster.
pub fn random_monster<R: RandomSource + ?Sized>(roster: &[Monster], rng: &mut R) -> Option<Monster> {
    if roster.is_empty() {
        return None;
    }
    roster.get(rng.index(roster.len())).cloned()
}

/// Weighted pick of a cell color.
pub fn cell_color<R: RandomSource + ?Sized>(odds: &CellColorOdds, rng: &mut R) -> CellColor {
    choose_weighted(rng, &odds.weights()).map_or(CellColor::Normal, |i| CellColor::ALL[i])
}

/// Roll the event for a cell of the given color.
pub fn cell_event<R: RandomSource + ?Sized>(events: &CellEvents, color: CellColor, rng: &mut R) -> CellEvent {
    roll_table(events.for_color(color), rng)
}

/// Two-stage roll on one table: category, then weighted entry, then effect value.
pub fn roll_table<R: RandomSource + ?Sized>(table: &CellEventTable, rng: &mut R) -> CellEvent {
    let list = if rng.chance(table.good_chance) {
        &table.good
    } else {
        &table.bad
    };

    let weights: Vec<f64> = list.iter().map(EventSpec::weight).collect();
    let Some(spec) = choose_weighted(rng, &weights).and_then(|i| list.get(i)) else {
        return CellEvent::Nothing;
    };

    match spec {
        EventSpec::Nothing { .. } => CellEvent::Nothing,
        EventSpec::Monster { .. } => CellEvent::Monster,
        EventSpec::Treasure { cards, .. } => CellEvent::Treasure { cards: *cards },
        EventSpec::Inn { heal, .. } => CellEvent::Inn {
            heal: rng.range_inclusive(heal.min, heal.max),
        },
        EventSpec::Trap { damage, .. } => CellEvent::Trap {
            damage: rng.range_inclusive(damage.min, damage.max),
        },
        EventSpec::Carriage { steps, .. } => CellEvent::Carriage {
            steps: rng.range_inclusive(steps.min, steps.max),
        },
        EventSpec::Detour { steps, .. } => CellEvent::Detour {
            steps: rng.range_inclusive(steps.min, steps.max),
        },
        EventSpec::Village { exp, .. } => CellEvent::Village {
            exp: rng.range_inclusive(exp.min, exp.max),
        },
    }
}

/// Experience needed to advance from `level`: `floor(base * growth^(level - 1))`.
///
/// ```
/// use card_dragon::content::{required_exp, Leveling};
///
/// let curve = Leveling::default();
/// assert_eq!(required_exp(&curve, 1), 6);
/// assert_eq!(required_exp(&curve, 2), 9);
/// assert_eq!(required_exp(&curve, 3), 13);
/// ```
#[must_use]
pub fn required_exp(leveling: &Leveling, level: u32) -> u32 {
    let exponent = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    let exp = (f64::from(leveling.base_exp) * leveling.growth.powi(exponent)).floor();
    // `as` saturates on overflow, which keeps the curve monotonic.
    (exp as u32).max(1)
}
