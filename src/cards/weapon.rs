//! Weapon tiers and display names.

use serde::{Deserialize, Serialize};

use crate::content::{WeaponTier, WeaponTiers};

/// Named tier a weapon power falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponTierKind {
    /// Weak.
    Weak,
    /// Medium.
    Medium,
    /// Strong.
    Strong,
    /// Legendary, open-ended above.
    Legendary,
}

/// Classify a power value. Anything above the strong tier is legendary.
#[must_use]
pub fn tier_of(tiers: &WeaponTiers, power: u32) -> WeaponTierKind {
    if power <= tiers.weak.power.max {
        WeaponTierKind::Weak
    } else if power <= tiers.medium.power.max {
        WeaponTierKind::Medium
    } else if power <= tiers.strong.power.max {
        WeaponTierKind::Strong
    } else {
        WeaponTierKind::Legendary
    }
}

/// Display name for a weapon, e.g. `バトルアクス(4)`.
///
/// Bounded tiers index their names by `power - min`. The legendary tier buckets
/// every `legendary_name_span` power values into one name and clamps to the
/// last name, so arbitrarily large powers still map to a bounded set.
#[must_use]
pub fn weapon_display_name(tiers: &WeaponTiers, power: u32) -> String {
    let name = match tier_of(tiers, power) {
        WeaponTierKind::Weak => indexed_name(&tiers.weak, power),
        WeaponTierKind::Medium => indexed_name(&tiers.medium, power),
        WeaponTierKind::Strong => indexed_name(&tiers.strong, power),
        WeaponTierKind::Legendary => {
            let tier = &tiers.legendary;
            let span = tiers.legendary_name_span.max(1);
            let bucket = (power.saturating_sub(tier.power.min) / span) as usize;
            clamped(tier, bucket)
        }
    };
    format!("{name}({power})")
}

fn indexed_name(tier: &WeaponTier, power: u32) -> &str {
    clamped(tier, power.saturating_sub(tier.power.min) as usize)
}

fn clamped(tier: &WeaponTier, index: usize) -> &str {
    let last = tier.names.len().saturating_sub(1);
    tier.names.get(index.min(last)).map_or("武器", String::as_str)
}
