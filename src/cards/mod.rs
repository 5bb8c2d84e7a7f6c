//! Cards: the tagged union, the fixed-slot hand and weapon naming.
//!
//! ## Structure
//!
//! - `Card`: Move / Heal / Weapon / Empty
//! - `Hand`: constant-capacity slots, drawn into at random
//! - `weapon`: power tiers and display names

pub mod card;
pub mod hand;
pub mod weapon;

pub use card::{Card, HealKind};
pub use hand::Hand;
pub use weapon::{tier_of, weapon_display_name, WeaponTierKind};
