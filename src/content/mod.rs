//! Content tables and the random draw functions that read them.
//!
//! Tables are plain configuration: the monster roster, the boss, card and
//! weapon odds, cell color odds, per-color event tables and the leveling
//! curve. `draw` turns a table plus a `RandomSource` into a concrete card,
//! monster, color or event.

pub mod draw;
pub mod monster;
pub mod tables;

pub use draw::{
    cell_color, cell_event, draw_card, random_monster, required_exp, roll_table, weapon_power, CellEvent,
};
pub use monster::{default_boss, default_roster, Monster};
pub use tables::{
    CardOdds, CellColorOdds, CellEventTable, CellEvents, EventSpec, InitialStats, Leveling, ValueRange,
    WeaponTier, WeaponTiers,
};
