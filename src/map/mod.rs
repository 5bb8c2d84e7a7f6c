//! The track: cells from the start (0) to the goal, each with a color.
//!
//! Only colors are generated up front. Cell events are rolled when the player
//! lands, so visiting the same cell twice can produce different events.

mod generator;

pub use generator::generate_map;

use serde::{Deserialize, Serialize};

/// Cell color: decides which event table is rolled on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellColor {
    /// Leans toward good events.
    Blue,
    /// Leans toward bad events.
    Red,
    /// Even odds.
    Normal,
}

impl CellColor {
    /// All colors, in `CellColorOdds::weights` order.
    pub const ALL: [CellColor; 3] = [CellColor::Blue, CellColor::Red, CellColor::Normal];
}

/// One position on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Index from the start.
    pub position: u32,
    /// Color tag.
    pub color: CellColor,
}

/// The full track, index 0 through the goal inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    cells: Vec<Cell>,
}

impl GameMap {
    /// Build a map from cells. Positions are expected to match indices.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Every cell.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells (goal + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the map has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a position.
    #[must_use]
    pub fn cell(&self, position: u32) -> Option<&Cell> {
        self.cells.get(position as usize)
    }

    /// Up to `count` cells starting at `position` (the current cell first).
    #[must_use]
    pub fn upcoming(&self, position: u32, count: usize) -> &[Cell] {
        let start = (position as usize).min(self.cells.len());
        let end = start.saturating_add(count).min(self.cells.len());
        &self.cells[start..end]
    }
}
