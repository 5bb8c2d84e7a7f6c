//! Map generation.

use super::{Cell, GameMap};
use crate::content::draw::cell_color;
use crate::core::{GameConfig, RandomSource};

/// Build a fresh track of `goal + 1` cells, each colored independently.
pub fn generate_map<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> GameMap {
    let cells = (0..=config.goal)
        .map(|position| Cell {
            position,
            color: cell_color(&config.cell_colors, rng),
        })
        .collect();
    GameMap::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};
    use crate::map::CellColor;

    #[test]
    fn test_map_length_and_positions() {
        let config = GameConfig::default();
        let map = generate_map(&config, &mut GameRng::new(42));

        assert_eq!(map.len(), 51);
        for (i, cell) in map.cells().iter().enumerate() {
            assert_eq!(cell.position as usize, i);
        }
    }

    #[test]
    fn test_colors_follow_rolls() {
        let config = GameConfig::default().with_goal(2);
        // blue < .35 <= red < .70 <= normal
        let mut rng = ScriptedRng::new(vec![0.1, 0.5, 0.9]);
        let map = generate_map(&config, &mut rng);

        let colors: Vec<_> = map.cells().iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![CellColor::Blue, CellColor::Red, CellColor::Normal]);
    }

    #[test]
    fn test_all_colors_appear() {
        let config = GameConfig::default();
        let map = generate_map(&config, &mut GameRng::new(7));
        for color in CellColor::ALL {
            assert!(map.cells().iter().any(|c| c.color == color));
        }
    }
}
