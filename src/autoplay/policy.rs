//! Action policies for automated play.
//!
//! Policies are trait-based so that benches and tests can swap them:
//! - `RandomPolicy`: uniform over legal actions
//! - `GreedyPolicy`: a simple heuristic that tries to reach and beat the boss

use smallvec::SmallVec;

use crate::cards::{Card, HealKind};
use crate::core::{Action, GameConfig, GameRng, GameState, RandomSource};
use crate::engine::{monster_damage, player_damage};

/// Every action the engine would accept in this state, except restart and
/// toggling discard mode.
///
/// Empty once the game is over.
pub fn legal_actions(state: &GameState) -> SmallVec<[Action; 16]> {
    let mut actions = SmallVec::new();
    if state.is_game_over() {
        return actions;
    }

    let in_battle = state.in_battle();
    for (slot, card) in state.player.hand.slots().iter().enumerate() {
        let playable = match card {
            Card::Empty => continue,
            Card::Move { .. } => !in_battle || state.discard_mode,
            Card::Weapon { .. } => in_battle || state.discard_mode,
            Card::Heal { .. } => true,
        };
        if playable {
            actions.push(Action::PlayCard { slot });
        }
        actions.push(Action::Discard { slot });
    }

    if in_battle {
        actions.push(Action::Attack { weapon_power: 0 });
        actions.push(Action::Flee);
    }
    actions.push(Action::Wait);
    actions
}

/// Chooses the next action.
pub trait Policy: Send + Sync {
    /// Pick an action, or `None` if there is nothing to do.
    fn choose(&self, state: &GameState, config: &GameConfig, rng: &mut GameRng) -> Option<Action>;

    /// Name for logs and bench labels.
    fn name(&self) -> &'static str;
}

/// Uniformly random legal action.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn choose(&self, state: &GameState, _config: &GameConfig, rng: &mut GameRng) -> Option<Action> {
        let actions = legal_actions(state);
        if actions.is_empty() {
            return None;
        }
        Some(actions[rng.index(actions.len())])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Heuristic play.
///
/// Outside battle: heal when low, otherwise take the longest move.
/// In battle: heal before a hit that could kill, flee from the boss while
/// underleveled, otherwise swing with the strongest weapon.
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    /// Heal when `hp / max_hp` drops below this.
    pub heal_threshold: f64,
    /// Flee from the boss below this level.
    pub boss_level: u32,
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self {
            heal_threshold: 0.5,
            boss_level: 8,
        }
    }
}

impl GreedyPolicy {
    fn best_slot(state: &GameState, key: impl Fn(&Card) -> Option<u32>) -> Option<usize> {
        state
            .player
            .hand
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(slot, card)| key(card).map(|score| (slot, score)))
            .max_by_key(|&(_, score)| score)
            .map(|(slot, _)| slot)
    }

    fn heal_slot(state: &GameState) -> Option<usize> {
        Self::best_slot(state, |card| match card {
            Card::Heal { size: HealKind::Large } => Some(2),
            Card::Heal { size: HealKind::Small } => Some(1),
            _ => None,
        })
    }

    fn low_on_hp(&self, state: &GameState) -> bool {
        let player = &state.player;
        f64::from(player.hp) < f64::from(player.max_hp) * self.heal_threshold
    }
}

impl Policy for GreedyPolicy {
    fn choose(&self, state: &GameState, _config: &GameConfig, _rng: &mut GameRng) -> Option<Action> {
        if state.is_game_over() {
            return None;
        }
        if state.discard_mode {
            return Some(Action::ToggleDiscardMode);
        }
        let player = &state.player;

        let Some(monster) = state.current_monster() else {
            if self.low_on_hp(state) {
                if let Some(slot) = Self::heal_slot(state) {
                    return Some(Action::PlayCard { slot });
                }
            }
            let step = Self::best_slot(state, |card| match card {
                Card::Move { steps } => Some(*steps),
                _ => None,
            });
            return Some(step.map_or(Action::Wait, |slot| Action::PlayCard { slot }));
        };

        let incoming = monster_damage(monster.attack);
        if incoming >= player.hp {
            if let Some(slot) = Self::heal_slot(state) {
                return Some(Action::PlayCard { slot });
            }
        }
        if monster.is_boss && player.level < self.boss_level {
            return Some(Action::Flee);
        }

        let weapon = Self::best_slot(state, |card| match card {
            Card::Weapon { power } => Some(*power),
            _ => None,
        });
        if let Some(slot) = weapon {
            return Some(Action::PlayCard { slot });
        }

        // A bare swing that cannot finish the monster before it finishes us.
        let swing = player_damage(player.attack, 0, monster.defense);
        if incoming >= player.hp && swing < monster.hp {
            return Some(Action::Flee);
        }
        Some(Action::Attack { weapon_power: 0 })
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{InitialStats, Monster};
    use crate::core::{GameState, Outcome, Player};
    use crate::map::{Cell, CellColor, GameMap};

    fn state() -> GameState {
        let cells = (0..=50)
            .map(|position| Cell {
                position,
                color: CellColor::Normal,
            })
            .collect();
        GameState::new(
            Player::new(&InitialStats::default(), 8),
            GameMap::from_cells(cells),
        )
    }

    #[test]
    fn test_legal_actions_outside_battle() {
        let mut s = state();
        s.player.hand.set(0, Card::Move { steps: 2 });
        s.player.hand.set(1, Card::Weapon { power: 3 });

        let actions = legal_actions(&s);
        assert!(actions.contains(&Action::PlayCard { slot: 0 }));
        assert!(!actions.contains(&Action::PlayCard { slot: 1 }));
        assert!(actions.contains(&Action::Discard { slot: 1 }));
        assert!(!actions.contains(&Action::Flee));
        assert!(actions.contains(&Action::Wait));
    }

    #[test]
    fn test_legal_actions_in_battle() {
        let mut s = state();
        s.player.hand.set(0, Card::Move { steps: 2 });
        s.player.hand.set(1, Card::Weapon { power: 3 });
        s.monster = Some(Monster::new("スライム", 3, 1, 0));

        let actions = legal_actions(&s);
        assert!(!actions.contains(&Action::PlayCard { slot: 0 }));
        assert!(actions.contains(&Action::PlayCard { slot: 1 }));
        assert!(actions.contains(&Action::Attack { weapon_power: 0 }));
        assert!(actions.contains(&Action::Flee));
    }

    #[test]
    fn test_no_actions_after_game_over() {
        let mut s = state();
        s.outcome = Some(Outcome::Defeat);
        assert!(legal_actions(&s).is_empty());
        assert!(GreedyPolicy::default()
            .choose(&s, &GameConfig::default(), &mut GameRng::new(1))
            .is_none());
    }

    #[test]
    fn test_greedy_prefers_longest_move() {
        let mut s = state();
        s.player.hand.set(2, Card::Move { steps: 2 });
        s.player.hand.set(5, Card::Move { steps: 6 });

        let action = GreedyPolicy::default().choose(&s, &GameConfig::default(), &mut GameRng::new(1));
        assert_eq!(action, Some(Action::PlayCard { slot: 5 }));
    }

    #[test]
    fn test_greedy_heals_before_lethal_hit() {
        let mut s = state();
        s.player.hp = 2;
        s.player.hand.set(1, Card::Heal { size: HealKind::Small });
        s.player.hand.set(3, Card::Weapon { power: 9 });
        s.monster = Some(Monster::new("キメラ", 18, 6, 3));

        let action = GreedyPolicy::default().choose(&s, &GameConfig::default(), &mut GameRng::new(1));
        assert_eq!(action, Some(Action::PlayCard { slot: 1 }));
    }

    #[test]
    fn test_random_policy_picks_legal() {
        let mut s = state();
        s.player.hand.set(0, Card::Heal { size: HealKind::Large });
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            let action = RandomPolicy.choose(&s, &GameConfig::default(), &mut rng).unwrap();
            assert!(legal_actions(&s).contains(&action));
        }
    }
}
