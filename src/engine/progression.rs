//! Experience and level-ups.

use smallvec::SmallVec;

use super::event::{ActionOutcome, GameEvent};
use super::Engine;
use crate::content::{required_exp, Leveling};
use crate::core::{Player, RandomSource};

/// Add experience and apply every level-up it pays for.
///
/// Leftover experience carries over, so one large award can raise several
/// levels. Each level raises max HP, current HP and attack. Returns the
/// levels reached, in order.
///
/// ```
/// use card_dragon::content::{InitialStats, Leveling};
/// use card_dragon::core::Player;
/// use card_dragon::engine::award_experience;
///
/// let mut player = Player::new(&InitialStats::default(), 8);
/// // 6 to leave level 1, 9 to leave level 2
/// let reached = award_experience(&mut player, &Leveling::default(), 15);
/// assert_eq!(reached.as_slice(), &[2, 3]);
/// assert_eq!(player.exp, 0);
/// ```
pub fn award_experience(player: &mut Player, leveling: &Leveling, amount: u32) -> SmallVec<[u32; 2]> {
    let mut reached = SmallVec::new();
    player.exp = player.exp.saturating_add(amount);

    loop {
        let needed = required_exp(leveling, player.level);
        if player.exp < needed {
            break;
        }
        player.exp -= needed;
        player.level += 1;
        player.max_hp = player.max_hp.saturating_add(leveling.hp_per_level);
        player.hp = player.hp.saturating_add(leveling.hp_per_level).min(player.max_hp);
        player.attack = player.attack.saturating_add(leveling.attack_per_level);
        reached.push(player.level);
    }

    reached
}

impl<R: RandomSource> Engine<R> {
    /// Award experience with a narrative line, one more line per level gained.
    pub(super) fn gain_experience(&mut self, amount: u32, prefix: &str, out: &mut ActionOutcome) {
        self.state.append(format!("{prefix}{amount}の経験値を獲得！"));
        out.push(GameEvent::ExperienceGained { amount });

        for level in award_experience(&mut self.state.player, &self.config.leveling, amount) {
            let from = level - 1;
            self.state.append(format!("レベルアップ！ Level {from} → {level}"));
            out.push(GameEvent::LevelUp { from, to: level });
        }
    }
}
