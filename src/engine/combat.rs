//! Battle: damage math, the variation layer and the attack exchange.
//!
//! ## Damage
//!
//! - Player: `max(1, attack + weapon_power - defense)`
//! - Monster: `max(0, attack - 1)`
//!
//! Both go through `DamageVariation` afterwards. With variation off, the
//! formulas are exact, which is what the scenario tests rely on.

use super::event::{ActionOutcome, GameEvent};
use super::Engine;
use crate::cards::weapon_display_name;
use crate::core::{GameRng, Outcome, RandomSource};

/// Player damage before variation.
///
/// ```
/// use card_dragon::engine::player_damage;
///
/// assert_eq!(player_damage(3, 0, 0), 3);
/// assert_eq!(player_damage(3, 6, 4), 5);
/// assert_eq!(player_damage(3, 0, 10), 1);
/// ```
#[must_use]
pub fn player_damage(attack: u32, weapon_power: u32, defense: u32) -> u32 {
    attack.saturating_add(weapon_power).saturating_sub(defense).max(1)
}

/// Monster counter-attack damage before variation.
#[must_use]
pub fn monster_damage(attack: u32) -> u32 {
    attack.saturating_sub(1)
}

/// Optional scaling applied to every damage number.
///
/// Kept apart from the main random source so that scripted tests can pin
/// every gameplay roll and still get exact damage.
#[derive(Clone, Debug)]
pub enum DamageVariation {
    /// Exact formulas.
    Off,
    /// Always scale by this factor.
    Fixed(f64),
    /// Scale by a uniform factor in `[1 - amplitude, 1 + amplitude]`.
    Jitter { amplitude: f64, rng: GameRng },
}

impl DamageVariation {
    /// Seeded jitter.
    #[must_use]
    pub fn jitter(amplitude: f64, seed: u64) -> Self {
        DamageVariation::Jitter {
            amplitude,
            rng: GameRng::new(seed),
        }
    }

    /// Check if damage numbers pass through unchanged.
    #[must_use]
    pub fn is_off(&self) -> bool {
        matches!(self, DamageVariation::Off)
    }

    /// Scale a damage value and round to the nearest integer.
    pub fn apply(&mut self, base: u32) -> u32 {
        let factor = match self {
            DamageVariation::Off => return base,
            DamageVariation::Fixed(factor) => *factor,
            DamageVariation::Jitter { amplitude, rng } => 1.0 - *amplitude + rng.next_f64() * 2.0 * *amplitude,
        };
        // `as` saturates negatives to 0.
        (f64::from(base) * factor).round() as u32
    }
}

impl<R: RandomSource> Engine<R> {
    /// One exchange: the player hits, then the monster hits back if it survived.
    ///
    /// Ends the turn unless the exchange ended the game.
    pub(super) fn strike(&mut self, weapon_power: u32, out: &mut ActionOutcome) {
        let attack = self.state.player.attack;
        let Some(monster) = self.state.monster.as_mut() else {
            return;
        };

        let dealt = self
            .variation
            .apply(player_damage(attack, weapon_power, monster.defense))
            .max(1);
        monster.hp = monster.hp.saturating_sub(dealt);
        let name = monster.name.clone();
        let monster_hp = monster.hp;
        let monster_attack = monster.attack;

        let opener = if weapon_power > 0 {
            format!(
                "プレイヤーの{}で攻撃！{name}に{dealt}ダメージ！",
                weapon_display_name(&self.config.weapons, weapon_power)
            )
        } else {
            format!("プレイヤーの攻撃！{name}に{dealt}ダメージ！")
        };
        self.state.say(opener);
        out.push(GameEvent::PlayerAttacked {
            damage: dealt,
            monster_hp,
        });

        if monster_hp == 0 {
            self.slay(out);
            return;
        }

        let taken = self.variation.apply(monster_damage(monster_attack));
        let hp = self.state.player.take_damage(taken);
        self.state.append(format!("{name}の反撃！{taken}ダメージを受けた！"));
        out.push(GameEvent::PlayerDamaged { damage: taken, hp });

        if self.state.player.is_down() {
            self.finish(Outcome::Defeat, out);
            return;
        }
        self.end_turn(out);
    }

    /// The engaged monster fell: award experience, then win or end the turn.
    fn slay(&mut self, out: &mut ActionOutcome) {
        let Some(monster) = self.state.monster.take() else {
            return;
        };
        self.state.append(format!("{}を倒した！", monster.name));
        out.push(GameEvent::MonsterDefeated {
            monster: monster.name.clone(),
            exp: monster.exp,
        });

        if monster.exp > 0 {
            self.gain_experience(monster.exp, "", out);
        }

        if monster.is_boss {
            self.finish(Outcome::Victory, out);
        } else {
            self.end_turn(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_damage_floor() {
        assert_eq!(player_damage(3, 0, 3), 1);
        assert_eq!(player_damage(0, 0, 0), 1);
        assert_eq!(player_damage(5, 10, 3), 12);
    }

    #[test]
    fn test_monster_damage() {
        assert_eq!(monster_damage(0), 0);
        assert_eq!(monster_damage(1), 0);
        assert_eq!(monster_damage(5), 4);
    }

    #[test]
    fn test_variation_off_is_identity() {
        let mut variation = DamageVariation::Off;
        assert!(variation.is_off());
        assert_eq!(variation.apply(7), 7);
    }

    #[test]
    fn test_fixed_factor_rounds() {
        let mut variation = DamageVariation::Fixed(1.2);
        assert_eq!(variation.apply(4), 5); // 4.8
        assert_eq!(variation.apply(2), 2); // 2.4

        let mut variation = DamageVariation::Fixed(0.8);
        assert_eq!(variation.apply(3), 2); // 2.4
    }

    #[test]
    fn test_jitter_stays_in_band() {
        let mut variation = DamageVariation::jitter(0.2, 7);
        for _ in 0..500 {
            let dealt = variation.apply(10);
            assert!((8..=12).contains(&dealt), "{dealt}");
        }
    }

    #[test]
    fn test_jitter_is_seeded() {
        let mut a = DamageVariation::jitter(0.2, 99);
        let mut b = DamageVariation::jitter(0.2, 99);
        let rolls_a: Vec<u32> = (0..20).map(|_| a.apply(25)).collect();
        let rolls_b: Vec<u32> = (0..20).map(|_| b.apply(25)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
