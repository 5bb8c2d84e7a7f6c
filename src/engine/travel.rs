//! Movement along the track and cell-event resolution.
//!
//! Events are rolled when the player lands, not when the map is built, so
//! the same cell can do different things on two visits.

use super::event::{ActionOutcome, FlavorDelay, GameEvent};
use super::Engine;
use crate::content::{cell_event, random_monster, CellEvent, Monster};
use crate::core::{Outcome, RandomSource};

impl<R: RandomSource> Engine<R> {
    /// Walk forward, clamped at the goal, then resolve the landing cell.
    pub(super) fn advance(&mut self, steps: u32, out: &mut ActionOutcome) {
        let to = self.relocate(self.state.player.position.saturating_add(steps), out);
        self.state.say(format!("{steps}マス進んだ。"));
        if self.arrive_at_goal(to, out) {
            return;
        }
        self.resolve_cell(to, out);
    }

    /// Move the player (clamped to the track) and report the move.
    fn relocate(&mut self, target: u32, out: &mut ActionOutcome) -> u32 {
        let goal = self.state.goal();
        let from = self.state.player.position;
        let to = target.min(goal);
        self.state.player.position = to;
        out.push(GameEvent::Moved { from, to });
        to
    }

    /// Spawn the boss when standing on the goal with no battle running.
    fn arrive_at_goal(&mut self, position: u32, out: &mut ActionOutcome) -> bool {
        if position != self.state.goal() || self.state.in_battle() {
            return false;
        }
        let boss = self.config.boss.clone().boss();
        self.engage(boss, out);
        true
    }

    /// Put a monster in front of the player.
    pub(super) fn engage(&mut self, monster: Monster, out: &mut ActionOutcome) {
        self.state.append(format!("{}が現れた！", monster.name));
        out.push(GameEvent::BattleStarted {
            monster: monster.name.clone(),
            boss: monster.is_boss,
        });
        self.state.monster = Some(monster);
    }

    /// Roll and apply the landing cell's event.
    fn resolve_cell(&mut self, position: u32, out: &mut ActionOutcome) {
        let Some(color) = self.state.map.cell(position).map(|cell| cell.color) else {
            return;
        };
        let event = cell_event(&self.config.cell_events, color, &mut self.rng);
        out.push(GameEvent::CellResolved { position, color, event });

        match event {
            CellEvent::Nothing => self.state.append("何も起こらなかった。"),
            CellEvent::Monster => match random_monster(&self.config.monsters, &mut self.rng) {
                Some(monster) => self.engage(monster, out),
                None => self.state.append("何も起こらなかった。"),
            },
            CellEvent::Inn { heal } => {
                let amount = self.state.player.heal(heal);
                self.state.append(format!("宿屋で休んだ！HPが{amount}回復した。"));
                out.push(GameEvent::Healed {
                    amount,
                    hp: self.state.player.hp,
                });
            }
            CellEvent::Trap { damage } => {
                let hp = self.state.player.take_damage(damage);
                self.state.append(format!("罠だ！{damage}のダメージを受けた！"));
                out.push(GameEvent::PlayerDamaged { damage, hp });
                if self.state.player.is_down() {
                    self.finish(Outcome::Defeat, out);
                }
            }
            CellEvent::Treasure { cards } => {
                self.state.append("宝箱を見つけた！");
                for _ in 0..cards {
                    match self.draw_into_hand(out) {
                        Some(card) => {
                            let label = card.label(&self.config.weapons);
                            self.state.append(format!("{label}を手に入れた！"));
                        }
                        None => {
                            self.state.append("手札がいっぱいだ…");
                            break;
                        }
                    }
                }
            }
            CellEvent::Village { exp } => {
                self.gain_experience(exp, "村人を助けた！", out);
            }
            CellEvent::Carriage { steps } => {
                self.state.append("馬車が通りかかった！");
                self.ride(position.saturating_add(steps), out);
                let moved = self.state.player.position - position;
                self.state.append(format!("{moved}マス進んだ！"));
                let to = self.state.player.position;
                self.arrive_at_goal(to, out);
            }
            CellEvent::Detour { steps } => {
                self.state.append("道に迷った！");
                self.ride(position.saturating_sub(steps), out);
                let moved = position - self.state.player.position;
                self.state.append(format!("{moved}マス戻された…"));
            }
        }
    }

    /// Second-stage move of a carriage or detour. The move applies now; the
    /// narration after this point carries a delay hint for the view.
    fn ride(&mut self, target: u32, out: &mut ActionOutcome) {
        let reveal_from_line = self.state.message_lines().count();
        self.relocate(target, out);
        out.flavor_delay = Some(FlavorDelay {
            millis: self.config.flavor_delay_ms,
            reveal_from_line,
        });
    }
}
