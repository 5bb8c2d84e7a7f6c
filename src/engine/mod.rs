//! The game engine: the single writer of `GameState`.
//!
//! ## Turn flow
//!
//! Every accepted operation except `toggle_discard_mode` and `restart` ends
//! the turn. Ending a turn either finalizes defeat (HP 0) or increments the
//! turn counter and draws one card into a random empty slot.
//!
//! ## Rejection
//!
//! Invalid calls (out-of-range slot, empty slot, move card in battle,
//! attack with no monster, anything after game over) are silent no-ops:
//! they return `ActionOutcome { accepted: false, .. }` and leave the state
//! untouched.
//!
//! ## Usage
//!
//! ```
//! use card_dragon::engine::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new().build(42).unwrap();
//! assert_eq!(engine.state().player.hand.card_count(), 8);
//!
//! let outcome = engine.wait();
//! assert!(outcome.accepted);
//! assert_eq!(engine.state().turns, 1);
//! ```

pub mod combat;
pub mod event;
pub mod progression;
mod travel;

pub use combat::{monster_damage, player_damage, DamageVariation};
pub use event::{ActionOutcome, FlavorDelay, GameEvent};
pub use progression::award_experience;

use crate::cards::{Card, HealKind};
use crate::content::{draw_card, required_exp};
use crate::core::{Action, ConfigError, GameConfig, GameRng, GameState, Outcome, Player, RandomSource};
use crate::map::generate_map;

/// Builder for an `Engine`.
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: GameConfig,
    variation: Option<DamageVariation>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration. It is validated by `build`.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the damage variation layer.
    pub fn damage_variation(mut self, variation: DamageVariation) -> Self {
        self.variation = Some(variation);
        self
    }

    /// Build a seeded engine.
    ///
    /// Unless overridden, damage jitter uses the configured amplitude on an
    /// independent stream derived from the same seed.
    pub fn build(self, seed: u64) -> Result<Engine<GameRng>, ConfigError> {
        self.config.validate()?;
        let rng = GameRng::new(seed);
        let variation = self
            .variation
            .unwrap_or_else(|| seeded_variation(&self.config, &rng));
        Ok(Engine::start(self.config, rng, variation))
    }

    /// Build an engine over any random source.
    ///
    /// Damage variation defaults to `Off` here, so an injected source fully
    /// determines the game.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<Engine<R>, ConfigError> {
        self.config.validate()?;
        let variation = self.variation.unwrap_or(DamageVariation::Off);
        Ok(Engine::start(self.config, rng, variation))
    }
}

/// Jitter on the seed's `"damage"` stream, or `Off` for a zero amplitude.
fn seeded_variation(config: &GameConfig, rng: &GameRng) -> DamageVariation {
    if config.damage_variation > 0.0 {
        DamageVariation::Jitter {
            amplitude: config.damage_variation,
            rng: rng.for_context("damage"),
        }
    } else {
        DamageVariation::Off
    }
}

/// Owns the state, the configuration and the random sources.
#[derive(Clone, Debug)]
pub struct Engine<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
    variation: DamageVariation,
    state: GameState,
}

impl Engine<GameRng> {
    /// Default configuration, seeded. Same engine as
    /// `EngineBuilder::new().build(seed)`.
    ///
    /// The shipped defaults always pass `validate`, so this cannot fail.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let config = GameConfig::default();
        let rng = GameRng::new(seed);
        let variation = seeded_variation(&config, &rng);
        Self::start(config, rng, variation)
    }
}

impl<R: RandomSource> Engine<R> {
    fn start(config: GameConfig, mut rng: R, variation: DamageVariation) -> Self {
        let state = Self::deal(&config, &mut rng);
        Self {
            config,
            rng,
            variation,
            state,
        }
    }

    /// Fresh player, fresh map, starting cards.
    fn deal(config: &GameConfig, rng: &mut R) -> GameState {
        let mut player = Player::new(&config.initial, config.hand_size);
        for _ in 0..config.starting_cards {
            let card = draw_card(&config.cards, &config.weapons, rng);
            if player.hand.insert_random(card, rng).is_none() {
                break;
            }
        }
        let map = generate_map(config, rng);
        GameState::new(player, map)
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for hosts that restore or script positions.
    ///
    /// The caller is responsible for keeping it consistent (`hp <= max_hp`,
    /// `position <= goal`).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the damage variation layer.
    pub fn set_damage_variation(&mut self, variation: DamageVariation) {
        self.variation = variation;
    }

    /// Experience still needed for the next level.
    pub fn exp_to_next_level(&self) -> u32 {
        let player = &self.state.player;
        required_exp(&self.config.leveling, player.level).saturating_sub(player.exp)
    }

    /// Dispatch an `Action` to its operation.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::PlayCard { slot } => self.play_card(slot),
            Action::Attack { weapon_power } => self.attack(weapon_power),
            Action::Flee => self.flee(),
            Action::ToggleDiscardMode => self.toggle_discard_mode(),
            Action::Discard { slot } => self.discard(slot),
            Action::Wait => self.wait(),
            Action::Restart => self.restart(),
        }
    }

    /// Play the card in `slot`; in discard mode, discard it instead.
    ///
    /// Rejected for an empty or out-of-range slot, for a move card during
    /// battle, and for a weapon card outside battle.
    pub fn play_card(&mut self, slot: usize) -> ActionOutcome {
        if self.state.is_game_over() {
            return ActionOutcome::rejected();
        }
        let Some(card) = self.state.player.hand.get(slot).filter(|c| !c.is_empty()) else {
            return ActionOutcome::rejected();
        };
        if self.state.discard_mode {
            return self.discard(slot);
        }

        let in_battle = self.state.in_battle();
        let mut out = ActionOutcome::accepted();
        match card {
            Card::Empty => return ActionOutcome::rejected(),
            Card::Move { .. } if in_battle => return ActionOutcome::rejected(),
            Card::Weapon { .. } if !in_battle => return ActionOutcome::rejected(),
            Card::Move { steps } => {
                // The slot stays occupied while the landing cell resolves, so
                // treasure cannot refill it.
                self.advance(steps, &mut out);
                self.consume(slot, &mut out);
            }
            Card::Heal { size } => {
                self.consume(slot, &mut out);
                let amount = match size {
                    HealKind::Small => self.config.heal_amount,
                    HealKind::Large => self.config.heal_plus_amount,
                };
                let healed = self.state.player.heal(amount);
                self.state.say(format!("+{amount}回復！"));
                out.push(GameEvent::Healed {
                    amount: healed,
                    hp: self.state.player.hp,
                });
            }
            Card::Weapon { power } => {
                // Cleared first: the attack ends the turn itself.
                self.consume(slot, &mut out);
                self.strike(power, &mut out);
                return out;
            }
        }

        self.end_turn(&mut out);
        out
    }

    /// Attack the engaged monster with `weapon_power` on top of base attack.
    pub fn attack(&mut self, weapon_power: u32) -> ActionOutcome {
        if self.state.is_game_over() || !self.state.in_battle() {
            return ActionOutcome::rejected();
        }
        let mut out = ActionOutcome::accepted();
        self.strike(weapon_power, &mut out);
        out
    }

    /// Leave the battle and fall back `flee_distance` cells (floored at 0).
    pub fn flee(&mut self) -> ActionOutcome {
        if self.state.is_game_over() || !self.state.in_battle() {
            return ActionOutcome::rejected();
        }
        let mut out = ActionOutcome::accepted();
        let distance = self.config.flee_distance;
        let from = self.state.player.position;
        let to = from.saturating_sub(distance);
        self.state.player.position = to;
        self.state.monster = None;
        self.state.say(format!("逃げた！{distance}マス後退する！"));
        out.push(GameEvent::Fled { from, to });
        self.end_turn(&mut out);
        out
    }

    /// Flip discard mode. Does not end the turn.
    pub fn toggle_discard_mode(&mut self) -> ActionOutcome {
        if self.state.is_game_over() {
            return ActionOutcome::rejected();
        }
        self.state.discard_mode = !self.state.discard_mode;
        let mut out = ActionOutcome::accepted();
        out.push(GameEvent::DiscardModeChanged {
            enabled: self.state.discard_mode,
        });
        out
    }

    /// Throw away the card in `slot`, draw a replacement, leave discard mode
    /// and end the turn.
    pub fn discard(&mut self, slot: usize) -> ActionOutcome {
        if self.state.is_game_over() {
            return ActionOutcome::rejected();
        }
        let Some(card) = self.state.player.hand.take(slot) else {
            return ActionOutcome::rejected();
        };
        let mut out = ActionOutcome::accepted();
        out.push(GameEvent::CardDiscarded { slot, card });

        let old = card.label(&self.config.weapons);
        match self.draw_into_hand(&mut out) {
            Some(drawn) => {
                let new = drawn.label(&self.config.weapons);
                self.state.say(format!("{old}を捨てて、{new}を引いた。"));
            }
            None => self.state.say(format!("{old}を捨てた。")),
        }

        if self.state.discard_mode {
            self.state.discard_mode = false;
            out.push(GameEvent::DiscardModeChanged { enabled: false });
        }
        self.end_turn(&mut out);
        out
    }

    /// Skip the turn, drawing one extra card.
    pub fn wait(&mut self) -> ActionOutcome {
        if self.state.is_game_over() {
            return ActionOutcome::rejected();
        }
        let mut out = ActionOutcome::accepted();
        match self.draw_into_hand(&mut out) {
            Some(card) => {
                let label = card.label(&self.config.weapons);
                self.state.say(format!("様子を見た…{label}を手に入れた！"));
            }
            None => self.state.say("様子を見た…手札がいっぱいだ。"),
        }
        self.end_turn(&mut out);
        out
    }

    /// Start over: fresh player, hand and map. Always accepted.
    pub fn restart(&mut self) -> ActionOutcome {
        self.state = Self::deal(&self.config, &mut self.rng);
        let mut out = ActionOutcome::accepted();
        out.push(GameEvent::GameStarted);
        out
    }

    /// Empty a hand slot that is being played.
    fn consume(&mut self, slot: usize, out: &mut ActionOutcome) {
        if let Some(card) = self.state.player.hand.take(slot) {
            out.push(GameEvent::CardPlayed { slot, card });
        }
    }

    /// Draw one card into a random empty slot. `None` when the hand is full.
    fn draw_into_hand(&mut self, out: &mut ActionOutcome) -> Option<Card> {
        if self.state.player.hand.is_full() {
            return None;
        }
        let card = draw_card(&self.config.cards, &self.config.weapons, &mut self.rng);
        let slot = self.state.player.hand.insert_random(card, &mut self.rng)?;
        out.push(GameEvent::CardDrawn { slot, card });
        Some(card)
    }

    /// End-of-turn bookkeeping.
    fn end_turn(&mut self, out: &mut ActionOutcome) {
        if self.state.player.is_down() {
            if !self.state.is_game_over() {
                self.finish(Outcome::Defeat, out);
            }
            return;
        }
        if self.state.is_game_over() {
            return;
        }
        self.state.turns += 1;
        out.push(GameEvent::TurnEnded {
            turn: self.state.turns,
        });
        self.draw_into_hand(out);
    }

    /// Enter the terminal state.
    fn finish(&mut self, outcome: Outcome, out: &mut ActionOutcome) {
        self.state.outcome = Some(outcome);
        self.state.discard_mode = false;
        match outcome {
            Outcome::Victory => {
                self.state.append("ドラゴンを倒した！ゲームクリア！");
                out.push(GameEvent::BossDefeated);
            }
            Outcome::Defeat => {
                self.state.append("力尽きた…ゲームオーバー");
                out.push(GameEvent::PlayerDefeated);
            }
        }
    }
}
