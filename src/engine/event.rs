//! Engine-emitted events.
//!
//! Every operation reports what happened as a list of `GameEvent`s. Views
//! subscribe to these for animation and sound (defeat overlay, level-up
//! jingle) instead of the engine touching any presentation itself.

use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::content::CellEvent;
use crate::map::CellColor;

/// Something that happened during an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new game began (initial build or restart).
    GameStarted,
    /// A card left the hand to be played.
    CardPlayed { slot: usize, card: Card },
    /// A card entered the hand.
    CardDrawn { slot: usize, card: Card },
    /// A card was thrown away.
    CardDiscarded { slot: usize, card: Card },
    /// Discard mode switched.
    DiscardModeChanged { enabled: bool },
    /// The player changed cells.
    Moved { from: u32, to: u32 },
    /// The landed cell rolled an event.
    CellResolved {
        position: u32,
        color: CellColor,
        event: CellEvent,
    },
    /// HP restored.
    Healed { amount: u32, hp: u32 },
    /// A battle began.
    BattleStarted { monster: String, boss: bool },
    /// The player hit the monster.
    PlayerAttacked { damage: u32, monster_hp: u32 },
    /// The monster hit back (or a trap hit the player).
    PlayerDamaged { damage: u32, hp: u32 },
    /// The monster fell.
    MonsterDefeated { monster: String, exp: u32 },
    /// Experience awarded.
    ExperienceGained { amount: u32 },
    /// One level gained; multi-level awards emit one per level.
    LevelUp { from: u32, to: u32 },
    /// The player ran away.
    Fled { from: u32, to: u32 },
    /// The boss fell: the game is won.
    BossDefeated,
    /// HP reached 0: the game is lost.
    PlayerDefeated,
    /// End-of-turn bookkeeping ran.
    TurnEnded { turn: u32 },
}

/// Presentation hint: the last lines of the message describe a delayed
/// effect (carriage/detour). The state already reflects the effect; a view
/// may hold back lines from `reveal_from_line` on for `millis`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FlavorDelay {
    /// Suggested delay.
    pub millis: u32,
    /// First message line to hold back.
    pub reveal_from_line: usize,
}

/// Result of one engine operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActionOutcome {
    /// False when the call was rejected as a no-op; the state is untouched.
    pub accepted: bool,
    /// What happened, in order.
    pub events: SmallVec<[GameEvent; 4]>,
    /// Optional presentation delay hint.
    pub flavor_delay: Option<FlavorDelay>,
}

impl ActionOutcome {
    /// A rejected call.
    #[must_use]
    pub fn rejected() -> Self {
        Self::default()
    }

    /// An accepted call with no events yet.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            ..Self::default()
        }
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Check if an event was recorded.
    #[must_use]
    pub fn contains(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }

    /// Check if any recorded event matches.
    pub fn any(&self, pred: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }

    /// Number of `LevelUp` events.
    #[must_use]
    pub fn levels_gained(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
            .count()
    }
}
