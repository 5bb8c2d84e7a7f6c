//! Fixed-capacity hand of card slots.
//!
//! The hand never grows or shrinks: playing or discarding a card leaves an
//! `Empty` slot behind, and draws fill an empty slot chosen at random.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::core::RandomSource;

/// Ordered card slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: Vec<Card>,
}

impl Hand {
    /// Create a hand of `size` empty slots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![Card::Empty; size],
        }
    }

    /// Number of slots (constant for the lifetime of the hand).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Card] {
        &self.slots
    }

    /// Card in a slot. Out-of-range slots read as `None`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Card> {
        self.slots.get(slot).copied()
    }

    /// Number of non-empty slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if every slot holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|c| !c.is_empty())
    }

    /// Indices of empty slots, in order.
    #[must_use]
    pub fn empty_slots(&self) -> SmallVec<[usize; 8]> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove and return the card in a slot, leaving it empty.
    ///
    /// Returns `None` for an out-of-range or already empty slot.
    pub fn take(&mut self, slot: usize) -> Option<Card> {
        let entry = self.slots.get_mut(slot)?;
        if entry.is_empty() {
            return None;
        }
        Some(std::mem::take(entry))
    }

    /// Put a card into a uniformly chosen empty slot.
    ///
    /// Returns the slot used, or `None` if the hand is full (the card is dropped).
    pub fn insert_random<R: RandomSource + ?Sized>(&mut self, card: Card, rng: &mut R) -> Option<usize> {
        let empty = self.empty_slots();
        if empty.is_empty() {
            return None;
        }
        let slot = empty[rng.index(empty.len())];
        self.slots[slot] = card;
        Some(slot)
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.fill(Card::Empty);
    }

    /// Overwrite a slot directly.
    ///
    /// Returns `false` for an out-of-range slot.
    pub fn set(&mut self, slot: usize, card: Card) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = card;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_new_hand_is_empty() {
        let hand = Hand::new(8);
        assert_eq!(hand.capacity(), 8);
        assert_eq!(hand.card_count(), 0);
        assert_eq!(hand.empty_slots().len(), 8);
        assert!(!hand.is_full());
    }

    #[test]
    fn test_take_leaves_empty_slot() {
        let mut hand = Hand::new(3);
        hand.set(1, Card::Move { steps: 3 });

        assert_eq!(hand.take(1), Some(Card::Move { steps: 3 }));
        assert_eq!(hand.get(1), Some(Card::Empty));
        assert_eq!(hand.capacity(), 3);

        // Already empty, out of range
        assert_eq!(hand.take(1), None);
        assert_eq!(hand.take(9), None);
    }

    #[test]
    fn test_insert_random_picks_among_empty_slots() {
        let mut hand = Hand::new(4);
        hand.set(0, Card::Move { steps: 1 });
        hand.set(2, Card::Move { steps: 2 });

        // Empty slots are [1, 3]; a high roll picks the second.
        let mut rng = ScriptedRng::constant(0.9);
        assert_eq!(hand.insert_random(Card::Weapon { power: 5 }, &mut rng), Some(3));

        let mut rng = ScriptedRng::constant(0.0);
        assert_eq!(hand.insert_random(Card::Weapon { power: 6 }, &mut rng), Some(1));

        assert!(hand.is_full());
        assert_eq!(hand.insert_random(Card::Weapon { power: 7 }, &mut rng), None);
        assert_eq!(hand.card_count(), 4);
    }

    #[test]
    fn test_clear() {
        let mut hand = Hand::new(2);
        hand.set(0, Card::Move { steps: 1 });
        hand.clear();
        assert_eq!(hand.card_count(), 0);
        assert_eq!(hand.capacity(), 2);
        assert!(!hand.set(5, Card::Move { steps: 1 }));
    }
}
