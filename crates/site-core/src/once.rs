//! Fire-once bookkeeping for visibility triggers.

use fnv::FnvHashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Unobserved,
    Triggered,
    Done,
}

/// Tracks observed regions so each key's callback runs at most once, even if
/// the platform reports the same intersection again.
#[derive(Debug)]
pub struct OnceRegistry<K> {
    states: FnvHashMap<K, TriggerState>,
}

impl<K: Eq + Hash> Default for OnceRegistry<K> {
    fn default() -> Self {
        Self {
            states: FnvHashMap::default(),
        }
    }
}

impl<K: Eq + Hash> OnceRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`. Re-observing a known key keeps its state.
    pub fn observe(&mut self, key: K) {
        self.states.entry(key).or_insert(TriggerState::Unobserved);
    }

    /// True the first time it is called for an observed key, false after.
    pub fn fire(&mut self, key: &K) -> bool {
        match self.states.get_mut(key) {
            Some(state) if *state == TriggerState::Unobserved => {
                *state = TriggerState::Triggered;
                true
            }
            _ => false,
        }
    }

    pub fn complete(&mut self, key: &K) {
        if let Some(state) = self.states.get_mut(key) {
            if *state == TriggerState::Triggered {
                *state = TriggerState::Done;
            }
        }
    }

    pub fn state(&self, key: &K) -> Option<TriggerState> {
        self.states.get(key).copied()
    }

    /// Keys still waiting for their first trigger.
    pub fn pending(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == TriggerState::Unobserved)
            .count()
    }
}
