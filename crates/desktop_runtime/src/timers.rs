//! Named timer slots and the generation tokens that make stale callbacks harmless.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimerSlot {
    /// Per-command delay before its text starts typing.
    CommandReveal,
    /// One character of the current command.
    TypingTick,
    /// Pause between output reveal and cursor advance.
    CommandSettle,
    /// Pause between the last command and the loading phase.
    BootSettle,
    LoadingTick,
    /// Pause between full progress and the complete phase.
    LoadingSettle,
    CountdownTick,
    BrowserTick,
    /// Pause between full browser progress and rendered content.
    BrowserContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

/// Tracks the single armed token per slot.
///
/// Re-arming a slot invalidates the previous token, so a callback scheduled for it becomes a
/// no-op when it eventually fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTable {
    next_token: u64,
    armed: BTreeMap<TimerSlot, TimerToken>,
}

impl Default for TimerTable {
    fn default() -> Self {
        Self {
            next_token: 1,
            armed: BTreeMap::new(),
        }
    }
}

impl TimerTable {
    pub fn arm(&mut self, slot: TimerSlot) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.saturating_add(1);
        self.armed.insert(slot, token);
        token
    }

    /// Returns `true` when the slot was armed.
    pub fn disarm(&mut self, slot: TimerSlot) -> bool {
        self.armed.remove(&slot).is_some()
    }

    /// Consumes the slot when `token` is the armed one.
    pub fn take_if_current(&mut self, slot: TimerSlot, token: TimerToken) -> bool {
        if self.armed.get(&slot) == Some(&token) {
            self.armed.remove(&slot);
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.armed.contains_key(&slot)
    }

    pub fn armed_token(&self, slot: TimerSlot) -> Option<TimerToken> {
        self.armed.get(&slot).copied()
    }

    pub fn armed_slots(&self) -> Vec<TimerSlot> {
        self.armed.keys().copied().collect()
    }
}
