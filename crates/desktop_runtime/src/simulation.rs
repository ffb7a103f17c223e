//! Deterministic headless driver that executes reducer effects against a virtual clock.
//!
//! The browser executor maps [`RuntimeEffect::ScheduleTimer`] onto real timeouts; this driver
//! keeps them in a queue instead so sequences can be stepped and inspected without a browser.

use std::time::Duration;

use crate::model::{DesktopState, SequencePhase};
use crate::reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
use crate::timers::{TimerSlot, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    slot: TimerSlot,
    token: TimerToken,
}

#[derive(Debug, Clone)]
pub struct HeadlessDesktop {
    state: DesktopState,
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTimer>,
    announced: Vec<(Duration, SequencePhase)>,
}

impl HeadlessDesktop {
    pub fn new(state: DesktopState) -> Self {
        Self {
            state,
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
            announced: Vec::new(),
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Phases announced so far with the virtual time they were entered at.
    pub fn announced_phases(&self) -> &[(Duration, SequencePhase)] {
        &self.announced
    }

    pub fn pending_slots(&self) -> Vec<TimerSlot> {
        self.pending.iter().map(|timer| timer.slot).collect()
    }

    pub fn dispatch(&mut self, action: DesktopAction) {
        let effects = reduce_desktop(&mut self.state, action);
        self.apply(effects);
    }

    /// Fires the earliest pending timer, returning its slot.
    pub fn step(&mut self) -> Option<TimerSlot> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)?;
        let timer = self.pending.remove(next);
        self.now = self.now.max(timer.due);
        self.dispatch(DesktopAction::TimerFired {
            slot: timer.slot,
            token: timer.token,
        });
        Some(timer.slot)
    }

    /// Fires every timer due within `by`, then moves the clock to the end of the window.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        while self.pending.iter().any(|timer| timer.due <= target) {
            if self.step().is_none() {
                break;
            }
        }
        self.now = target;
    }

    /// Steps until `done` holds, no timers remain, or `max_steps` timers fired.
    pub fn run_until<F>(&mut self, max_steps: usize, mut done: F) -> bool
    where
        F: FnMut(&DesktopState) -> bool,
    {
        for _ in 0..max_steps {
            if done(&self.state) {
                return true;
            }
            if self.step().is_none() {
                return done(&self.state);
            }
        }
        done(&self.state)
    }

    /// Steps every timer, handing the state to `observe` after each one.
    pub fn run_observed<F>(&mut self, max_steps: usize, mut observe: F)
    where
        F: FnMut(TimerSlot, &DesktopState),
    {
        for _ in 0..max_steps {
            match self.step() {
                Some(slot) => observe(slot, &self.state),
                None => return,
            }
        }
    }

    fn apply(&mut self, effects: Vec<RuntimeEffect>) {
        for effect in effects {
            match effect {
                RuntimeEffect::ScheduleTimer { slot, token, after } => {
                    self.pending.retain(|timer| timer.slot != slot);
                    self.pending.push(PendingTimer {
                        due: self.now + after,
                        seq: self.next_seq,
                        slot,
                        token,
                    });
                    self.next_seq += 1;
                }
                RuntimeEffect::CancelTimer { slot } => {
                    self.pending.retain(|timer| timer.slot != slot);
                }
                RuntimeEffect::AnnouncePhase(phase) => self.announced.push((self.now, phase)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, BootCommand, OverlayStage};
    use crate::timing::SequencerTiming;

    fn one_command() -> HeadlessDesktop {
        HeadlessDesktop::new(DesktopState::new(
            vec![BootCommand::new("ls", 100)],
            SequencerTiming::default(),
        ))
    }

    #[test]
    fn advance_fires_only_due_timers() {
        let mut desktop = one_command();
        desktop.dispatch(DesktopAction::StartSequence);

        desktop.advance(Duration::from_millis(99));
        assert!(!desktop.state().cursor.command_revealed);

        desktop.advance(Duration::from_millis(1));
        assert!(desktop.state().cursor.command_revealed);
        assert_eq!(desktop.state().cursor.typed_chars, 0);

        desktop.advance(Duration::from_millis(60));
        assert_eq!(desktop.state().cursor.typed_chars, 2);
        assert!(desktop.state().cursor.output_revealed);
        assert_eq!(desktop.now(), Duration::from_millis(160));
    }

    #[test]
    fn phases_are_announced_at_expected_times() {
        let mut desktop = one_command();
        desktop.dispatch(DesktopAction::StartSequence);
        let finished = desktop.run_until(1_000, |state| state.browser.stage == OverlayStage::Ready);
        assert!(finished);

        // reveal 100, typing 2×30, settle 1500, boot settle 2000
        let loading_at = Duration::from_millis(100 + 60 + 1500 + 2000);
        // 50 ticks × 100 ms, settle 1000
        let complete_at = loading_at + Duration::from_millis(5000 + 1000);
        assert_eq!(
            desktop.announced_phases(),
            &[
                (Duration::ZERO, SequencePhase::Boot),
                (loading_at, SequencePhase::Loading),
                (complete_at, SequencePhase::Complete),
            ]
        );
    }

    #[test]
    fn cancelled_timers_leave_the_queue() {
        let mut desktop = one_command();
        desktop.dispatch(DesktopAction::OpenApp(AppId::Browser));
        assert_eq!(desktop.pending_slots(), vec![TimerSlot::BrowserTick]);

        desktop.dispatch(DesktopAction::CloseApp(AppId::Browser));
        assert!(desktop.pending_slots().is_empty());
        assert_eq!(desktop.step(), None);
    }
}
