//! Browser overlay controller: countdown, loading bar, and the sticky manual-close flag.

use crate::model::{advance_percent, DesktopState, OverlayStage, SequencePhase, PROGRESS_COMPLETE};
use crate::reducer::{arm, disarm, RuntimeEffect};
use crate::timers::TimerSlot;

/// Starts loading the overlay. A no-op while it is already open.
pub(crate) fn open(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.browser.is_open() {
        return;
    }
    state.browser.stage = OverlayStage::Loading;
    state.browser.loading_progress = 0;
    let tick = state.timing.browser_tick();
    arm(state, TimerSlot::BrowserTick, tick, effects);
}

/// User dismissal. Automatic opening stays suppressed until an explicit open.
pub(crate) fn close(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    state.browser.stage = OverlayStage::Closed;
    state.browser.manually_closed = true;
    for slot in [
        TimerSlot::BrowserTick,
        TimerSlot::BrowserContent,
        TimerSlot::CountdownTick,
    ] {
        disarm(state, slot, effects);
    }
}

pub(crate) fn start_countdown(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.browser.manually_closed || state.redirect_countdown == 0 {
        return;
    }
    let tick = state.timing.countdown_tick();
    arm(state, TimerSlot::CountdownTick, tick, effects);
}

/// Re-arms a countdown that a manual close interrupted.
pub(crate) fn resume_countdown(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase == SequencePhase::Complete
        && !state.torn_down
        && !state.timers.is_armed(TimerSlot::CountdownTick)
    {
        start_countdown(state, effects);
    }
}

pub(crate) fn countdown_tick(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase != SequencePhase::Complete || state.browser.manually_closed {
        return;
    }
    if state.redirect_countdown <= 1 {
        state.redirect_countdown = 0;
        open(state, effects);
    } else {
        state.redirect_countdown -= 1;
        let tick = state.timing.countdown_tick();
        arm(state, TimerSlot::CountdownTick, tick, effects);
    }
}

pub(crate) fn loading_tick(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.browser.stage != OverlayStage::Loading {
        return;
    }
    state.browser.loading_progress =
        advance_percent(state.browser.loading_progress, state.timing.browser_step);
    if state.browser.loading_progress >= PROGRESS_COMPLETE {
        let delay = state.timing.browser_content_delay();
        arm(state, TimerSlot::BrowserContent, delay, effects);
    } else {
        let tick = state.timing.browser_tick();
        arm(state, TimerSlot::BrowserTick, tick, effects);
    }
}

pub(crate) fn show_content(state: &mut DesktopState) {
    if state.browser.stage == OverlayStage::Loading {
        state.browser.stage = OverlayStage::Ready;
    }
}

/// Opens the overlay if the countdown already expired but the open never happened.
pub(crate) fn reconcile(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase == SequencePhase::Complete
        && state.redirect_countdown == 0
        && !state.browser.is_open()
        && !state.browser.manually_closed
        && !state.torn_down
    {
        open(state, effects);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppId;
    use crate::reducer::{reduce_desktop, DesktopAction};

    fn complete_state(countdown: u8) -> DesktopState {
        let mut state = DesktopState::default();
        state.started = true;
        state.phase = SequencePhase::Complete;
        state.redirect_countdown = countdown;
        state
    }

    #[test]
    fn opening_twice_keeps_progress() {
        let mut state = DesktopState::default();
        let mut effects = Vec::new();
        open(&mut state, &mut effects);
        state.browser.loading_progress = 40;
        let token = state.timers.armed_token(TimerSlot::BrowserTick);

        open(&mut state, &mut effects);
        assert_eq!(state.browser.loading_progress, 40);
        assert_eq!(state.timers.armed_token(TimerSlot::BrowserTick), token);
    }

    #[test]
    fn loading_reaches_ready_after_content_delay() {
        let mut state = DesktopState::default();
        let mut effects = Vec::new();
        open(&mut state, &mut effects);

        let mut ticks = 0;
        while state.timers.is_armed(TimerSlot::BrowserTick) {
            state.timers.disarm(TimerSlot::BrowserTick);
            loading_tick(&mut state, &mut effects);
            ticks += 1;
        }
        assert_eq!(ticks, 13);
        assert_eq!(state.browser.loading_progress, 100);
        assert_eq!(state.browser.stage, OverlayStage::Loading);
        assert!(state.timers.is_armed(TimerSlot::BrowserContent));

        show_content(&mut state);
        assert!(state.browser.content_ready());
    }

    #[test]
    fn reconcile_opens_when_countdown_expired_without_open() {
        let mut state = complete_state(0);
        let mut effects = Vec::new();
        reconcile(&mut state, &mut effects);
        assert_eq!(state.browser.stage, OverlayStage::Loading);
    }

    #[test]
    fn manual_close_blocks_countdown_and_reconcile() {
        let mut state = complete_state(2);
        let mut effects = Vec::new();
        start_countdown(&mut state, &mut effects);
        close(&mut state, &mut effects);
        assert!(!state.timers.is_armed(TimerSlot::CountdownTick));

        countdown_tick(&mut state, &mut effects);
        state.redirect_countdown = 0;
        reconcile(&mut state, &mut effects);
        assert!(!state.browser.is_open());
        assert_eq!(state.redirect_countdown, 0);
    }

    #[test]
    fn explicit_open_after_manual_close_clears_flag() {
        let mut state = complete_state(0);
        reduce_desktop(&mut state, DesktopAction::CloseApp(AppId::Browser));
        assert!(state.browser.manually_closed);
        assert!(!state.browser.is_open());

        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Browser));
        assert!(!state.browser.manually_closed);
        assert!(state.browser.is_open());
    }

    #[test]
    fn explicit_open_after_manual_close_rearms_countdown() {
        let mut state = complete_state(2);
        let mut effects = Vec::new();
        start_countdown(&mut state, &mut effects);
        reduce_desktop(&mut state, DesktopAction::CloseApp(AppId::Browser));
        assert!(!state.timers.is_armed(TimerSlot::CountdownTick));

        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Browser));
        assert!(state.timers.is_armed(TimerSlot::CountdownTick));
        assert_eq!(state.redirect_countdown, 2);
    }
}
