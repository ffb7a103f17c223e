//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.
//!
//! The reducer owns the phase controller and command player directly. App/menu handling lives
//! in [`crate::window_manager`] and the browser overlay in [`crate::overlay`]; both are driven
//! from here so every transition goes through [`reduce_desktop`].

use std::time::Duration;

use crate::model::{
    advance_percent, AppId, AppMenu, CommandCursor, DesktopState, SequencePhase,
    PROGRESS_COMPLETE,
};
use crate::overlay;
use crate::timers::{TimerSlot, TimerToken};
use crate::window_manager;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Enter the boot phase and schedule the first command. Repeated starts are ignored.
    StartSequence,
    /// A timer armed through [`RuntimeEffect::ScheduleTimer`] elapsed.
    TimerFired {
        /// Slot the timer was scheduled for.
        slot: TimerSlot,
        /// Token issued when the timer was armed.
        token: TimerToken,
    },
    /// The command at `index` finished typing.
    CommandComplete {
        /// Script index the completion belongs to.
        index: usize,
    },
    /// Open (or focus) an application.
    OpenApp(AppId),
    /// Close an application.
    CloseApp(AppId),
    /// Close the active app unless it is the default app.
    QuitActiveApp,
    /// Close the browser overlay and the first visible dialog.
    DismissFrontmost,
    /// Toggle the Apple menu open/closed.
    ToggleAppleMenu,
    /// Toggle one of the app menus.
    ToggleAppMenu(AppMenu),
    /// Close every open menu.
    DismissMenus,
    /// Cancel every timer; the runtime is going away.
    Teardown,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Schedule `TimerFired { slot, token }` after `after`.
    ScheduleTimer {
        /// Slot to schedule.
        slot: TimerSlot,
        /// Token to deliver back.
        token: TimerToken,
        /// Delay before firing.
        after: Duration,
    },
    /// Drop any pending timer for `slot`.
    CancelTimer {
        /// Slot to cancel.
        slot: TimerSlot,
    },
    /// The phase controller entered a new phase.
    AnnouncePhase(SequencePhase),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for the boot sequence, the
/// desktop app set, and the browser overlay. Stale or duplicate signals are absorbed as
/// no-ops, so it never fails.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    if state.torn_down {
        return effects;
    }

    match action {
        DesktopAction::StartSequence => {
            if !state.started {
                state.started = true;
                enter_boot(state, &mut effects);
            }
        }
        DesktopAction::TimerFired { slot, token } => {
            if state.timers.take_if_current(slot, token) {
                on_timer(state, slot, &mut effects);
            }
        }
        DesktopAction::CommandComplete { index } => {
            handle_command_complete(state, index, &mut effects);
        }
        DesktopAction::OpenApp(app) => window_manager::open_app(state, app, &mut effects),
        DesktopAction::CloseApp(app) => window_manager::close_app(state, app, &mut effects),
        DesktopAction::QuitActiveApp => window_manager::quit_active_app(state, &mut effects),
        DesktopAction::DismissFrontmost => {
            window_manager::dismiss_frontmost(state, &mut effects)
        }
        DesktopAction::ToggleAppleMenu => window_manager::toggle_apple_menu(state),
        DesktopAction::ToggleAppMenu(menu) => window_manager::toggle_app_menu(state, menu),
        DesktopAction::DismissMenus => window_manager::dismiss_menus(state),
        DesktopAction::Teardown => {
            for slot in state.timers.armed_slots() {
                disarm(state, slot, &mut effects);
            }
            state.torn_down = true;
            return effects;
        }
    }

    overlay::reconcile(state, &mut effects);
    effects
}

pub(crate) fn arm(
    state: &mut DesktopState,
    slot: TimerSlot,
    after: Duration,
    effects: &mut Vec<RuntimeEffect>,
) {
    let token = state.timers.arm(slot);
    effects.push(RuntimeEffect::ScheduleTimer { slot, token, after });
}

pub(crate) fn disarm(state: &mut DesktopState, slot: TimerSlot, effects: &mut Vec<RuntimeEffect>) {
    if state.timers.disarm(slot) {
        effects.push(RuntimeEffect::CancelTimer { slot });
    }
}

fn on_timer(state: &mut DesktopState, slot: TimerSlot, effects: &mut Vec<RuntimeEffect>) {
    match slot {
        TimerSlot::CommandReveal => reveal_command(state, effects),
        TimerSlot::TypingTick => type_next_char(state, effects),
        TimerSlot::CommandSettle => settle_command(state, effects),
        TimerSlot::BootSettle => {
            if state.phase == SequencePhase::Boot {
                enter_loading(state, effects);
            }
        }
        TimerSlot::LoadingTick => advance_loading(state, effects),
        TimerSlot::LoadingSettle => {
            if state.phase == SequencePhase::Loading {
                enter_complete(state, effects);
            }
        }
        TimerSlot::CountdownTick => overlay::countdown_tick(state, effects),
        TimerSlot::BrowserTick => overlay::loading_tick(state, effects),
        TimerSlot::BrowserContent => overlay::show_content(state),
    }
}

fn enter_boot(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    state.phase = SequencePhase::Boot;
    state.cursor = CommandCursor::default();
    effects.push(RuntimeEffect::AnnouncePhase(SequencePhase::Boot));
    match state.script.first().map(|command| command.delay()) {
        Some(delay) => arm(state, TimerSlot::CommandReveal, delay, effects),
        None => {
            let settle = state.timing.boot_settle();
            arm(state, TimerSlot::BootSettle, settle, effects);
        }
    }
}

fn reveal_command(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase != SequencePhase::Boot {
        return;
    }
    let Some(command) = state.current_command() else {
        return;
    };
    let empty = command.char_len() == 0;
    state.cursor.command_revealed = true;
    state.cursor.typed_chars = 0;
    if empty {
        let index = state.cursor.index;
        handle_command_complete(state, index, effects);
    } else {
        let interval = state.timing.typing_interval();
        arm(state, TimerSlot::TypingTick, interval, effects);
    }
}

fn type_next_char(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase != SequencePhase::Boot || !state.cursor.command_revealed {
        return;
    }
    let Some(len) = state.current_command().map(|command| command.char_len()) else {
        return;
    };
    state.cursor.typed_chars = (state.cursor.typed_chars + 1).min(len);
    if state.cursor.typed_chars >= len {
        let index = state.cursor.index;
        handle_command_complete(state, index, effects);
    } else {
        let interval = state.timing.typing_interval();
        arm(state, TimerSlot::TypingTick, interval, effects);
    }
}

/// Marks the command at `index` complete at most once; anything stale is ignored.
fn handle_command_complete(
    state: &mut DesktopState,
    index: usize,
    effects: &mut Vec<RuntimeEffect>,
) {
    if index >= state.script.len()
        || index != state.cursor.index
        || state.phase != SequencePhase::Boot
        || !state.cursor.command_revealed
        || state.cursor.completion_signaled
    {
        return;
    }
    let len = state.script[index].char_len();
    state.cursor.completion_signaled = true;
    state.cursor.typed_chars = len;
    state.cursor.output_revealed = true;
    disarm(state, TimerSlot::TypingTick, effects);
    let settle = state.timing.command_settle();
    arm(state, TimerSlot::CommandSettle, settle, effects);
}

fn settle_command(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase != SequencePhase::Boot || !state.cursor.completion_signaled {
        return;
    }
    let next = state.cursor.index + 1;
    match state.script.get(next).map(|command| command.delay()) {
        Some(delay) => {
            state.cursor = CommandCursor {
                index: next,
                ..CommandCursor::default()
            };
            arm(state, TimerSlot::CommandReveal, delay, effects);
        }
        None => {
            let settle = state.timing.boot_settle();
            arm(state, TimerSlot::BootSettle, settle, effects);
        }
    }
}

fn enter_loading(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    for slot in [
        TimerSlot::CommandReveal,
        TimerSlot::TypingTick,
        TimerSlot::CommandSettle,
    ] {
        disarm(state, slot, effects);
    }
    state.phase = SequencePhase::Loading;
    state.loading_progress = 0;
    effects.push(RuntimeEffect::AnnouncePhase(SequencePhase::Loading));
    let tick = state.timing.loading_tick();
    arm(state, TimerSlot::LoadingTick, tick, effects);
}

fn advance_loading(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.phase != SequencePhase::Loading {
        return;
    }
    state.loading_progress = advance_percent(state.loading_progress, state.timing.loading_step);
    if state.loading_progress >= PROGRESS_COMPLETE {
        let settle = state.timing.loading_settle();
        arm(state, TimerSlot::LoadingSettle, settle, effects);
    } else {
        let tick = state.timing.loading_tick();
        arm(state, TimerSlot::LoadingTick, tick, effects);
    }
}

fn enter_complete(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    disarm(state, TimerSlot::LoadingTick, effects);
    state.phase = SequencePhase::Complete;
    state.redirect_countdown = state.timing.redirect_countdown;
    effects.push(RuntimeEffect::AnnouncePhase(SequencePhase::Complete));
    overlay::start_countdown(state, effects);
}
