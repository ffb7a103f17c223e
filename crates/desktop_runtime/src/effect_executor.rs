//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::collections::HashMap;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::{
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    timers::TimerSlot,
};

type PendingTimeouts = StoredValue<HashMap<TimerSlot, TimeoutHandle>>;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    let pending: PendingTimeouts = store_value(HashMap::new());

    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, pending, effect);
        }
    });

    on_cleanup(move || {
        let _ = pending.try_update_value(|timeouts| {
            for (_, handle) in timeouts.drain() {
                handle.clear();
            }
        });
    });
}

fn run_runtime_effect(
    runtime: DesktopRuntimeContext,
    pending: PendingTimeouts,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::ScheduleTimer { slot, token, after } => {
            cancel(pending, slot);
            let fire = move || {
                let _ = pending.try_update_value(|timeouts| timeouts.remove(&slot));
                runtime.dispatch_action(DesktopAction::TimerFired { slot, token });
            };
            match set_timeout_with_handle(fire, after) {
                Ok(handle) => pending.update_value(|timeouts| {
                    timeouts.insert(slot, handle);
                }),
                Err(err) => logging::warn!("failed to schedule {slot:?} timer: {err:?}"),
            }
        }
        RuntimeEffect::CancelTimer { slot } => cancel(pending, slot),
        RuntimeEffect::AnnouncePhase(phase) => {
            logging::log!("desktop sequence entered {} phase", phase.label());
        }
    }
}

fn cancel(pending: PendingTimeouts, slot: TimerSlot) {
    if let Some(Some(handle)) = pending.try_update_value(|timeouts| timeouts.remove(&slot)) {
        handle.clear();
    }
}
