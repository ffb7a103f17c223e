//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI
//! composition stays in [`crate::components`].

use leptos::*;

use crate::{
    boot_script::{accelerate_script, builtin_boot_script},
    effect_executor,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    timing::LaunchOptions,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn initial_state(options: &LaunchOptions) -> DesktopState {
    let script = match builtin_boot_script() {
        Ok(script) => accelerate_script(script, options.acceleration),
        Err(err) => {
            logging::warn!("boot script unavailable, running without commands: {err}");
            Vec::new()
        }
    };
    DesktopState::new(script, options.timing)
}

fn apply_launch_options(runtime: DesktopRuntimeContext, options: LaunchOptions) {
    for rejected in &options.rejected {
        logging::warn!("ignoring launch option: {rejected}");
    }
    if options.autostart {
        runtime.dispatch_action(DesktopAction::StartSequence);
    }
    for app in options.open {
        runtime.dispatch_action(DesktopAction::OpenApp(app));
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the boot sequence.
pub fn DesktopProvider(
    /// Launch options parsed by the entry layer; defaults autostart the sequence.
    #[prop(optional)]
    options: Option<LaunchOptions>,
    children: Children,
) -> impl IntoView {
    let options = options.unwrap_or_default();
    let state = create_rw_signal(initial_state(&options));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        // Teardown may arrive while the owner is being disposed.
        let Some(mut desktop) = state.try_get_untracked() else {
            return;
        };
        let previous = desktop.clone();

        let new_effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            state.set(desktop);
        }
        if !new_effects.is_empty() {
            let _ = effects.try_update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    apply_launch_options(runtime, options);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
