//! Desktop simulation runtime for the Bullish Cafe coming-soon page.
//!
//! The boot sequencer, command player, app manager, and browser overlay controller are a pure
//! reducer over [`DesktopState`]. Timers are side-effect intents executed by the Leptos shell in
//! the browser and by [`HeadlessDesktop`] in tests.

pub mod boot_script;
pub mod components;
mod effect_executor;
pub mod model;
mod overlay;
pub mod reducer;
mod runtime_context;
pub mod simulation;
pub mod timers;
pub mod timing;
pub mod window_manager;

pub use boot_script::{accelerate_script, builtin_boot_script, parse_boot_script, BootScriptError};
pub use components::DesktopShell;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use simulation::HeadlessDesktop;
pub use timers::{TimerSlot, TimerTable, TimerToken};
pub use timing::{parse_launch_options_from_query, LaunchOptions, SequencerTiming};
pub use window_manager::{shortcut_action, KeyChord};
