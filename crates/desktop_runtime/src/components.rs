//! Desktop shell UI composition and interaction surfaces.

mod browser;
mod desktop_icons;
mod dialogs;
mod dock;
mod menu_bar;
mod terminal_window;

use std::time::Duration;

use leptos::*;

use self::{
    browser::BrowserOverlay,
    desktop_icons::{DesktopIcons, NotificationCenter},
    dialogs::SystemDialogs,
    dock::Dock,
    menu_bar::MenuBar,
    terminal_window::TerminalWindow,
};

use crate::{
    model::{AppId, DesktopState},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    window_manager::{shortcut_action, KeyChord},
};

/// Traffic-light title bar shared by the terminal, dialogs, and the browser window.
#[component]
fn TitleBar(
    title: &'static str,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div data-ui-slot="titlebar">
            <div data-ui-slot="traffic-lights">
                <button
                    type="button"
                    data-ui-kind="traffic-light-close"
                    aria-label=format!("Close {title}")
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if let Some(on_close) = on_close {
                            on_close.call(());
                        }
                    }
                ></button>
                <button type="button" data-ui-kind="traffic-light-minimize" aria-hidden="true"></button>
                <button type="button" data-ui-kind="traffic-light-zoom" aria-hidden="true"></button>
            </div>
            <div data-ui-slot="titlebar-title">{title}</div>
        </div>
    }
}

fn close_app_callback(app: AppId) -> Callback<()> {
    let runtime = use_desktop_runtime();
    Callback::new(move |_| runtime.dispatch_action(DesktopAction::CloseApp(app)))
}

fn open_app_callback(app: AppId) -> Callback<()> {
    let runtime = use_desktop_runtime();
    Callback::new(move |_| runtime.dispatch_action(DesktopAction::OpenApp(app)))
}

#[component]
fn DesktopWallpaper() -> impl IntoView {
    view! {
        <div data-ui-slot="wallpaper-layer" data-ui-kind="wallpaper-layer" aria-hidden="true">
            <div data-ui-slot="wallpaper-image"></div>
            <div data-ui-slot="wallpaper-tint"></div>
        </div>
    }
}

fn keydown_action(ev: &web_sys::KeyboardEvent) -> Option<DesktopAction> {
    let code = ev.code();
    shortcut_action(KeyChord {
        code: &code,
        meta: ev.meta_key(),
    })
}

#[component]
/// Renders the full desktop shell UI and wires global keyboard and pointer listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let overlay_open = create_memo(move |_| state.get().browser.is_open());

    let global_shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if let Some(action) = keydown_action(&ev) {
            ev.prevent_default();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || global_shortcut_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if runtime.state.get_untracked().menus.any_open() {
            runtime.dispatch_action(DesktopAction::DismissMenus);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    on_cleanup(move || runtime.dispatch_action(DesktopAction::Teardown));

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-phase=move || state.get().phase.label()
        >
            <div data-ui-slot="desktop-content" data-blurred=move || overlay_open.get().to_string()>
                <DesktopWallpaper />
                <MenuBar />
                <DesktopIcons />
                <NotificationCenter />
                <TerminalWindow />
                <Dock />
            </div>
            <BrowserOverlay />
            <SystemDialogs />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuClockSnapshot {
    /// 0 = Sunday.
    weekday: u32,
    /// 1-based.
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MenuClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    fn time_label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn date_time_label(self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = self
            .month
            .checked_sub(1)
            .and_then(|index| MONTHS.get(index as usize))
            .copied()
            .unwrap_or("");
        format!("{weekday} {month} {} {}", self.day, self.time_label())
    }
}

const CLOCK_REFRESH: Duration = Duration::from_secs(1);

fn loading_label(progress: u8) -> String {
    format!("Loading progress: {:.1}%", f32::from(progress))
}

fn countdown_label(state: &DesktopState) -> String {
    format!("Opening browser in {} seconds...", state.redirect_countdown)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_labels_use_short_names_and_padded_time() {
        let snapshot = MenuClockSnapshot {
            weekday: 2,
            month: 10,
            day: 14,
            hour: 9,
            minute: 5,
        };
        assert_eq!(snapshot.time_label(), "09:05");
        assert_eq!(snapshot.date_time_label(), "Tue Oct 14 09:05");
    }

    #[test]
    fn clock_label_tolerates_out_of_range_fields() {
        let snapshot = MenuClockSnapshot {
            weekday: 9,
            month: 0,
            day: 1,
            hour: 23,
            minute: 59,
        };
        assert_eq!(snapshot.date_time_label(), "  1 23:59");
    }

    #[test]
    fn loading_label_has_one_decimal() {
        assert_eq!(loading_label(0), "Loading progress: 0.0%");
        assert_eq!(loading_label(42), "Loading progress: 42.0%");
        assert_eq!(loading_label(100), "Loading progress: 100.0%");
    }

    #[test]
    fn countdown_label_reads_state() {
        let mut state = DesktopState::default();
        state.redirect_countdown = 2;
        assert_eq!(countdown_label(&state), "Opening browser in 2 seconds...");
    }
}
