//! App set, focus, dialog, menu, and keyboard-shortcut transitions used by the desktop reducer.

use crate::model::{AppId, AppMenu, DesktopState, DEFAULT_APP, LAUNCHER_APP};
use crate::overlay;
use crate::reducer::{DesktopAction, RuntimeEffect};

/// Opens `app`, focusing it. The browser is routed to the overlay instead of a dialog.
pub fn open_app(state: &mut DesktopState, app: AppId, effects: &mut Vec<RuntimeEffect>) {
    if !state.is_app_open(app) {
        state.open_windows.push(app);
    }
    state.active_app = app;
    dismiss_menus(state);

    if app.is_browser() {
        state.browser.manually_closed = false;
        overlay::open(state, effects);
        overlay::resume_countdown(state, effects);
        return;
    }

    if let Some(dialog) = app.dialog() {
        state.dialogs.set(dialog, true);
    }
}

/// Closes `app` and moves focus to the first remaining open app, or [`DEFAULT_APP`].
pub fn close_app(state: &mut DesktopState, app: AppId, effects: &mut Vec<RuntimeEffect>) {
    state.open_windows.retain(|open| *open != app);
    if let Some(dialog) = app.dialog() {
        state.dialogs.set(dialog, false);
    }
    if app.is_browser() {
        overlay::close(state, effects);
    }
    if state.active_app == app {
        state.active_app = state.open_windows.first().copied().unwrap_or(DEFAULT_APP);
    }
}

pub fn quit_active_app(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    let active = state.active_app;
    if active != DEFAULT_APP {
        close_app(state, active, effects);
    }
}

/// `Escape`: closes the browser overlay when open and the first visible dialog.
pub fn dismiss_frontmost(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    if state.browser.is_open() {
        close_app(state, AppId::Browser, effects);
    }
    if let Some(dialog) = state.dialogs.first_visible() {
        close_app(state, dialog.app(), effects);
    }
}

pub fn toggle_apple_menu(state: &mut DesktopState) {
    state.menus.apple_menu_open = !state.menus.apple_menu_open;
    state.menus.active_app_menu = None;
}

pub fn toggle_app_menu(state: &mut DesktopState, menu: AppMenu) {
    state.menus.active_app_menu = if state.menus.active_app_menu == Some(menu) {
        None
    } else {
        Some(menu)
    };
    state.menus.apple_menu_open = false;
}

pub fn dismiss_menus(state: &mut DesktopState) {
    state.menus.apple_menu_open = false;
    state.menus.active_app_menu = None;
}

/// Physical key and modifier snapshot of a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord<'a> {
    pub code: &'a str,
    pub meta: bool,
}

/// Maps a global key chord to its reducer action.
///
/// `Meta+Space` opens the launcher, `Meta+KeyQ` quits the active app, and `Escape` dismisses
/// the frontmost overlay.
pub fn shortcut_action(chord: KeyChord<'_>) -> Option<DesktopAction> {
    match (chord.meta, chord.code) {
        (true, "Space") => Some(DesktopAction::OpenApp(LAUNCHER_APP)),
        (true, "KeyQ") => Some(DesktopAction::QuitActiveApp),
        (_, "Escape") => Some(DesktopAction::DismissFrontmost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DialogId, DialogVisibility, INITIAL_APP};
    use crate::reducer::reduce_desktop;

    #[test]
    fn opening_same_app_twice_keeps_single_entry() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Terminal));
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Terminal));

        assert_eq!(state.open_windows, vec![AppId::Terminal]);
        assert_eq!(state.active_app, AppId::Terminal);
        assert_eq!(state.dialogs.first_visible(), None);
    }

    #[test]
    fn reopening_dialog_app_keeps_it_visible() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Mail));
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Mail));

        assert!(state.dialogs.is_visible(DialogId::Mail));
        assert_eq!(state.open_windows, vec![AppId::Mail]);
    }

    #[test]
    fn browser_open_skips_dialogs_and_starts_overlay() {
        let mut state = DesktopState::default();
        state.browser.manually_closed = true;
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Browser));

        assert!(state.browser.is_open());
        assert!(!state.browser.manually_closed);
        assert_eq!(state.dialogs, DialogVisibility::default());
        assert_eq!(state.active_app, AppId::Browser);
    }

    #[test]
    fn closing_last_active_app_falls_back_to_default() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Calculator));
        reduce_desktop(&mut state, DesktopAction::CloseApp(AppId::Calculator));

        assert!(state.open_windows.is_empty());
        assert_eq!(state.active_app, DEFAULT_APP);
        assert!(!state.dialogs.is_visible(DialogId::Calculator));
    }

    #[test]
    fn closing_active_app_focuses_first_remaining() {
        let mut state = DesktopState::default();
        for app in [AppId::Mail, AppId::Music, AppId::About] {
            reduce_desktop(&mut state, DesktopAction::OpenApp(app));
        }
        reduce_desktop(&mut state, DesktopAction::CloseApp(AppId::About));
        assert_eq!(state.active_app, AppId::Mail);

        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Mail));
        reduce_desktop(&mut state, DesktopAction::CloseApp(AppId::Mail));
        assert_eq!(state.active_app, AppId::Music);
    }

    #[test]
    fn closing_inactive_app_keeps_focus() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Mail));
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Calendar));
        reduce_desktop(&mut state, DesktopAction::CloseApp(AppId::Mail));

        assert_eq!(state.active_app, AppId::Calendar);
        assert_eq!(state.open_windows, vec![AppId::Calendar]);
    }

    #[test]
    fn quit_never_closes_default_app() {
        let mut state = DesktopState::default();
        assert_eq!(state.active_app, INITIAL_APP);
        reduce_desktop(&mut state, DesktopAction::QuitActiveApp);
        assert_eq!(state.active_app, DEFAULT_APP);

        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Finder));
        reduce_desktop(&mut state, DesktopAction::QuitActiveApp);
        assert!(state.dialogs.is_visible(DialogId::Finder));
        assert_eq!(state.open_windows, vec![AppId::Finder]);
    }

    #[test]
    fn escape_closes_first_dialog_in_declaration_order() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Music));
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Preferences));

        reduce_desktop(&mut state, DesktopAction::DismissFrontmost);
        assert!(!state.dialogs.is_visible(DialogId::Preferences));
        assert!(state.dialogs.is_visible(DialogId::Music));
        assert_eq!(state.active_app, AppId::Music);
    }

    #[test]
    fn escape_closes_open_browser_as_manual_close() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::OpenApp(AppId::Browser));
        reduce_desktop(&mut state, DesktopAction::DismissFrontmost);

        assert!(!state.browser.is_open());
        assert!(state.browser.manually_closed);
        assert!(!state.is_app_open(AppId::Browser));
    }

    #[test]
    fn apple_menu_then_app_menu_leaves_only_app_menu_open() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleAppleMenu);
        assert!(state.menus.apple_menu_open);

        reduce_desktop(&mut state, DesktopAction::ToggleAppMenu(AppMenu::File));
        assert!(!state.menus.apple_menu_open);
        assert_eq!(state.menus.active_app_menu, Some(AppMenu::File));

        reduce_desktop(&mut state, DesktopAction::ToggleAppMenu(AppMenu::File));
        assert_eq!(state.menus.active_app_menu, None);
    }

    #[test]
    fn apple_menu_toggle_clears_app_menu() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleAppMenu(AppMenu::Edit));
        reduce_desktop(&mut state, DesktopAction::ToggleAppleMenu);
        assert!(state.menus.apple_menu_open);
        assert_eq!(state.menus.active_app_menu, None);

        reduce_desktop(&mut state, DesktopAction::DismissMenus);
        assert!(!state.menus.any_open());
    }

    #[test]
    fn shortcuts_map_to_actions() {
        let chord = |code, meta| KeyChord { code, meta };
        assert_eq!(
            shortcut_action(chord("Space", true)),
            Some(DesktopAction::OpenApp(AppId::Spotlight))
        );
        assert_eq!(
            shortcut_action(chord("KeyQ", true)),
            Some(DesktopAction::QuitActiveApp)
        );
        assert_eq!(
            shortcut_action(chord("Escape", false)),
            Some(DesktopAction::DismissFrontmost)
        );
        assert_eq!(shortcut_action(chord("KeyQ", false)), None);
        assert_eq!(shortcut_action(chord("Space", false)), None);
    }
}
